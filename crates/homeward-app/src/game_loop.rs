//! Single-threaded game loop. Drives a `SessionEngine` through menus,
//! sessions and restarts, one frame per iteration, and records how each
//! session ended.

use log::info;
use serde::Serialize;

use homeward_core::commands::{FrameInput, PlayerCommand};
use homeward_core::enums::{GamePhase, ScreenAction, ScreenKind};
use homeward_core::state::GameStateSnapshot;
use homeward_sim::SessionEngine;

use crate::adapter::{FrameClock, InputSource, MenuScreen, Renderer};

/// Longest step simulated in one frame. A blocking menu or a stalled host
/// would otherwise hand the first frame after it a huge delta.
const MAX_FRAME_DT: f32 = 0.25;

/// Bounds for a headless run.
#[derive(Debug, Clone, Copy)]
pub struct LoopLimits {
    /// Sessions still running after this many frames are abandoned.
    pub max_frames_per_session: u64,
    /// How many times the loop may pick Play Again.
    pub max_restarts: u32,
}

impl Default for LoopLimits {
    fn default() -> Self {
        Self {
            max_frames_per_session: 60 * 60 * 5,
            max_restarts: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionOutcome {
    Won,
    Lost,
    /// Quit or frame limit hit while playing.
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub outcome: SessionOutcome,
    pub frames: u64,
    pub elapsed_secs: f64,
    pub wave: u32,
    pub kills: u32,
    pub health: i32,
}

impl SessionRecord {
    fn from_snapshot(snapshot: &GameStateSnapshot, outcome: SessionOutcome) -> Self {
        Self {
            outcome,
            frames: snapshot.time.frame,
            elapsed_secs: snapshot.time.elapsed_secs,
            wave: snapshot.hud.wave,
            kills: snapshot.hud.kills,
            health: snapshot.hud.health,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub sessions: Vec<SessionRecord>,
    /// Every frame the loop ticked, menus included.
    pub total_frames: u64,
}

fn command_for(action: ScreenAction, play: PlayerCommand) -> PlayerCommand {
    match action {
        ScreenAction::StartGame | ScreenAction::PlayAgain => play,
        ScreenAction::Quit => PlayerCommand::Quit,
    }
}

/// Run until the engine exits.
///
/// Each iteration: 1. decide this frame's commands and input from the last
/// snapshot, 2. tick the engine, 3. render the new snapshot.
pub fn run(
    engine: &mut SessionEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    menu: &mut dyn MenuScreen,
    clock: &mut dyn FrameClock,
    limits: LoopLimits,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut last = engine.tick(0.0, &FrameInput::default());
    let mut scenery = engine.scenery();

    loop {
        // 1. Commands and input
        let mut frame = FrameInput::default();
        match last.phase {
            GamePhase::Exited => break,
            GamePhase::Start => {
                let action = menu.choose(ScreenKind::Start, &last);
                engine.queue_command(command_for(action, PlayerCommand::StartGame));
            }
            GamePhase::Won | GamePhase::Lost => {
                let (outcome, screen) = if last.phase == GamePhase::Won {
                    (SessionOutcome::Won, ScreenKind::Win)
                } else {
                    (SessionOutcome::Lost, ScreenKind::GameOver)
                };
                summary
                    .sessions
                    .push(SessionRecord::from_snapshot(&last, outcome));
                info!(
                    "session {} {:?} after {} frames (wave {}, {} kills)",
                    summary.sessions.len(),
                    outcome,
                    last.time.frame,
                    last.hud.wave,
                    last.hud.kills
                );

                let command = if summary.sessions.len() > limits.max_restarts as usize {
                    PlayerCommand::Quit
                } else {
                    command_for(menu.choose(screen, &last), PlayerCommand::Restart)
                };
                engine.queue_command(command);
            }
            GamePhase::Playing => {
                let polled = input.poll(&last);
                if polled.quit || last.time.frame >= limits.max_frames_per_session {
                    summary.sessions.push(SessionRecord::from_snapshot(
                        &last,
                        SessionOutcome::Abandoned,
                    ));
                    info!("session abandoned after {} frames", last.time.frame);
                    engine.queue_command(PlayerCommand::Quit);
                } else {
                    frame = polled.frame;
                }
            }
        }

        // 2. Tick
        let was_playing = last.phase == GamePhase::Playing;
        let dt = clock.next_dt().min(MAX_FRAME_DT);
        last = engine.tick(dt, &frame);
        summary.total_frames += 1;
        if !was_playing && last.phase == GamePhase::Playing {
            // Home was just (re)chosen.
            scenery = engine.scenery();
        }

        // 3. Render
        renderer.render(&last, &scenery);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use homeward_core::geometry::Rect;
    use homeward_core::map::{MapData, MapEntity};
    use homeward_core::state::SceneryView;
    use homeward_sim::SimConfig;

    use crate::adapter::{FixedClock, PolledInput};

    fn point(name: &str, x: f32, y: f32) -> MapEntity {
        MapEntity {
            name: name.to_string(),
            position: Vec2::new(x, y),
        }
    }

    fn engine() -> SessionEngine {
        let map = MapData {
            borders: vec![Rect::new(-2000.0, -2064.0, 4000.0, 64.0)],
            entities: vec![
                point("Player", 0.0, 0.0),
                point("Home", 1500.0, 0.0),
                point("North", 0.0, -1500.0),
            ],
            ..Default::default()
        };
        SessionEngine::new(SimConfig::default(), map).unwrap()
    }

    struct Scripted {
        frame: FrameInput,
        quit_on_poll: Option<u32>,
        polls: u32,
    }

    impl Scripted {
        fn holding(frame: FrameInput) -> Self {
            Self {
                frame,
                quit_on_poll: None,
                polls: 0,
            }
        }
    }

    impl InputSource for Scripted {
        fn poll(&mut self, _last: &GameStateSnapshot) -> PolledInput {
            self.polls += 1;
            PolledInput {
                frame: self.frame,
                quit: self.quit_on_poll.is_some_and(|n| self.polls >= n),
            }
        }
    }

    struct Picks {
        start: ScreenAction,
        terminal: ScreenAction,
        shown: Vec<ScreenKind>,
    }

    impl Picks {
        fn play() -> Self {
            Self {
                start: ScreenAction::StartGame,
                terminal: ScreenAction::PlayAgain,
                shown: Vec::new(),
            }
        }
    }

    impl MenuScreen for Picks {
        fn choose(&mut self, screen: ScreenKind, _last: &GameStateSnapshot) -> ScreenAction {
            self.shown.push(screen);
            match screen {
                ScreenKind::Start => self.start,
                ScreenKind::Win | ScreenKind::GameOver => self.terminal,
            }
        }
    }

    #[derive(Default)]
    struct Counting {
        frames: u32,
        obstacles_seen: usize,
    }

    impl Renderer for Counting {
        fn render(&mut self, _snapshot: &GameStateSnapshot, scenery: &SceneryView) {
            self.frames += 1;
            self.obstacles_seen = scenery.obstacles.len();
        }
    }

    fn walk_east() -> FrameInput {
        FrameInput {
            right: true,
            pointer: Vec2::new(640.0, 360.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_wins_and_uses_restart_budget() {
        let mut engine = engine();
        let mut input = Scripted::holding(walk_east());
        let mut renderer = Counting::default();
        let mut menu = Picks::play();
        let mut clock = FixedClock { dt: 0.125 };
        let limits = LoopLimits {
            max_frames_per_session: 400,
            max_restarts: 1,
        };

        let summary = run(
            &mut engine,
            &mut input,
            &mut renderer,
            &mut menu,
            &mut clock,
            limits,
        );

        assert_eq!(summary.sessions.len(), 2);
        assert!(summary
            .sessions
            .iter()
            .all(|s| s.outcome == SessionOutcome::Won));
        assert_eq!(engine.phase(), GamePhase::Exited);
        assert_eq!(engine.sessions_started(), 2);
        // The budget ran out after the second win, so only one Win screen.
        assert_eq!(menu.shown, vec![ScreenKind::Start, ScreenKind::Win]);
        assert_eq!(renderer.frames as u64, summary.total_frames);
        assert_eq!(renderer.obstacles_seen, 0, "borders are not drawn");
    }

    #[test]
    fn test_frame_limit_abandons_session() {
        let mut engine = engine();
        let mut input = Scripted::holding(FrameInput::default());
        let mut menu = Picks::play();
        let limits = LoopLimits {
            max_frames_per_session: 10,
            max_restarts: 3,
        };

        let summary = run(
            &mut engine,
            &mut input,
            &mut Counting::default(),
            &mut menu,
            &mut FixedClock { dt: 0.125 },
            limits,
        );

        assert_eq!(summary.sessions.len(), 1);
        let session = &summary.sessions[0];
        assert_eq!(session.outcome, SessionOutcome::Abandoned);
        assert_eq!(session.frames, 10);
        assert_eq!(session.health, 5);
        assert_eq!(engine.phase(), GamePhase::Exited);
    }

    #[test]
    fn test_quit_from_start_screen() {
        let mut engine = engine();
        let mut menu = Picks {
            start: ScreenAction::Quit,
            ..Picks::play()
        };

        let summary = run(
            &mut engine,
            &mut Scripted::holding(FrameInput::default()),
            &mut Counting::default(),
            &mut menu,
            &mut FixedClock { dt: 0.125 },
            LoopLimits::default(),
        );

        assert!(summary.sessions.is_empty());
        assert_eq!(summary.total_frames, 1);
        assert_eq!(engine.sessions_started(), 0);
    }

    #[test]
    fn test_window_close_while_playing() {
        let mut engine = engine();
        let mut input = Scripted {
            quit_on_poll: Some(3),
            ..Scripted::holding(FrameInput::default())
        };

        let summary = run(
            &mut engine,
            &mut input,
            &mut Counting::default(),
            &mut Picks::play(),
            &mut FixedClock { dt: 0.125 },
            LoopLimits::default(),
        );

        assert_eq!(summary.sessions.len(), 1);
        assert_eq!(summary.sessions[0].outcome, SessionOutcome::Abandoned);
        assert_eq!(summary.sessions[0].frames, 3);
    }

    #[test]
    fn test_large_deltas_are_capped() {
        let mut engine = engine();
        let limits = LoopLimits {
            max_frames_per_session: 4,
            max_restarts: 0,
        };

        let summary = run(
            &mut engine,
            &mut Scripted::holding(FrameInput::default()),
            &mut Counting::default(),
            &mut Picks::play(),
            &mut FixedClock { dt: 10.0 },
            limits,
        );

        assert_eq!(summary.sessions[0].elapsed_secs, 1.0);
    }
}
