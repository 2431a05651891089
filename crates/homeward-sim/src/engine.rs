//! Session engine, the core of the game.
//!
//! `SessionEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no window or renderer), enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use homeward_core::commands::{FrameInput, PlayerCommand};
use homeward_core::config::GameConfig;
use homeward_core::enums::GamePhase;
use homeward_core::error::SetupError;
use homeward_core::events::GameEvent;
use homeward_core::geometry::Rect;
use homeward_core::map::{MapData, SessionLayout};
use homeward_core::mask::SpriteMasks;
use homeward_core::state::{GameStateSnapshot, SceneryView};
use homeward_core::types::SimTime;

use crate::systems;
use crate::wave::WaveState;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same session.
    pub seed: u64,
    pub game: GameConfig,
    pub masks: SpriteMasks,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
            masks: SpriteMasks::default(),
        }
    }
}

/// The session engine. Owns the ECS world and all session state.
pub struct SessionEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: GameConfig,
    masks: SpriteMasks,
    layout: SessionLayout,
    wave: WaveState,
    /// Collision set for the current session, in map order.
    obstacles: Vec<Rect>,
    home: Option<Vec2>,
    sessions_started: u32,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SessionEngine {
    /// Validate tuning and map data and create an engine on the start
    /// screen. Every fatal condition is reported here, so starting or
    /// restarting a session cannot fail later.
    pub fn new(config: SimConfig, map: MapData) -> Result<Self, SetupError> {
        config.game.validate()?;
        let layout = SessionLayout::from_map(&map)?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            wave: WaveState::new(&config.game.waves, 0.0),
            config: config.game,
            masks: config.masks,
            layout,
            obstacles: Vec::new(),
            home: None,
            sessions_started: 0,
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, advance one frame of `dt` seconds if
    /// playing, and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.time.advance(dt);
            self.run_systems(dt.max(0.0), input);
        }

        self.snapshot()
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current session time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Center of this session's Home, once a session has started.
    pub fn home(&self) -> Option<Vec2> {
        self.home
    }

    /// Number of sessions started, counting restarts.
    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ground tiles and visible obstacles for drawing.
    pub fn scenery(&self) -> SceneryView {
        systems::snapshot::build_scenery(&self.world, &self.layout)
    }

    /// Build a snapshot of the current state, draining pending events.
    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.config,
            events,
        )
    }

    /// Spawn a live enemy directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: homeward_core::enums::EnemyKind,
        center: Vec2,
    ) -> hecs::Entity {
        let id = world_setup::next_id(&mut self.next_entity_id);
        world_setup::spawn_enemy(&mut self.world, kind, center, &self.config, id)
    }

    /// Spawn a bullet directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, center: Vec2, direction: Vec2) -> hecs::Entity {
        let id = world_setup::next_id(&mut self.next_entity_id);
        world_setup::spawn_bullet(
            &mut self.world,
            center,
            direction,
            &self.config,
            self.time.elapsed_secs,
            id,
        )
    }

    /// Mutable access to the world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable access to the wave state (for tests).
    #[cfg(test)]
    pub fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Start {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                if self.phase.is_terminal() {
                    self.start_session();
                }
            }
            PlayerCommand::Quit => {
                if self.phase != GamePhase::Exited {
                    info!("quit requested during {:?}", self.phase);
                    self.phase = GamePhase::Exited;
                }
            }
        }
    }

    /// Reset every piece of session state and enter Playing. Shared by the
    /// first start and every restart.
    fn start_session(&mut self) {
        self.time = SimTime::default();
        self.next_entity_id = 0;
        self.wave = WaveState::new(&self.config.waves, self.time.elapsed_secs);
        self.events.clear();

        let setup = world_setup::setup_session(
            &mut self.world,
            &self.layout,
            &self.config,
            &mut self.rng,
            &mut self.next_entity_id,
        );
        self.obstacles = setup.obstacles;
        self.home = Some(setup.home);
        self.sessions_started += 1;
        self.phase = GamePhase::Playing;

        info!(
            "session {} started, home at ({:.0}, {:.0})",
            self.sessions_started, setup.home.x, setup.home.y
        );
        self.events.push(GameEvent::SessionStarted { home: setup.home });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &FrameInput) {
        let now = self.time.elapsed_secs;

        // 1. Spawn timer
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.layout.spawn_points,
            &self.config,
            now,
            &mut self.next_entity_id,
            &mut self.events,
        );
        // 2. Gun cooldown and invincibility
        systems::timers::run(&mut self.world, &self.config, now);
        // 3. Input: movement direction, aim, trigger
        systems::controls::run(
            &mut self.world,
            input,
            &self.config,
            now,
            &mut self.next_entity_id,
            &mut self.events,
        );
        // 4. Motion and animation
        systems::movement::run(&mut self.world, &self.obstacles, &self.config, dt);
        // 5. Bullet expiry and finished death animations
        systems::cleanup::run(&mut self.world, &self.config, now, &mut self.despawn_buffer);
        // 6. Bullets vs enemies, then obstacles
        systems::combat::run(
            &mut self.world,
            &self.obstacles,
            &self.masks,
            &mut self.wave,
            &self.config,
            now,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 7. Player vs enemies
        if let Some(phase) =
            systems::contact::run(&mut self.world, &self.masks, &self.config, now, &mut self.events)
        {
            self.phase = phase;
        }
        // 8. Player vs Home. Reaching Home wins even on the frame health ran out.
        if let Some(phase) = systems::pickups::run_home(&self.world, &mut self.events) {
            self.phase = phase;
        }
        // 9. Player vs health packs
        systems::pickups::run_health_packs(&mut self.world, &mut self.despawn_buffer, &mut self.events);

        if self.phase.is_terminal() {
            info!(
                "session {} ended {:?} at {:.2}s on wave {}",
                self.sessions_started, self.phase, now, self.wave.wave
            );
        }
    }
}
