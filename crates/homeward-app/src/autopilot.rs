//! Scripted player for headless runs.
//!
//! The autopilot walks straight toward Home and shoots the nearest live
//! enemy in range. It clicks through menus the same way a player would,
//! by pointing at a button and pressing.

use glam::Vec2;
use log::info;

use homeward_core::commands::FrameInput;
use homeward_core::enums::{ScreenAction, ScreenKind};
use homeward_core::state::GameStateSnapshot;

use crate::adapter::{InputSource, MenuScreen, PolledInput};
use crate::menu::{button_at, click, Menu};
use crate::screens::{render_menu, TerminalArt};

/// Distance inside which the autopilot stops steering on an axis.
const DEADZONE: f32 = 8.0;

pub struct AutopilotInput {
    screen: Vec2,
    /// Enemies farther than this are ignored.
    engage_range: f32,
}

impl AutopilotInput {
    pub fn new(screen: Vec2, engage_range: f32) -> Self {
        Self {
            screen,
            engage_range,
        }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, last: &GameStateSnapshot) -> PolledInput {
        let center = self.screen / 2.0;
        let mut frame = FrameInput {
            pointer: center,
            ..Default::default()
        };
        let Some(player) = &last.player else {
            return PolledInput { frame, quit: false };
        };

        if let Some(home) = &last.home {
            let to_home = home.rect.center() - player.position;
            frame.right = to_home.x > DEADZONE;
            frame.left = to_home.x < -DEADZONE;
            frame.down = to_home.y > DEADZONE;
            frame.up = to_home.y < -DEADZONE;
            frame.pointer = center + to_home.normalize_or_zero() * 100.0;
        }

        let target = last
            .enemies
            .iter()
            .filter(|e| !e.dying)
            .map(|e| (e.position - player.position, e))
            .filter(|(offset, _)| offset.length() <= self.engage_range)
            .min_by(|(a, _), (b, _)| a.length().total_cmp(&b.length()));
        if let Some((offset, _)) = target {
            // The camera keeps the player at the screen center.
            frame.pointer = center + offset;
            frame.fire = true;
        }

        PolledInput { frame, quit: false }
    }
}

/// Menu driver that always picks Play / Play Again.
pub struct AutoMenu {
    screen: Vec2,
    art: TerminalArt,
}

impl AutoMenu {
    pub fn new(screen: Vec2, art: TerminalArt) -> Self {
        Self { screen, art }
    }
}

impl MenuScreen for AutoMenu {
    fn choose(&mut self, screen: ScreenKind, _last: &GameStateSnapshot) -> ScreenAction {
        let menu = Menu::new(screen, self.screen);
        let wanted = match screen {
            ScreenKind::Start => ScreenAction::StartGame,
            ScreenKind::Win | ScreenKind::GameOver => ScreenAction::PlayAgain,
        };
        let pointer = menu
            .buttons
            .iter()
            .find(|b| b.action == wanted)
            .map(|b| b.rect.center())
            .unwrap_or_default();

        info!("\n{}", render_menu(&menu, &self.art, button_at(&menu.buttons, pointer)));
        click(&menu.buttons, pointer, true).unwrap_or(ScreenAction::Quit)
    }
}
