//! Menu screens as data plus two pure functions: which button is under the
//! pointer (hover), and which action a click picks.

use glam::Vec2;
use serde::Serialize;

use homeward_core::enums::{ScreenAction, ScreenKind};
use homeward_core::geometry::Rect;

const BUTTON_SIZE: Vec2 = Vec2::new(300.0, 80.0);
const BUTTON_GAP: f32 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: ScreenAction,
}

/// Everything needed to draw one menu screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Menu {
    pub kind: ScreenKind,
    pub title: &'static str,
    pub lines: Vec<&'static str>,
    pub buttons: Vec<Button>,
}

impl Menu {
    /// Lay out `kind` for a screen of `screen` pixels. Buttons are stacked
    /// below the middle of the screen.
    pub fn new(kind: ScreenKind, screen: Vec2) -> Self {
        let (title, lines, primary) = match kind {
            ScreenKind::Start => (
                "HOMEWARD",
                vec![
                    "Move with WASD or the arrow keys.",
                    "Aim with the mouse, hold the button to shoot.",
                    "Health packs restore one heart.",
                    "Find your way home before they overrun you.",
                ],
                ("Play", ScreenAction::StartGame),
            ),
            ScreenKind::Win => (
                "You made it home!",
                Vec::new(),
                ("Play Again", ScreenAction::PlayAgain),
            ),
            ScreenKind::GameOver => (
                "Game Over",
                Vec::new(),
                ("Play Again", ScreenAction::PlayAgain),
            ),
        };

        let first = Vec2::new(screen.x / 2.0, screen.y * 0.6);
        let second = first + Vec2::new(0.0, BUTTON_SIZE.y + BUTTON_GAP);
        let buttons = vec![
            Button {
                label: primary.0,
                rect: Rect::from_center(first, BUTTON_SIZE),
                action: primary.1,
            },
            Button {
                label: "Quit",
                rect: Rect::from_center(second, BUTTON_SIZE),
                action: ScreenAction::Quit,
            },
        ];

        Self {
            kind,
            title,
            lines,
            buttons,
        }
    }
}

/// The button under the pointer, if any. Drives hover highlighting.
pub fn button_at(buttons: &[Button], pointer: Vec2) -> Option<&Button> {
    buttons.iter().find(|b| b.rect.contains_point(pointer))
}

/// Action picked by this frame's input. `press_edge` must be true only on
/// the frame the button went down; the caller derives it from the previous
/// frame's button state, so a held button picks nothing. A press over empty
/// space picks nothing either.
pub fn click(buttons: &[Button], pointer: Vec2, press_edge: bool) -> Option<ScreenAction> {
    if !press_edge {
        return None;
    }
    button_at(buttons, pointer).map(|b| b.action)
}
