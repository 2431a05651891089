//! Text rendering for menu screens, with optional artwork on the win and
//! game-over screens.

use std::fs;
use std::path::Path;

use log::warn;

use homeward_core::enums::ScreenKind;

use crate::menu::{Button, Menu};

/// Artwork for the terminal screens. A missing piece falls back to the
/// screen's title text.
#[derive(Debug, Clone, Default)]
pub struct TerminalArt {
    pub win: Option<String>,
    pub game_over: Option<String>,
}

fn load_one(label: &str, path: Option<&Path>) -> Option<String> {
    let path = path?;
    match fs::read_to_string(path) {
        Ok(art) => Some(art),
        Err(err) => {
            warn!(
                "{label} artwork {} unavailable ({err}), using text",
                path.display()
            );
            None
        }
    }
}

impl TerminalArt {
    /// Load artwork files. Failures are logged and leave that screen on
    /// its text fallback.
    pub fn load(win: Option<&Path>, game_over: Option<&Path>) -> Self {
        Self {
            win: load_one("win", win),
            game_over: load_one("game over", game_over),
        }
    }

    fn for_screen(&self, kind: ScreenKind) -> Option<&str> {
        match kind {
            ScreenKind::Start => None,
            ScreenKind::Win => self.win.as_deref(),
            ScreenKind::GameOver => self.game_over.as_deref(),
        }
    }
}

/// Render a menu as text. The hovered button is marked.
pub fn render_menu(menu: &Menu, art: &TerminalArt, hovered: Option<&Button>) -> String {
    let mut out = String::new();
    match art.for_screen(menu.kind) {
        Some(artwork) => out.push_str(artwork.trim_end()),
        None => out.push_str(menu.title),
    }
    out.push('\n');
    for line in &menu.lines {
        out.push_str(line);
        out.push('\n');
    }
    for button in &menu.buttons {
        let marker = if hovered == Some(button) { '>' } else { ' ' };
        out.push_str(&format!("{marker} [{}]\n", button.label));
    }
    out
}
