//! Views: map application state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the home screen needs to draw.
#[derive(Debug, Clone, Copy)]
pub struct HomeScreen<'a> {
    /// Name as typed so far.
    pub name_input: &'a str,
    pub selected: Difficulty,
    /// Capitalized display name of a resumed player.
    pub greeting: Option<&'a str>,
    /// Stored best for the selected tier, when a player is resumed.
    pub best_score: Option<u32>,
}

/// Everything the game screen needs to draw.
#[derive(Debug, Clone, Copy)]
pub struct GameScreen<'a> {
    pub player: &'a str,
    pub difficulty: Option<Difficulty>,
    pub score: u32,
    pub best: u32,
    pub running: bool,
    pub active_cell: Option<u32>,
    /// Cell flashing from a recent hit.
    pub hit_cell: Option<u32>,
}

const TITLE: &str = "T U I   M O L E";

fn base_style() -> CellStyle {
    CellStyle::default()
}

fn dim_style() -> CellStyle {
    CellStyle {
        dim: true,
        ..CellStyle::default()
    }
}

fn title_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(250, 200, 80),
        bold: true,
        ..CellStyle::default()
    }
}

fn centered_x(viewport: Viewport, text: &str) -> u16 {
    let len = text.chars().count() as u16;
    viewport.width.saturating_sub(len) / 2
}

/// Renders the name-entry / difficulty-select screen.
#[derive(Debug, Default)]
pub struct HomeView;

impl HomeView {
    pub fn render(&self, home: &HomeScreen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(base_style().into_cell(' '));

        let mid_y = viewport.height / 2;
        let top = mid_y.saturating_sub(5);

        fb.put_str(
            centered_x(viewport, TITLE),
            top,
            TITLE,
            title_style(),
        );

        if let Some(name) = home.greeting {
            let line = format!("Welcome back, {}!", name);
            fb.put_str(
                centered_x(viewport, &line),
                top + 2,
                &line,
                base_style(),
            );
        }

        let name_line = format!("Player name: [{:<16}]", home.name_input);
        fb.put_str(
            centered_x(viewport, &name_line),
            top + 4,
            &name_line,
            base_style(),
        );

        let diff_line = format!("Difficulty:  < {} >", home.selected.as_str());
        fb.put_str(
            centered_x(viewport, &diff_line),
            top + 6,
            &diff_line,
            base_style(),
        );

        if let Some(best) = home.best_score {
            let best_line = format!("Best on {}: {}", home.selected.as_str(), best);
            fb.put_str(
                centered_x(viewport, &best_line),
                top + 8,
                &best_line,
                base_style(),
            );
        }

        let hint = "enter play \u{b7} tab difficulty \u{b7} esc quit";
        fb.put_str(
            centered_x(viewport, hint),
            top + 10,
            hint,
            dim_style(),
        );

        fb
    }
}

/// Renders the whack-a-mole grid and status panel.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 blocks read roughly square in typical terminal glyphs.
        Self {
            cell_w: 8,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    pub fn render(&self, game: &GameScreen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(base_style().into_cell(' '));

        // Grid geometry: cells plus one-column gaps, inside a border.
        let grid_w = (GRID_COLS as u16) * self.cell_w + (GRID_COLS as u16 - 1);
        let grid_h = (GRID_ROWS as u16) * self.cell_h + (GRID_ROWS as u16 - 1);
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport
            .height
            .saturating_sub(frame_h + 4)
            / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_ROWS as u16 {
            for col in 0..GRID_COLS as u16 {
                let index = (row * GRID_COLS as u16 + col) as u32;
                let x = start_x + 1 + col * (self.cell_w + 1);
                let y = start_y + 1 + row * (self.cell_h + 1);
                self.draw_cell(&mut fb, x, y, index, game);
            }
        }

        // Status panel under the grid.
        let status_y = start_y + frame_h + 1;
        let difficulty = game
            .difficulty
            .as_ref()
            .map(Difficulty::as_str)
            .unwrap_or("-");
        let state = if game.running { "RUNNING" } else { "IDLE" };
        let status = format!(
            "{}  \u{b7}  {}  \u{b7}  score {}  \u{b7}  best {}  \u{b7}  {}",
            game.player, difficulty, game.score, game.best, state
        );
        fb.put_str(
            centered_x(viewport, &status),
            status_y,
            &status,
            base_style(),
        );

        let hint = if game.running {
            "1-9 whack \u{b7} space end round \u{b7} q quit"
        } else {
            "space start \u{b7} tab difficulty \u{b7} esc back \u{b7} q quit"
        };
        fb.put_str(
            centered_x(viewport, hint),
            status_y + 2,
            hint,
            dim_style(),
        );

        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, index: u32, game: &GameScreen<'_>) {
        let is_active = game.active_cell == Some(index);
        let is_hit = game.hit_cell == Some(index);

        let style = if is_hit {
            CellStyle {
                fg: Rgb::new(10, 40, 10),
                bg: Rgb::new(120, 220, 120),
                bold: true,
                dim: false,
            }
        } else if is_active {
            CellStyle {
                fg: Rgb::new(60, 30, 0),
                bg: Rgb::new(240, 180, 60),
                bold: true,
                dim: false,
            }
        } else {
            CellStyle {
                fg: Rgb::new(120, 120, 130),
                bg: Rgb::new(30, 30, 40),
                bold: false,
                dim: false,
            }
        };

        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        // Digit label in the corner, glyph in the middle.
        let label = char::from_digit(index + 1, 10).unwrap_or('?');
        fb.put_char(x, y, label, style);

        let glyph = if is_hit {
            "*"
        } else if is_active {
            "(o o)"
        } else {
            "."
        };
        let gx = x + (self.cell_w.saturating_sub(glyph.len() as u16)) / 2;
        let gy = y + self.cell_h / 2;
        fb.put_str(gx, gy, glyph, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    for dx in 0..w {
        fb.put_char(x + dx, y, '\u{2500}', style);
        fb.put_char(x + dx, y + h - 1, '\u{2500}', style);
    }
    for dy in 0..h {
        fb.put_char(x, y + dy, '\u{2502}', style);
        fb.put_char(x + w - 1, y + dy, '\u{2502}', style);
    }
    fb.put_char(x, y, '\u{250c}', style);
    fb.put_char(x + w - 1, y, '\u{2510}', style);
    fb.put_char(x, y + h - 1, '\u{2514}', style);
    fb.put_char(x + w - 1, y + h - 1, '\u{2518}', style);
}
