//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top-left anchored:
//!
//! ```text
//! row 0..rows   grid, each cell `cell_width` columns wide
//! row rows      blank
//! row rows + 1  Score: N    Lives: N
//! ```

use unicode_width::UnicodeWidthStr;

use crate::core::Session;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::glyphs::Glyphs;
use crate::types::{Position, Tile};

const WALL: CellStyle = CellStyle::fg(Rgb::new(70, 110, 240));
const DOT: CellStyle = CellStyle::fg(Rgb::new(250, 220, 170));
const GHOST: CellStyle = CellStyle::fg(Rgb::new(230, 70, 70)).bold();
const PLAYER: CellStyle = CellStyle::fg(Rgb::new(250, 230, 60)).bold();
const DEATH: CellStyle = CellStyle::fg(Rgb::new(255, 60, 60)).bold();
const HUD: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));

/// Rows between the bottom of the grid and the HUD line.
const HUD_GAP: u16 = 1;

/// A lightweight terminal renderer for the maze.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    glyphs: Glyphs,
}

impl GameView {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Terminal columns per grid cell.
    pub fn cell_width(&self) -> u16 {
        self.glyphs.cell_width()
    }

    /// Screen column and row of a grid cell.
    pub fn screen_pos(&self, pos: Position) -> (u16, u16) {
        (pos.col as u16 * self.cell_width(), pos.row as u16)
    }

    /// The score/lives line.
    pub fn hud_text(&self, session: &Session) -> String {
        let lives = if self.glyphs.use_emoji {
            self.glyphs.player.repeat(session.lives() as usize)
        } else {
            session.lives().to_string()
        };
        format!("Score: {}    Lives: {}", session.score(), lives)
    }

    /// Framebuffer size needed for `session`.
    pub fn frame_size(&self, session: &Session) -> (u16, u16) {
        let grid = session.grid();
        let grid_w = grid.cols() as u16 * self.cell_width();
        let hud_w = self.hud_text(session).width() as u16;
        (grid_w.max(hud_w), grid.rows() as u16 + HUD_GAP + 1)
    }

    /// Render the session into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, session: &Session, fb: &mut FrameBuffer) {
        let (w, h) = self.frame_size(session);
        fb.resize(w, h);
        fb.clear(Default::default());

        let grid = session.grid();
        for (row, tiles) in grid.cells().chunks(grid.cols()).enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let (glyph, style) = match tile {
                    Tile::Wall => (&self.glyphs.wall, WALL),
                    Tile::Dot => (&self.glyphs.dot, DOT),
                    Tile::Empty => (&self.glyphs.space, HUD),
                };
                self.draw_cell(fb, Position::new(row, col), glyph, style);
            }
        }

        // Player drawn last so a caught player is still visible under a ghost.
        for ghost in session.ghosts() {
            self.draw_cell(fb, ghost.pos, &self.glyphs.ghost, GHOST);
        }
        self.draw_cell(fb, session.player().pos, &self.glyphs.player, PLAYER);

        let hud_y = grid.rows() as u16 + HUD_GAP;
        fb.put_str(0, hud_y, &self.hud_text(session), HUD);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(session, &mut fb);
        fb
    }

    /// Overlay the death glyph on one cell.
    pub fn render_death_into(&self, at: Position, fb: &mut FrameBuffer) {
        self.draw_cell(fb, at, &self.glyphs.death, DEATH);
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, pos: Position, glyph: &str, style: CellStyle) {
        let (x, y) = self.screen_pos(pos);
        let cw = self.cell_width();
        let used = fb.put_str_clipped(x, y, glyph, cw, style);
        for dx in used..cw {
            fb.put_str(x + dx, y, " ", style);
        }
    }
}
