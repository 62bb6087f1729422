//! GameView: maps a [`SessionSnapshot`] into a terminal frame.
//!
//! Pure (no I/O), so it can be unit-tested against fixed snapshots.

use blockfall_core::snapshot::SessionSnapshot;
use blockfall_types::{GameStatus, PieceKind, GRID_HEIGHT, GRID_WIDTH};

use crate::frame::{Frame, Rgb, Style};

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

/// Renders the playfield, ghost, side panel and overlays.
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing frame, resizing it to the viewport.
    ///
    /// `best_score` is whatever the score store reported; `None` hides the
    /// BEST line entirely.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        best_score: Option<u32>,
        viewport: Viewport,
        frame: &mut Frame,
    ) {
        frame.resize(viewport.width, viewport.height);
        frame.clear();

        let field_w = (GRID_WIDTH as u16) * self.cell_w;
        let field_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = Style::plain(Rgb::new(90, 90, 100), Rgb::new(28, 28, 38));
        let border = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        frame.fill(origin_x + 1, origin_y + 1, field_w, field_h, ' ', well);
        self.draw_border(frame, origin_x, origin_y, frame_w, frame_h, border);

        // Locked cells.
        for row in 0..GRID_HEIGHT as u16 {
            for col in 0..GRID_WIDTH as u16 {
                let code = snap.grid[row as usize][col as usize];
                match PieceKind::from_cell_code(code) {
                    Some(kind) => self.draw_cell(frame, origin_x, origin_y, col, row, kind),
                    None => self.draw_well_dot(frame, origin_x, origin_y, col, row, well),
                }
            }
        }

        // Ghost projection below the active piece.
        if let Some(active) = snap.active {
            if snap.ghost_offset > 0 {
                let ghost_style = Style {
                    dim: true,
                    ..Style::plain(Rgb::new(140, 140, 140), Rgb::new(28, 28, 38))
                };
                for (row, col) in shape_cells(&active, snap.ghost_offset) {
                    if on_grid(row, col) {
                        self.fill_cell(frame, origin_x, origin_y, col as u16, row as u16, '░', ghost_style);
                    }
                }
            }

            for (row, col) in shape_cells(&active, 0) {
                if on_grid(row, col) {
                    self.draw_cell(frame, origin_x, origin_y, col as u16, row as u16, active.kind);
                }
            }
        }

        self.draw_panel(frame, snap, best_score, viewport, origin_x, origin_y, frame_w);

        match snap.status {
            GameStatus::Paused => {
                self.draw_overlay(frame, origin_x, origin_y, frame_w, frame_h, "PAUSED")
            }
            GameStatus::GameOver => {
                self.draw_overlay(frame, origin_x, origin_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a fresh frame.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        best_score: Option<u32>,
        viewport: Viewport,
    ) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, best_score, viewport, &mut frame);
        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        frame.put(x, y, '┌', style);
        frame.put(x + w - 1, y, '┐', style);
        frame.put(x, y + h - 1, '└', style);
        frame.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', style);
            frame.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', style);
            frame.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_well_dot(&self, frame: &mut Frame, ox: u16, oy: u16, col: u16, row: u16, well: Style) {
        let dot = Style { dim: true, ..well };
        self.fill_cell(frame, ox, oy, col, row, '·', dot);
    }

    fn draw_cell(&self, frame: &mut Frame, ox: u16, oy: u16, col: u16, row: u16, kind: PieceKind) {
        let fg = kind_color(kind);
        let style = Style {
            bold: true,
            ..Style::plain(fg, Rgb::new(28, 28, 38))
        };
        self.fill_cell(frame, ox, oy, col, row, '█', style);
    }

    fn fill_cell(
        &self,
        frame: &mut Frame,
        ox: u16,
        oy: u16,
        col: u16,
        row: u16,
        ch: char,
        style: Style,
    ) {
        let px = ox + 1 + col * self.cell_w;
        let py = oy + 1 + row * self.cell_h;
        frame.fill(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(
        &self,
        frame: &mut Frame,
        snap: &SessionSnapshot,
        best_score: Option<u32>,
        viewport: Viewport,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
    ) {
        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = origin_y;
        let mut line = |frame: &mut Frame, name: &str, text: &str, y: &mut u16| {
            frame.text(panel_x, *y, name, label);
            frame.text(panel_x, *y + 1, text, value);
            *y = y.saturating_add(3);
        };

        line(frame, "SCORE", &snap.score.to_string(), &mut y);
        line(frame, "LEVEL", &snap.level.to_string(), &mut y);
        line(frame, "LINES", &snap.lines.to_string(), &mut y);
        line(frame, "TETRIS", &snap.tetris_count.to_string(), &mut y);
        if let Some(best) = best_score {
            line(frame, "BEST", &best.to_string(), &mut y);
        }
        line(
            frame,
            "HOLD",
            snap.held.map(PieceKind::letter).unwrap_or("-"),
            &mut y,
        );
        line(frame, "NEXT", snap.next.letter(), &mut y);
    }

    fn draw_overlay(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let mid_y = y.saturating_add(h / 2);
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        let style = Style {
            bold: true,
            ..Style::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        frame.text(tx, mid_y, text, style);
    }
}

/// Grid `(row, col)` pairs of the active silhouette shifted down by `extra` rows.
fn shape_cells(
    active: &blockfall_core::snapshot::ActiveView,
    extra: i8,
) -> impl Iterator<Item = (i8, i8)> + '_ {
    let row = active.row + extra;
    let col = active.col;
    active
        .shape
        .cells()
        .map(move |(r, c)| (row + r as i8, col + c as i8))
}

fn on_grid(row: i8, col: i8) -> bool {
    (0..GRID_HEIGHT as i8).contains(&row) && (0..GRID_WIDTH as i8).contains(&col)
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::Session;

    #[test]
    fn renders_a_playing_snapshot() {
        let session = Session::with_seed(42);
        let snap = session.snapshot();
        let view = GameView::default();

        let frame = view.render(&snap, Some(1234), Viewport::new(80, 24));
        assert_eq!((frame.width(), frame.height()), (80, 24));

        // The border is present somewhere around the field.
        let found_border = (0..frame.height())
            .any(|y| (0..frame.width()).any(|x| frame.get(x, y).map(|g| g.ch) == Some('┌')));
        assert!(found_border);
    }

    #[test]
    fn tiny_viewports_do_not_panic() {
        let session = Session::with_seed(7);
        let snap = session.snapshot();
        let view = GameView::default();

        for (w, h) in [(0, 0), (1, 1), (10, 5), (20, 10)] {
            let _ = view.render(&snap, None, Viewport::new(w, h));
        }
    }

    #[test]
    fn game_over_overlay_is_painted() {
        let mut snap = Session::with_seed(3).snapshot();
        snap.status = GameStatus::GameOver;
        snap.active = None;

        let frame = GameView::default().render(&snap, None, Viewport::new(60, 26));
        let mut text = String::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                text.push(frame.get(x, y).unwrap().ch);
            }
        }
        assert!(text.contains("GAME OVER"));
    }
}
