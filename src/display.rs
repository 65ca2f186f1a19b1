/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable snapshot of the
/// game.  No game logic is performed; this module only translates state
/// into terminal commands.  The 700×700 reference square is scaled onto
/// the terminal by a `Viewport`, with cells twice as tall as they are wide.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use tracing::trace;

use sharp_shooter::compute::ring_radius;
use sharp_shooter::controller::Presenter;
use sharp_shooter::entities::{
    Position, ShotRecord, Snapshot, FIELD_SIZE, RING_COUNT, TARGET_CENTER,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::DarkGrey;
const C_RING_DARK: Color = Color::Black;
const C_RING_LIGHT: Color = Color::White;
const C_NUMBER: Color = Color::Rgb { r: 94, g: 150, b: 210 };
const C_BULLET_HOLE: Color = Color::Green;
const C_SIGHT: Color = Color::Red;
const C_STATUS: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Target & sight geometry (reference units) ────────────────────────────────

/// How far ring numbers sit inside their ring's border.
const NUMBER_INSET: i32 = 15;
const SIGHT_RADIUS: f32 = 30.0;
const SIGHT_ARM: f32 = 30.0;
const SIGHT_GAP: f32 = 8.0;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps reference coordinates onto terminal cells.  The last terminal row is
/// kept free for the status line.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    origin_col: u16,
    origin_row: u16,
    cols: u16,
    rows: u16,
    cell_w: f32,
    cell_h: f32,
    term_width: u16,
    term_height: u16,
}

impl Viewport {
    pub fn fit(width: u16, height: u16) -> Self {
        let field = FIELD_SIZE as f32;
        let avail_cols = width.max(1);
        let avail_rows = height.saturating_sub(1).max(1);

        let cell_w = (field / avail_cols as f32).max(field / (avail_rows as f32 * 2.0));
        let cell_h = cell_w * 2.0;
        let cols = ((field / cell_w).floor() as u16).clamp(1, avail_cols);
        let rows = ((field / cell_h).floor() as u16).clamp(1, avail_rows);

        Self {
            origin_col: (avail_cols - cols) / 2,
            origin_row: (avail_rows - rows) / 2,
            cols,
            rows,
            cell_w,
            cell_h,
            term_width: width,
            term_height: height,
        }
    }

    /// Terminal cell holding a reference point, if it is on screen.
    pub fn to_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 {
            return None;
        }
        let col = (x as f32 / self.cell_w) as u16;
        let row = (y as f32 / self.cell_h) as u16;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((self.origin_col + col, self.origin_row + row))
    }

    /// Reference coordinates of the centre of field cell `(col, row)`.
    fn cell_center(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.cell_w,
            (row as f32 + 0.5) * self.cell_h,
        )
    }

    fn status_row(&self) -> u16 {
        self.term_height.saturating_sub(1)
    }
}

// ── Presenter ─────────────────────────────────────────────────────────────────

/// Terminal-backed presenter: keeps the status line and redraws the whole
/// screen on every checkpoint.
pub struct TerminalView<W: Write> {
    out: W,
    viewport: Viewport,
    status: String,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            viewport: Viewport::fit(width, height),
            status: "Ready to shoot".to_string(),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::fit(width, height);
    }

    pub fn redraw(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        render(&mut self.out, &self.viewport, snapshot, &self.status)
    }
}

impl<W: Write> Presenter for TerminalView<W> {
    fn status_changed(&mut self, text: &str) {
        trace!(text, "status line updated");
        self.status = text.to_string();
    }

    fn checkpoint(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        self.redraw(snapshot)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: &Viewport,
    snapshot: &Snapshot,
    status: &str,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_target(out, view)?;
    draw_ring_numbers(out, view)?;
    for hole in &snapshot.bullet_holes {
        draw_bullet_hole(out, view, hole)?;
    }
    draw_sight(out, view, snapshot.sight)?;
    draw_status_line(out, view, status)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.status_row()))?;
    out.flush()?;
    Ok(())
}

// ── Target ────────────────────────────────────────────────────────────────────

/// Index of the innermost ring containing a reference point.
fn ring_at(x: f32, y: f32) -> Option<i32> {
    let dx = x - TARGET_CENTER.x as f32;
    let dy = y - TARGET_CENTER.y as f32;
    let distance = dx.hypot(dy);
    (0..RING_COUNT).find(|&i| distance <= ring_radius(i) as f32)
}

fn ring_color(index: i32) -> Color {
    if index > 3 || index == 0 {
        C_RING_DARK
    } else {
        C_RING_LIGHT
    }
}

/// Colour behind a reference point: its ring, or the field background.
fn backdrop_at(x: f32, y: f32) -> Color {
    ring_at(x, y).map(ring_color).unwrap_or(C_BACKGROUND)
}

fn draw_target<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(view.origin_col, view.origin_row + row))?;

        // Emit runs of equal colour instead of one command per cell
        let mut run_color: Option<Color> = None;
        let mut run_len = 0usize;
        for col in 0..view.cols {
            let (x, y) = view.cell_center(col, row);
            let color = backdrop_at(x, y);
            if run_color != Some(color) {
                if let Some(prev) = run_color {
                    out.queue(style::SetBackgroundColor(prev))?;
                    out.queue(Print(" ".repeat(run_len)))?;
                }
                run_color = Some(color);
                run_len = 0;
            }
            run_len += 1;
        }
        if let Some(prev) = run_color {
            out.queue(style::SetBackgroundColor(prev))?;
            out.queue(Print(" ".repeat(run_len)))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Each ring but the bullseye carries its score at the four compass points.
fn draw_ring_numbers<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let (cx, cy) = (TARGET_CENTER.x, TARGET_CENTER.y);
    out.queue(style::SetForegroundColor(C_NUMBER))?;

    for i in (1..RING_COUNT).rev() {
        let radius = ring_radius(i);
        let label = (RING_COUNT - i).to_string();
        let anchors = [
            (cx - radius + NUMBER_INSET, cy),
            (cx + radius - NUMBER_INSET, cy),
            (cx, cy - radius + NUMBER_INSET),
            (cx, cy + radius - NUMBER_INSET),
        ];
        for (x, y) in anchors {
            let Some((col, row)) = view.to_cell(x, y) else {
                continue;
            };
            let col = col.saturating_sub(label.len() as u16 / 2);
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetBackgroundColor(ring_color(i)))?;
            out.queue(Print(&label))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Shots & sight ─────────────────────────────────────────────────────────────

fn draw_bullet_hole<W: Write>(
    out: &mut W,
    view: &Viewport,
    hole: &ShotRecord,
) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(hole.x, hole.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(backdrop_at(hole.x as f32, hole.y as f32)))?;
    out.queue(style::SetForegroundColor(C_BULLET_HOLE))?;
    out.queue(Print("●"))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Glyph for one cell of the reticle, given the offset of the cell centre
/// from the aim point.
fn sight_glyph(dx: f32, dy: f32, view: &Viewport) -> Option<&'static str> {
    let half_w = view.cell_w / 2.0;
    let half_h = view.cell_h / 2.0;

    if dx.abs() < half_w && dy.abs() < half_h {
        return Some("+");
    }
    if dy.abs() < half_h && (SIGHT_GAP..=SIGHT_ARM).contains(&dx.abs()) {
        return Some("─");
    }
    if dx.abs() < half_w && (SIGHT_GAP..=SIGHT_ARM).contains(&dy.abs()) {
        return Some("│");
    }
    if (dx.hypot(dy) - SIGHT_RADIUS).abs() <= half_w.max(half_h / 2.0) {
        return Some("•");
    }
    None
}

fn draw_sight<W: Write>(out: &mut W, view: &Viewport, sight: Position) -> std::io::Result<()> {
    let Some((center_col, center_row)) = view.to_cell(sight.x, sight.y) else {
        return Ok(());
    };
    let field_col = i32::from(center_col - view.origin_col);
    let field_row = i32::from(center_row - view.origin_row);
    let reach_cols = (SIGHT_RADIUS / view.cell_w).ceil() as i32 + 1;
    let reach_rows = (SIGHT_RADIUS / view.cell_h).ceil() as i32 + 1;

    out.queue(style::SetForegroundColor(C_SIGHT))?;
    for row in (field_row - reach_rows)..=(field_row + reach_rows) {
        for col in (field_col - reach_cols)..=(field_col + reach_cols) {
            if row < 0 || col < 0 || row >= i32::from(view.rows) || col >= i32::from(view.cols) {
                continue;
            }
            let (x, y) = view.cell_center(col as u16, row as u16);
            let Some(glyph) = sight_glyph(x - sight.x as f32, y - sight.y as f32, view) else {
                continue;
            };
            out.queue(cursor::MoveTo(
                view.origin_col + col as u16,
                view.origin_row + row as u16,
            ))?;
            out.queue(style::SetBackgroundColor(backdrop_at(x, y)))?;
            out.queue(Print(glyph))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Status line (last row) ────────────────────────────────────────────────────

fn draw_status_line<W: Write>(out: &mut W, view: &Viewport, status: &str) -> std::io::Result<()> {
    let row = view.status_row();
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(status))?;

    let hint = "←↑↓→ : Aim   SPACE : Start/Shoot   Q : Quit";
    let status_len = status.chars().count() as u16;
    let hint_len = hint.chars().count() as u16;
    if view.term_width > status_len + hint_len + 2 {
        out.queue(cursor::MoveTo(view.term_width - hint_len, row))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(hint))?;
    }
    Ok(())
}
