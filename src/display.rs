//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! room and outer-loop state.  Nothing here mutates the simulation; it only
//! maps world-space boxes onto terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use echo_of_the_void::entities::{Collidable, DrawItem, DrawKind, Rect};
use echo_of_the_void::Room;

use crate::player::{Camera, Player};

/// World units covered by one terminal column / row.
pub const CELL_W: f32 = 10.0;
pub const CELL_H: f32 = 20.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkBlue;
const C_FLOOR: Color = Color::DarkYellow;
const C_CEILING: Color = Color::DarkCyan;
const C_PLATFORM: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_SHOOTER: Color = Color::Yellow;
const C_BULLET: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_HUD: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(Cause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    TouchedEnemy,
    Shot,
}

/// Everything one frame needs, borrowed from the game loop.
pub struct Frame<'a> {
    pub room: &'a Room,
    pub player: &'a Player,
    pub camera: &'a Camera,
    pub status: GameStatus,
    pub seed: u64,
    pub width: u16,
    pub height: u16,
}

/// World-space size of the play area for a terminal of `width × height`.
/// Row 0 is the HUD and the last row is the controls hint.
pub fn view_size(width: u16, height: u16) -> (f32, f32) {
    (
        f32::from(width) * CELL_W,
        f32::from(height.saturating_sub(2)) * CELL_H,
    )
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for item in frame.room.draw() {
        draw_item(out, frame, &item)?;
    }
    draw_box(out, frame, &frame.player.hitbox(), "@", C_PLAYER)?;

    draw_hud(out, frame)?;
    draw_controls_hint(out, frame)?;

    if let GameStatus::GameOver(cause) = frame.status {
        draw_game_over(out, frame, cause)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, frame.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── World ─────────────────────────────────────────────────────────────────────

fn draw_item<W: Write>(out: &mut W, frame: &Frame, item: &DrawItem) -> std::io::Result<()> {
    let (glyph, color) = match item.kind {
        DrawKind::Wall => ("█", C_WALL),
        DrawKind::Floor => ("▀", C_FLOOR),
        DrawKind::Ceiling => ("▄", C_CEILING),
        DrawKind::Platform => ("=", C_PLATFORM),
        DrawKind::Enemy => ("X", C_ENEMY),
        DrawKind::Shooter => ("S", C_SHOOTER),
        DrawKind::Bullet => ("•", C_BULLET),
    };
    draw_box(out, frame, &item.rect, glyph, color)
}

/// Fills every cell `rect` touches, clipped to the play area.  Boxes
/// smaller than a cell still occupy one.
fn draw_box<W: Write>(
    out: &mut W,
    frame: &Frame,
    rect: &Rect,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let (view_w, view_h) = view_size(frame.width, frame.height);
    let cam_left = frame.camera.x - view_w / 2.0;
    let cam_top = frame.camera.y + view_h / 2.0;

    let c0 = ((rect.left() - cam_left) / CELL_W).floor() as i32;
    let c1 = (((rect.right() - cam_left) / CELL_W).ceil() as i32 - 1).max(c0);
    let r0 = ((cam_top - rect.top()) / CELL_H).floor() as i32;
    let r1 = (((cam_top - rect.bottom()) / CELL_H).ceil() as i32 - 1).max(r0);

    let max_col = i32::from(frame.width) - 1;
    let max_row = i32::from(frame.height.saturating_sub(2)) - 1;
    let (c0, c1) = (c0.max(0), c1.min(max_col));
    let (r0, r1) = (r0.max(0), r1.min(max_row));
    if c0 > c1 || r0 > r1 {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(color))?;
    let run = glyph.repeat((c1 - c0 + 1) as usize);
    for row in r0..=r1 {
        // +1 skips the HUD row
        out.queue(cursor::MoveTo(c0 as u16, (row + 1) as u16))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    let room = frame.room;
    let bounds = room.bounds();
    let climbed = (frame.player.y - bounds.bottom).max(0.0);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Height:{:>5.0}/{:<5.0} Enemies:{:>3} Bullets:{:>3}",
        climbed,
        bounds.height(),
        room.enemies().len(),
        room.bullets().len()
    )))?;

    let seed_str = format!("seed {}", frame.seed);
    let sx = frame
        .width
        .saturating_sub(seed_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(&seed_str))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, frame.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SHIFT : Sprint   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, frame: &Frame, cause: Cause) -> std::io::Result<()> {
    let reason = match cause {
        Cause::TouchedEnemy => "You ran into an enemy",
        Cause::Shot => "You were shot",
    };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     YOU  LOST      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (reason, Color::Yellow),
        ("R - New Room  Q - Quit", Color::White),
    ];

    let cx = frame.width / 2;
    let start_row = (frame.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
