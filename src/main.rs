mod display;
mod player;

use std::collections::HashMap;
use std::io::{self, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use echo_of_the_void::entities::Collidable;
use echo_of_the_void::{Room, RoomConfig, RoomError};

use display::{Cause, Frame, GameStatus};
use player::{Camera, Player, PLAYER_SPEED, SPRINT_SPEED};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS, one room tick each
const LOG_FILTER: &str = "info";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Terminals without release events rely on OS key
/// repeat refreshing the entry before it expires.
const HOLD_WINDOW: u64 = 8;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Echo of the Void: a procedurally generated climbing room", long_about = None)]
struct Args {
    /// Seed for room generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 450.0)]
    center_x: f32,

    #[arg(long, default_value_t = 2700.0)]
    center_y: f32,

    #[arg(long, default_value_t = 600.0)]
    width: f32,

    #[arg(long, default_value_t = 5000.0)]
    height: f32,

    #[arg(long, default_value_t = 50.0)]
    wall_thickness: f32,

    /// Run the simulation without a terminal UI and print a summary
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Write logs here (the terminal UI otherwise logs nowhere)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn room_config(&self) -> RoomConfig {
        RoomConfig::new(self.center_x, self.center_y, self.width, self.height)
            .with_wall_thickness(self.wall_thickness)
    }
}

fn init_logging(args: &Args) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));
    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn invalid_room(err: RoomError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

// ── Outer-loop collision checks ───────────────────────────────────────────────

/// Player-vs-enemy and player-vs-bullet.  Bullets that hit are removed
/// through the room so its own collections stay consistent.
fn check_collisions(room: &mut Room, player: &Player) -> Option<Cause> {
    let hitbox = player.hitbox();
    if room.enemy_touching(&hitbox) {
        return Some(Cause::TouchedEnemy);
    }
    let hits = room.bullets_hitting(&hitbox);
    if hits.is_empty() {
        return None;
    }
    for id in hits {
        room.remove_bullet(id);
    }
    Some(Cause::Shot)
}

// ── Headless run ──────────────────────────────────────────────────────────────

fn run_headless(config: RoomConfig, seed: u64, frames: u32) -> io::Result<()> {
    let mut room = Room::with_seed(config, seed).map_err(invalid_room)?;
    let player = Player::spawn(&room);
    let dt = FRAME.as_secs_f32();

    let mut fired = 0usize;
    let mut expired = 0usize;
    let mut hit_on = None;
    for frame in 1..=frames {
        let report = room.update(dt, player.x, player.y);
        fired += report.fired.len();
        expired += report.removed.len();
        if hit_on.is_none() {
            if let Some(cause) = check_collisions(&mut room, &player) {
                info!(frame, ?cause, "player would have died");
                hit_on = Some(frame);
            }
        }
    }

    info!(frames, fired, expired, in_flight = room.bullets().len(), "headless run finished");
    println!(
        "seed {seed}: {} platforms, {} enemies ({} shooters), {fired} bullets fired, {expired} expired, first hit: {}",
        room.platforms().len(),
        room.enemies().len(),
        room.enemies().iter().filter(|e| e.is_shooter).count(),
        hit_on.map_or_else(|| "none".to_string(), |f| format!("frame {f}")),
    );
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Returns `true` → quit program,  `false` → build a new room.
fn game_loop<W: Write>(
    out: &mut W,
    room: &mut Room,
    seed: u64,
    rx: &mpsc::Receiver<Event>,
) -> io::Result<bool> {
    let mut player = Player::spawn(room);
    let mut camera = Camera { x: player.x, y: player.y };
    let mut status = GameStatus::Playing;

    let t = room.config().wall_thickness;
    let limits = room.bounds().inset(-t);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if status != GameStatus::Playing => {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if status == GameStatus::Playing {
            let left = any_held(&key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame);
            let right = any_held(&key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame);
            let up = any_held(&key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame);
            let down = any_held(&key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame);
            // Shift only shows up as a modifier on letter keys.
            let sprint = any_held(&key_frame, &[KeyCode::Char('A'), KeyCode::Char('D'), KeyCode::Char('W'), KeyCode::Char('S')], frame);

            let speed = if sprint { SPRINT_SPEED } else { PLAYER_SPEED };
            let dx = (f32::from(u8::from(right)) - f32::from(u8::from(left))) * speed;
            let dy = (f32::from(u8::from(up)) - f32::from(u8::from(down))) * speed;
            player.step(dx, dy, room.collision_surfaces(), room.bounds());

            room.update(FRAME.as_secs_f32(), player.x, player.y);

            if let Some(cause) = check_collisions(room, &player) {
                info!(?cause, x = player.x, y = player.y, "player lost");
                player.alive = false;
                status = GameStatus::GameOver(cause);
            }
        }

        let (width, height) = terminal::size()?;
        let (view_w, view_h) = display::view_size(width, height);
        camera.follow((player.x, player.y), view_w, view_h, &limits);

        display::render(
            out,
            &Frame {
                room: &*room,
                player: &player,
                camera: &camera,
                status,
                seed,
                width,
                height,
            },
        )?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.room_config();
    config.validate().map_err(invalid_room)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    if args.headless {
        return run_headless(config, seed, args.frames);
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the game loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx, config, seed, args.seed.is_some());

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: RoomConfig,
    mut seed: u64,
    fixed_seed: bool,
) -> io::Result<()> {
    loop {
        let mut room = Room::with_seed(config, seed).map_err(invalid_room)?;
        info!(seed, "room ready");
        if game_loop(out, &mut room, seed, rx)? {
            return Ok(());
        }
        if !fixed_seed {
            seed = rand::random();
        }
    }
}
