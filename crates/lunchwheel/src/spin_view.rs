#![forbid(unsafe_code)]

//! Interactive spin view: a raw-mode terminal loop driving the wheel at
//! roughly 60 frames per second.
//!
//! The view renders a one-line "strip" of the wheel — the sector currently
//! under the pointer, flanked by its neighbors — using the angle→sector
//! inverse, while the winner itself is carried through the session. Keys
//! mirror the original hotkeys: `space` spins (again), `r` re-centers the
//! pointer while idle, `q`/`esc` leaves (cancelling any spin in flight).

use std::io::{self, Write};
use std::time::Duration;

use clap::Args;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;
use web_time::Instant;

use lunchwheel_core::{Item, RecencyRule, sector_at};
use lunchwheel_runtime::{SpinError, SystemClock, Tick, Wheel, WheelRenderer};
use lunchwheel_store::FileStore;

use crate::error::Result;

/// Frame budget: poll for input this long between ticks.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[derive(Debug, Args)]
pub struct SpinArgs {
    /// Exclude items chosen within this many days.
    #[arg(long)]
    pub exclude_days: Option<u32>,

    /// Seed the spin RNG (reproducible spins).
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run_spin(store: &FileStore, args: SpinArgs) -> Result<()> {
    let items = store.load_items();
    let rule = match args.exclude_days {
        None | Some(0) => RecencyRule::None,
        Some(days) => RecencyRule::ExcludeWithinDays(days),
    };
    let clock = SystemClock;
    let mut wheel = Wheel::new(items, rule);

    if wheel.eligible_now(&clock).is_empty() {
        println!("nothing to spin over — add items or relax --exclude-days");
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let _guard = RawModeGuard::enter()?;
    let mut out = io::stdout();
    write!(out, "space: spin   r: reset pointer   q: quit\r\n")?;
    out.flush()?;

    let mut renderer = StripRenderer::new();
    let mut store = store.clone();
    let epoch = Instant::now();

    // First spin starts immediately; later ones wait for the space bar.
    match wheel.request_spin(&mut rng, &clock, epoch.elapsed()) {
        Ok(_) => {}
        Err(SpinError::EmptyCandidates) => {
            // Checked above; the list cannot have changed since.
            return Ok(());
        }
    }

    loop {
        match wheel.tick(epoch.elapsed(), &mut renderer, &mut store, &clock) {
            Tick::Settled(settled) => {
                write!(io::stdout(), "\r\ntoday: {}\r\n", settled.winner.name)?;
                if let Some(err) = settled.persist_error {
                    write!(io::stdout(), "warning: {err}\r\n")?;
                }
                io::stdout().flush()?;
            }
            Tick::Cancelled => break,
            Tick::Idle | Tick::Frame(_) => {}
        }

        if !event::poll(FRAME_BUDGET)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char(' ') => match wheel.request_spin(&mut rng, &clock, epoch.elapsed()) {
                Ok(_) => {}
                Err(SpinError::EmptyCandidates) => {
                    write!(
                        io::stdout(),
                        "every item is cooling down — relax --exclude-days\r\n"
                    )?;
                    io::stdout().flush()?;
                }
            },
            KeyCode::Char('r') => {
                if wheel.reset_pointer() {
                    debug!("pointer reset");
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                wheel.cancel();
                break;
            }
            _ => {}
        }
    }

    write!(io::stdout(), "\r\n")?;
    io::stdout().flush()?;
    Ok(())
}

/// RAII for raw mode and cursor visibility, restored on every exit path.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(out, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = crossterm::execute!(out, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Renders the sector under the pointer as a single redrawn line.
struct StripRenderer;

impl StripRenderer {
    fn new() -> Self {
        Self
    }

    fn draw(&mut self, angle: f64, candidates: &[Item]) -> io::Result<()> {
        let mut out = io::stdout();
        crossterm::queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        write!(out, "  {}", strip_line(angle, candidates))?;
        out.flush()
    }
}

impl WheelRenderer for StripRenderer {
    fn frame(&mut self, angle: f64, candidates: &[Item]) {
        // Rendering is best effort; a full stdout pipe must not kill the spin.
        if let Err(err) = self.draw(angle, candidates) {
            debug!(%err, "frame dropped");
        }
    }
}

/// The strip: previous, current, and next sector names around the pointer.
fn strip_line(angle: f64, candidates: &[Item]) -> String {
    let count = candidates.len();
    let current = sector_at(angle, count);
    if count == 1 {
        return format!("▸ {} ◂", candidates[0].name);
    }
    let prev = (current + count - 1) % count;
    let next = (current + 1) % count;
    format!(
        "{}  ▸ {} ◂  {}",
        candidates[prev].name, candidates[current].name, candidates[next].name
    )
}
