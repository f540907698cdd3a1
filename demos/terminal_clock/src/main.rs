// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal host for horologium.
//!
//! Shows the current time in one of the registered time systems, repainting
//! on the provider's own tick interval. The selection made with `--system`
//! is remembered in a preference file and restored on the next run.
//!
//! ```text
//! horologium --list
//! horologium --system swatch --ticks 5
//! RUST_LOG=horologium_core=debug horologium --tree
//! ```

mod prefs;
mod presenter;

use std::io;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use horologium_core::backend::Presenter;
use horologium_core::preference::PreferenceStore;
use horologium_core::session::Session;
use horologium_core::time::{HostTime, Instant};
use horologium_debug::snapshot;

use crate::prefs::FilePreferences;
use crate::presenter::{Layout, TerminalPresenter};

/// Show the current time in alternative timekeeping systems.
#[derive(Debug, Parser)]
#[command(name = "horologium", version)]
struct Args {
    /// Time system to show; the choice is remembered for later runs.
    #[arg(short, long, env = "HOROLOGIUM_SYSTEM")]
    system: Option<String>,

    /// Number of paints before exiting; 0 runs until interrupted.
    #[arg(short = 'n', long, env = "HOROLOGIUM_TICKS", default_value_t = 0)]
    ticks: u64,

    /// Preference file (defaults to the user config directory).
    #[arg(long, env = "HOROLOGIUM_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Print the registered time systems and exit.
    #[arg(long, env = "HOROLOGIUM_LIST")]
    list: bool,

    /// Print node outlines instead of plain text.
    #[arg(long, env = "HOROLOGIUM_TREE")]
    tree: bool,

    /// Print one JSON snapshot of the rendered trees and exit.
    #[arg(long, env = "HOROLOGIUM_SNAPSHOT")]
    snapshot: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "HOROLOGIUM_LOG", default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let registry = horologium_systems::registry().context("no usable time systems")?;

    let path = match args.state_file.clone() {
        Some(path) => path,
        None => FilePreferences::default_path()
            .ok_or_else(|| anyhow!("no config directory; pass --state-file"))?,
    };
    let prefs = FilePreferences::new(path);
    tracing::debug!(path = %prefs.path().display(), "using preference file");

    let clock = HostClock::new();
    let mut session = Session::new(registry, prefs, clock.now());

    if args.list {
        list(&session);
        return Ok(());
    }

    if let Some(id) = &args.system
        && !session.switch_to(id, clock.now())
    {
        bail!("unknown time system `{id}`; see --list");
    }

    session.paint(&wall_clock());

    if args.snapshot {
        let _ = session.flush();
        let roots = [session.display_target(), session.visual_target()];
        snapshot::export(session.store(), &roots, &mut io::stdout().lock())?;
        println!();
        return Ok(());
    }

    let current = session.current();
    tracing::info!(
        id = current.id(),
        name = current.name(),
        tick_ms = current.tick_interval().millis(),
        "showing time system"
    );
    if let Some(link) = session.reference_link() {
        tracing::info!(link, "learn more");
    }

    let layout = if args.tree { Layout::Tree } else { Layout::Line };
    let mut presenter = TerminalPresenter::new(
        io::stdout(),
        layout,
        session.display_target(),
        session.visual_target(),
    );
    run(&mut session, &mut presenter, &clock, args.ticks);
    Ok(())
}

/// Presents the first paint, then sleeps until each deadline and presents
/// the ticks that fire.
fn run<P: PreferenceStore>(
    session: &mut Session<P>,
    presenter: &mut impl Presenter,
    clock: &HostClock,
    ticks: u64,
) {
    let changes = session.flush();
    presenter.apply(session.store(), &changes);
    let mut painted = 1;

    while ticks == 0 || painted < ticks {
        let Some(deadline) = session.timer().next_deadline() else {
            break;
        };
        let wait = deadline.saturating_duration_since(clock.now());
        thread::sleep(std::time::Duration::from_millis(wait.millis()));

        if session.poll(clock.now(), &wall_clock()) {
            let changes = session.flush();
            presenter.apply(session.store(), &changes);
            painted += 1;
        }
    }
}

fn list<P: PreferenceStore>(session: &Session<P>) {
    let current = session.current().id();
    for provider in session.registry().all() {
        let marker = if provider.id() == current { '*' } else { ' ' };
        println!(
            "{marker} {:<18} {:<28} {:<9} every {} ms",
            provider.id(),
            provider.name(),
            provider.category().as_str(),
            provider.tick_interval().millis(),
        );
        println!("    {}", provider.description());
    }
}

fn init_tracing(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// The local wall clock, at its current UTC offset.
fn wall_clock() -> Instant {
    chrono::Local::now().fixed_offset()
}

/// Monotonic milliseconds since the host started.
#[derive(Debug)]
struct HostClock {
    start: std::time::Instant,
}

impl HostClock {
    fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    fn now(&self) -> HostTime {
        let elapsed = self.start.elapsed().as_millis();
        HostTime::from_millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }
}
