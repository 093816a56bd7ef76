//! nativefier-gui: console front end wired to an in-process host.
//!
//! # Usage
//!
//! ```text
//! nativefier-gui [OPTIONS] < commands.txt
//!
//! Options:
//!   --platform <NAME>        Platform reported by the host [default: detected]
//!   --default-path <DIR>     Host's default output directory [default: desktop]
//!   --pick-directory <DIR>   What the directory picker answers [default: cancel]
//!   --linger-ms <MS>         Wait for host events after end of input [default: 250]
//! ```
//!
//! Every option can also be set through the environment variable named in
//! its help text.  The rendered page goes to stdout, logs go to stderr
//! (`RUST_LOG` selects the level, `info` by default).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nativefier_gui::infrastructure::{run_console, ChannelTransport, ConsoleConfig, MemoryView};
use nativefier_gui::{EventDispatcher, Gui};
use nativefier_host::{spawn_loopback, DryRunBundler, FixedDirectoryPicker, HostConfig, HostService};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// nativefier front end driven from the console.
#[derive(Debug, Parser)]
#[command(
    name = "nativefier-gui",
    about = "Console front end for building nativefier apps",
    version
)]
struct Cli {
    /// Platform name the host reports (`windows` switches to backslash paths).
    #[arg(long, env = "NATIVEFIER_PLATFORM")]
    platform: Option<String>,

    /// Default output directory the host reports.
    #[arg(long, env = "NATIVEFIER_DEFAULT_PATH")]
    default_path: Option<PathBuf>,

    /// Directory the host's picker returns.  Without it the picker behaves
    /// as if cancelled and the host answers with the default path.
    #[arg(long, env = "NATIVEFIER_PICK_DIRECTORY")]
    pick_directory: Option<PathBuf>,

    /// Milliseconds to keep waiting for host events after input ends.
    #[arg(long, default_value_t = 250, env = "NATIVEFIER_LINGER_MS")]
    linger_ms: u64,
}

impl Cli {
    /// The host configuration: detected, then overridden by any flags given.
    fn host_config(&self) -> HostConfig {
        HostConfig::detect().with_overrides(self.platform.clone(), self.default_path.clone())
    }

    fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            linger: Duration::from_millis(self.linger_ms),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let host_config = cli.host_config();
    let console_config = cli.console_config();
    info!(
        "nativefier-gui starting: platform={}, default_path={}",
        host_config.platform,
        host_config.default_path.display()
    );

    // ── Host ──────────────────────────────────────────────────────────────────
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let service = HostService::new(
        host_config,
        FixedDirectoryPicker(cli.pick_directory),
        DryRunBundler::new(),
    );
    let host = spawn_loopback(service, action_rx, event_tx);

    // ── Front end ─────────────────────────────────────────────────────────────
    let mut gui = Gui::boot(MemoryView::new(), ChannelTransport::new(action_tx));
    let mut dispatcher = EventDispatcher::new();
    run_console(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &mut gui,
        &mut dispatcher,
        &mut event_rx,
        &console_config,
    )
    .await?;

    // Dropping the controller closes the action channel, which stops the host.
    drop(gui);
    let service = host.await.context("loopback host task failed")?;
    info!(
        "nativefier-gui stopped after {} build(s)",
        service.bundler().requests().len()
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
