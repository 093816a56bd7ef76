//! Line-oriented console front end.
//!
//! Stands in for a windowed shell around the view controller: each input
//! line is a user action on the page, and the page itself is printed as text.
//!
//! # Commands
//!
//! ```text
//! name <text>       set the project name field
//! url <text>        set the source URL field
//! click <element>   click an element (`directory` or `build`)
//! show              print the page
//! quit              stop immediately
//! ```
//!
//! # Shutdown
//!
//! After `quit` the loop stops at once.  On end of input it keeps delivering
//! host events until none has arrived for [`ConsoleConfig::linger`], so
//! replies to the last commands still reach the page.  Either way the page is
//! printed one final time.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::application::{EventDispatcher, Gui};
use crate::domain::{ElementId, HostTransport, ViewSurface};
use crate::infrastructure::memory_view::MemoryView;

/// Default quiet period after end of input.
pub const DEFAULT_LINGER: Duration = Duration::from_millis(250);

/// Console runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// How long to wait for further host events after end of input.
    pub linger: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            linger: DEFAULT_LINGER,
        }
    }
}

// ── Command grammar ───────────────────────────────────────────────────────────

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Type `value` into an input field.  The value is kept verbatim.
    SetField(ElementId, String),
    Click(ElementId),
    Show,
    Quit,
}

/// Errors from parsing a console line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`click` needs an element id")]
    MissingTarget,

    #[error("no element with id `{0}`")]
    NoSuchElement(String),
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        match word {
            "" => Err(CommandError::Empty),
            "name" => Ok(ConsoleCommand::SetField(ElementId::Name, rest.to_owned())),
            "url" => Ok(ConsoleCommand::SetField(ElementId::Url, rest.to_owned())),
            "click" => {
                let target = rest.trim();
                if target.is_empty() {
                    return Err(CommandError::MissingTarget);
                }
                ElementId::from_id(target)
                    .map(ConsoleCommand::Click)
                    .ok_or_else(|| CommandError::NoSuchElement(target.to_owned()))
            }
            "show" => Ok(ConsoleCommand::Show),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Renders the page, one `id: content` line per element.
///
/// ```text
/// directory:  > home > me > Desktop
/// name: Docs
/// url: https://docs.rs
/// build-status: done done
/// ```
pub fn render_view(view: &MemoryView) -> String {
    let mut page = String::new();
    for element in [
        ElementId::Directory,
        ElementId::Name,
        ElementId::Url,
        ElementId::BuildStatus,
    ] {
        let content = match element {
            ElementId::Name | ElementId::Url => view.field_value(element),
            ElementId::BuildStatus => view.statuses().join(" "),
            _ => view.render(element),
        };
        page.push_str(&format!("{element}: {content}\n"));
    }
    page
}

// ── Event loop ────────────────────────────────────────────────────────────────

/// Runs the console until `quit`, or until input ends and the host goes
/// quiet, or until the host's event channel closes.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub async fn run_console<R, W, T>(
    input: R,
    mut output: W,
    gui: &mut Gui<MemoryView, T>,
    dispatcher: &mut EventDispatcher,
    events: &mut UnboundedReceiver<Value>,
    config: &ConsoleConfig,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    T: HostTransport,
{
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("failed to read console input")? else {
                    debug!("console input closed; lingering for host events");
                    input_open = false;
                    continue;
                };
                let reply = match line.parse::<ConsoleCommand>() {
                    Ok(ConsoleCommand::Quit) => break,
                    Ok(command) => apply(command, gui),
                    Err(CommandError::Empty) => None,
                    Err(e) => Some(format!("error: {e}\n")),
                };
                if let Some(reply) = reply {
                    output
                        .write_all(reply.as_bytes())
                        .await
                        .context("failed to write console output")?;
                }
            }
            event = events.recv() => match event {
                Some(value) => dispatcher.deliver(gui, value),
                None => {
                    debug!("host event channel closed");
                    break;
                }
            },
            () = tokio::time::sleep(config.linger), if !input_open => break,
        }
    }

    output
        .write_all(render_view(gui.view()).as_bytes())
        .await
        .context("failed to write console output")?;
    output.flush().await.context("failed to flush console output")?;
    info!("console session ended");
    Ok(())
}

/// Applies one command; returns text to print, if any.
fn apply<T: HostTransport>(
    command: ConsoleCommand,
    gui: &mut Gui<MemoryView, T>,
) -> Option<String> {
    match command {
        ConsoleCommand::SetField(target, value) => {
            gui.view_mut().set_field_value(target, value);
            None
        }
        ConsoleCommand::Click(target) => {
            match gui.view().click(target) {
                Some(gesture) => gui.handle_gesture(gesture),
                None => debug!(%target, "nothing bound to clicked element"),
            }
            None
        }
        ConsoleCommand::Show => Some(render_view(gui.view())),
        ConsoleCommand::Quit => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
