//! Loopback transport: runs a [`HostService`] as a tokio task.
//!
//! ```text
//!  front end ──String──► action_rx ─► HostService::respond ─► encode_event
//!      ▲                                                          │
//!      └──────────────────── event_tx ◄───── serde_json::Value ───┘
//! ```
//!
//! Actions are processed strictly one after another, so replies leave in the
//! order their actions arrived.

use nativefier_protocol::encode_event;
use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::application::respond::{AppBundler, DirectoryPicker, HostService};

/// Spawns the host loop on the current tokio runtime.
///
/// The task ends when `action_rx` is closed and drained, or when the front
/// end stops listening on `event_tx`.  It hands the service back on exit so
/// callers can inspect it.
pub fn spawn_loopback<P, B>(
    mut service: HostService<P, B>,
    mut action_rx: UnboundedReceiver<String>,
    event_tx: UnboundedSender<Value>,
) -> JoinHandle<HostService<P, B>>
where
    P: DirectoryPicker + 'static,
    B: AppBundler + 'static,
{
    tokio::spawn(async move {
        info!("loopback host started");
        while let Some(raw) = action_rx.recv().await {
            let Some(event) = service.respond(&raw) else {
                continue;
            };
            let value = match encode_event(&event) {
                Ok(value) => value,
                Err(e) => {
                    error!("{e}");
                    continue;
                }
            };
            debug!(event = event.kind(), "host delivering event");
            if event_tx.send(value).is_err() {
                debug!("front end gone; stopping loopback host");
                break;
            }
        }
        info!("loopback host stopped");
        service
    })
}
