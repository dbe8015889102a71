//! Control channel: clear the stores or report their statistics
//!
//! Commands arrive as tagged messages carrying a one-shot reply port, the
//! same request/response shape a host transport would deliver. Unknown tags
//! are ignored without a reply, matching the permissive policy of the rest
//! of the engine.

use crate::engine::CacheEngine;
use crate::lifecycle::CacheStats;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

/// The two recognized control commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    ClearCache,
    CacheStats,
}

impl ControlCommand {
    /// Parse a wire tag. Anything unrecognized is `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "CLEAR_CACHE" => Some(ControlCommand::ClearCache),
            "CACHE_STATS" => Some(ControlCommand::CacheStats),
            _ => None,
        }
    }
}

/// An inbound control message: the raw command tag plus the port the reply
/// is sent back on
#[derive(Debug)]
pub struct ControlMessage {
    pub command: String,
    pub reply: oneshot::Sender<ControlReply>,
}

impl ControlMessage {
    /// Build a message and the receiving end of its reply port
    pub fn new(command: &str) -> (Self, oneshot::Receiver<ControlReply>) {
        let (reply, rx) = oneshot::channel();
        (
            Self {
                command: command.to_string(),
                reply,
            },
            rx,
        )
    }
}

/// Reply payloads, serialized untagged so they match the wire shapes
/// `{"success":true}` and `{"images":..,"api":..,"total":..}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ControlReply {
    Cleared { success: bool },
    Stats(CacheStats),
}

/// Handle one control message. Unknown commands drop the reply port without
/// sending anything, so the sender simply never hears back.
pub async fn handle_control(engine: &CacheEngine, message: ControlMessage) {
    let Some(command) = ControlCommand::parse(&message.command) else {
        log::debug!("Ignoring unknown control command: {}", message.command);
        return;
    };

    let reply = match command {
        ControlCommand::ClearCache => {
            let success = engine
                .lifecycle()
                .drop_known(&engine.config().known_stores())
                .await;
            log::info!("Cache cleared (success: {})", success);
            ControlReply::Cleared { success }
        }
        ControlCommand::CacheStats => {
            let stats = engine.lifecycle().stats(engine.config()).await;
            ControlReply::Stats(stats)
        }
    };

    // The requester may have dropped its end already; nothing to do then
    let _ = message.reply.send(reply);
}

/// Serve control messages until the channel closes. Meant to be spawned
/// alongside the engine; the transport that feeds the channel is up to the
/// host environment.
pub async fn serve_control(engine: CacheEngine, mut commands: mpsc::Receiver<ControlMessage>) {
    while let Some(message) = commands.recv().await {
        handle_control(&engine, message).await;
    }
    log::debug!("Control channel closed");
}
