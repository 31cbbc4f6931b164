use std::collections::HashMap;

use hub_domain::{CommandKind, DispatchedCommand};
use tokio::sync::{broadcast, RwLock};

const CHANNEL_BUFFER: usize = 64;

/// Publish/subscribe registry for routed voice commands, keyed by command kind.
/// Delivery is at-most-once: a subscriber that lags past the buffer loses the
/// oldest commands, and nothing is replayed to late subscribers.
#[derive(Default)]
pub struct VoiceCommandHub {
    channels: RwLock<HashMap<CommandKind, broadcast::Sender<DispatchedCommand>>>,
}

impl VoiceCommandHub {
    /// Dropping the returned receiver ends the subscription.
    pub async fn subscribe(&self, kind: CommandKind) -> broadcast::Receiver<DispatchedCommand> {
        let mut channels = self.channels.write().await;
        channels
            .entry(kind)
            .or_insert_with(|| {
                let (tx, _rx) = broadcast::channel(CHANNEL_BUFFER);
                tx
            })
            .subscribe()
    }

    /// Returns how many subscribers the command was handed to.
    pub async fn publish(&self, dispatched: DispatchedCommand) -> usize {
        let channels = self.channels.read().await;
        let Some(tx) = channels.get(&dispatched.command.kind()) else {
            return 0;
        };
        tx.send(dispatched).unwrap_or(0)
    }

    pub async fn subscriber_count(&self, kind: CommandKind) -> usize {
        let channels = self.channels.read().await;
        channels
            .get(&kind)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }
}
