use hub_domain::{CommandKind, DispatchedCommand, Notification, VoiceCommand};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::commands::{notification_commands, ticket_commands};
use crate::queries::{event_queries, ticket_queries};
use crate::AppState;

const CONSUMED_KINDS: [CommandKind; 4] = [
    CommandKind::CheckTicketStatus,
    CommandKind::CreateComplaint,
    CommandKind::SuggestEvents,
    CommandKind::CollectFeedback,
];

/// Subscribes one consumer per command kind before returning, so commands
/// published right after this call are not missed.
pub async fn spawn_voice_consumers(state: &AppState) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(CONSUMED_KINDS.len());
    for kind in CONSUMED_KINDS {
        let mut receiver = state.voice_hub.subscribe(kind).await;
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(dispatched) => consume(&state, dispatched).await,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("{} consumer lagged, {} commands lost", kind, skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            info!("{} consumer stopped", kind);
        }));
    }
    handles
}

async fn consume(state: &AppState, dispatched: DispatchedCommand) {
    let notification = match dispatched.command {
        VoiceCommand::CreateComplaint { description } => {
            match ticket_commands::create_voice_ticket(
                state,
                &description,
                dispatched.issued_by.as_ref(),
            )
            .await
            {
                // create_voice_ticket already posts "Ticket Created"
                Ok(_) => return,
                Err(err) => {
                    warn!("voice complaint rejected: {}", err);
                    Notification::error("Ticket Not Created", err.to_string())
                }
            }
        }
        VoiceCommand::CheckTicketStatus { ticket_id } => Notification::info(
            "Ticket Status",
            ticket_queries::ticket_status_response(state, ticket_id.as_deref()).await,
        ),
        VoiceCommand::SuggestEvents => {
            let titles = event_queries::recommend(state)
                .into_iter()
                .map(|event| event.title)
                .collect::<Vec<_>>();
            let description = if titles.is_empty() {
                "No events fit the available facilities right now.".to_string()
            } else {
                format!("Suggested for you: {}.", titles.join(", "))
            };
            Notification::info("Event Suggestions", description)
        }
        VoiceCommand::CollectFeedback { .. } => Notification::info(
            "Feedback Collected",
            "Your feedback has been recorded. Thank you!",
        ),
    };
    notification_commands::post_notification(state, notification).await;
}
