use tracing::info;

use hub_domain::{EventRecommendation, Notification};

use crate::commands::notification_commands::post_notification;
use crate::{AppError, AppState};

/// Marks an event for promotion. Returns `false` when it was already selected.
pub async fn select_event(state: &AppState, event: EventRecommendation) -> Result<bool, AppError> {
    if event.id.as_str().is_empty() {
        return Err(AppError::BadRequest("event id must not be empty".to_string()));
    }
    if event.title.trim().is_empty() {
        return Err(AppError::BadRequest("event title must not be empty".to_string()));
    }
    let title = event.title.clone();
    {
        let mut selected = state.selected_events.write().await;
        if selected.iter().any(|existing| existing.id == event.id) {
            return Ok(false);
        }
        info!("event {} selected for promotion", event.id);
        selected.push(event);
    }
    post_notification(
        state,
        Notification::info(
            "Event Selected",
            format!("{} is now ready for promotion!", title),
        ),
    )
    .await;
    Ok(true)
}
