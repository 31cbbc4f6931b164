use hub_domain::Notification;

use crate::AppState;

pub async fn list_notifications(state: &AppState, limit: Option<usize>) -> Vec<Notification> {
    let notifications = state.notifications.read().await;
    let limit = limit.unwrap_or(notifications.len());
    notifications.iter().take(limit).cloned().collect()
}
