use hub_domain::Notification;

use crate::AppState;

pub async fn post_notification(state: &AppState, notification: Notification) {
    let capacity = state.config.notification_capacity.max(1);
    let mut notifications = state.notifications.write().await;
    notifications.push_front(notification);
    notifications.truncate(capacity);
}
