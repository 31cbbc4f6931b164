use hub_domain::Reminder;

use crate::{AppError, AppState};

/// Idempotent: marking an already read reminder returns it unchanged.
pub async fn mark_reminder_read(state: &AppState, reminder_id: &str) -> Result<Reminder, AppError> {
    let reminder_id = reminder_id.trim();
    let mut reminders = state.reminders.write().await;
    let reminder = reminders
        .iter_mut()
        .find(|reminder| reminder.id == reminder_id)
        .ok_or_else(|| AppError::NotFound(format!("reminder {}", reminder_id)))?;
    reminder.is_read = true;
    Ok(reminder.clone())
}
