use hub_domain::ReminderBoard;

use crate::AppState;

pub async fn reminder_board(state: &AppState) -> ReminderBoard {
    let reminders = state.reminders.read().await.clone();
    ReminderBoard {
        unread_count: reminders.iter().filter(|reminder| !reminder.is_read).count(),
        reminders,
    }
}
