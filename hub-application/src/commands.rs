pub mod cctv_commands;
pub mod event_commands;
pub mod feedback_commands;
pub mod hall_commands;
pub mod notification_commands;
pub mod reminder_commands;
pub mod ticket_commands;
pub mod voice_commands;
