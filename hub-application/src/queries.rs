pub mod analytics_queries;
pub mod cctv_queries;
pub mod event_queries;
pub mod hall_queries;
pub mod identity_queries;
pub mod notification_queries;
pub mod reminder_queries;
pub mod ticket_queries;
