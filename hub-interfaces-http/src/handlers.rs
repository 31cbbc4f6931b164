pub mod community_handlers;
pub mod event_handlers;
pub mod feedback_handlers;
pub mod ops_handlers;
pub mod ticket_handlers;
pub mod voice_handlers;
