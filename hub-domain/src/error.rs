use thiserror::Error;

use crate::value_objects::TicketStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),
    #[error("cannot move ticket from {from} to {to}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },
    #[error("unknown monitored area '{0}'")]
    UnknownArea(String),
    #[error("invalid date_time '{0}', expected YYYY-MM-DD HH:MM")]
    InvalidDateTime(String),
    #[error("footage time '{0}' is in the future")]
    FutureFootage(String),
    #[error("hall '{0}' is not available")]
    HallUnavailable(String),
}
