// Ticket entity
// A tracked maintenance, security or complaint record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::utils::normalize_optional_text;
use crate::value_objects::{Priority, TicketCategory, TicketId, TicketStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub category: TicketCategory,
    pub location: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
}

/// Submission form for a new ticket. Priority and category are the submitter's
/// choice and may be raised or filled in by classification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTicket {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<TicketCategory>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::MissingField("description"));
        }
        Ok(())
    }
}

/// Fully resolved ticket fields, ready to be stored under a fresh id.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: TicketCategory,
    pub location: String,
    pub assigned_to: Option<String>,
    pub image_url: Option<String>,
    pub reported_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketUpdate {
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TicketListQuery {
    pub limit: Option<usize>,
    pub status: Option<TicketStatus>,
}

impl Ticket {
    pub fn open(id: TicketId, draft: TicketDraft, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let title = draft.title.trim().to_string();
        let description = draft.description.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        if description.is_empty() {
            return Err(DomainError::MissingField("description"));
        }
        let assigned_to = normalize_optional_text(draft.assigned_to);
        let status = if assigned_to.is_some() {
            TicketStatus::Assigned
        } else {
            TicketStatus::Open
        };
        let location = draft.location.trim();
        Ok(Self {
            id,
            title,
            description,
            priority: draft.priority,
            status,
            category: draft.category,
            location: if location.is_empty() {
                "To be determined".to_string()
            } else {
                location.to_string()
            },
            created_at,
            assigned_to,
            image_url: normalize_optional_text(draft.image_url),
            reported_by: normalize_optional_text(draft.reported_by),
        })
    }

    pub fn transition(&mut self, next: TicketStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Applies a partial update. Nothing is written unless every part is valid.
    /// A blank assignee is rejected rather than clearing the assignment.
    pub fn apply(&mut self, update: TicketUpdate) -> Result<(), DomainError> {
        if let Some(next) = update.status {
            if !self.status.can_transition_to(next) {
                return Err(DomainError::InvalidTransition {
                    from: self.status,
                    to: next,
                });
            }
        }
        let assignee = match update.assigned_to {
            Some(assignee) => Some(
                normalize_optional_text(Some(assignee))
                    .ok_or(DomainError::MissingField("assigned_to"))?,
            ),
            None => None,
        };
        if let Some(assignee) = assignee {
            self.assigned_to = Some(assignee);
            if self.status == TicketStatus::Open && update.status.is_none() {
                self.status = TicketStatus::Assigned;
            }
        }
        if let Some(next) = update.status {
            self.status = next;
        }
        Ok(())
    }

    pub fn status_response(&self) -> String {
        let mut response = format!(
            "Ticket {} is currently {}.",
            self.id,
            self.status.as_str().to_lowercase()
        );
        if let Some(assignee) = &self.assigned_to {
            response.push_str(&format!(" Assigned to {}.", assignee));
        }
        response.push_str(&format!(" Priority level: {}.", self.priority));
        response
    }
}

pub const TICKET_NOT_FOUND_RESPONSE: &str =
    "I couldn't find a ticket with that number. Please check the ticket ID and try again.";

pub const TICKET_ID_MISSING_RESPONSE: &str =
    "Please tell me the ticket number you want to check, for example \"status of ticket 2035\".";

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TicketDraft {
        TicketDraft {
            title: "AC broken".to_string(),
            description: "No cooling since Monday".to_string(),
            priority: Priority::High,
            category: TicketCategory::Maintenance,
            location: " ".to_string(),
            assigned_to: None,
            image_url: None,
            reported_by: None,
        }
    }

    #[test]
    fn open_rejects_blank_description() {
        let mut invalid = draft();
        invalid.description = "   ".to_string();
        let err = Ticket::open(TicketId::from("1"), invalid, Utc::now()).expect_err("reject");
        assert_eq!(err, DomainError::MissingField("description"));
    }

    #[test]
    fn open_defaults_location_and_status() {
        let ticket = Ticket::open(TicketId::from("1"), draft(), Utc::now()).expect("ticket");
        assert_eq!(ticket.location, "To be determined");
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn resolved_tickets_do_not_regress() {
        let mut ticket = Ticket::open(TicketId::from("1"), draft(), Utc::now()).expect("ticket");
        ticket.transition(TicketStatus::Resolved).expect("resolve");
        let err = ticket
            .apply(TicketUpdate {
                status: Some(TicketStatus::InProgress),
                assigned_to: Some("Mike".to_string()),
            })
            .expect_err("regression rejected");
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket.assigned_to, None);
    }

    #[test]
    fn assigning_an_open_ticket_moves_it_to_assigned() {
        let mut ticket = Ticket::open(TicketId::from("1"), draft(), Utc::now()).expect("ticket");
        ticket
            .apply(TicketUpdate {
                status: None,
                assigned_to: Some("Sarah Chen".to_string()),
            })
            .expect("assign");
        assert_eq!(ticket.status, TicketStatus::Assigned);
        assert_eq!(
            ticket.status_response(),
            "Ticket 1 is currently assigned. Assigned to Sarah Chen. Priority level: P2."
        );
    }

    #[test]
    fn blank_assignee_is_rejected_without_changes() {
        let mut ticket = Ticket::open(TicketId::from("1"), draft(), Utc::now()).expect("ticket");
        ticket
            .apply(TicketUpdate {
                status: None,
                assigned_to: Some("Sarah Chen".to_string()),
            })
            .expect("assign");
        let err = ticket
            .apply(TicketUpdate {
                status: Some(TicketStatus::InProgress),
                assigned_to: Some("  ".to_string()),
            })
            .expect_err("blank assignee");
        assert_eq!(err, DomainError::MissingField("assigned_to"));
        assert_eq!(ticket.status, TicketStatus::Assigned);
        assert_eq!(ticket.assigned_to.as_deref(), Some("Sarah Chen"));
    }
}
