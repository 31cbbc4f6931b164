use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hub_domain::{
    normalize_optional_text, truncate_with_ellipsis, NewTicket, Notification, Ticket, TicketDraft,
    TicketId, TicketUpdate, UserProfile,
};

use crate::commands::notification_commands::post_notification;
use crate::{AppError, AppState};

const VOICE_TITLE_MAX_CHARS: usize = 50;

pub async fn create_ticket(
    state: &AppState,
    submission: NewTicket,
    reporter: Option<&UserProfile>,
) -> Result<Ticket, AppError> {
    submission.validate()?;
    let classification = {
        let rules = state.rules.read().await;
        rules.classify_ticket(
            &submission.description,
            submission.priority,
            submission.category,
        )
    };
    let location = normalize_optional_text(submission.location)
        .or_else(|| reporter.and_then(UserProfile::home_location))
        .unwrap_or_default();
    let draft = TicketDraft {
        title: submission.title,
        description: submission.description,
        priority: classification.priority,
        category: classification.category,
        location,
        assigned_to: submission.assigned_to,
        image_url: submission.image_url,
        reported_by: reporter.map(|profile| profile.display_name.clone()),
    };
    store_ticket(state, draft).await
}

/// Files a ticket from a spoken complaint. Everything except the text comes
/// from classification and the speaker's profile.
pub async fn create_voice_ticket(
    state: &AppState,
    description: &str,
    issued_by: Option<&UserProfile>,
) -> Result<Ticket, AppError> {
    let classification = {
        let rules = state.rules.read().await;
        rules.classify_ticket(description, None, None)
    };
    let draft = TicketDraft {
        title: truncate_with_ellipsis(description, VOICE_TITLE_MAX_CHARS),
        description: description.to_string(),
        priority: classification.priority,
        category: classification.category,
        location: issued_by
            .and_then(UserProfile::home_location)
            .unwrap_or_default(),
        assigned_to: None,
        image_url: None,
        reported_by: issued_by.map(|profile| profile.display_name.clone()),
    };
    store_ticket(state, draft).await
}

async fn store_ticket(state: &AppState, draft: TicketDraft) -> Result<Ticket, AppError> {
    let ticket = {
        let mut tickets = state.tickets.write().await;
        let ticket = Ticket::open(next_ticket_id(&tickets), draft, Utc::now())?;
        tickets.push(ticket.clone());
        ticket
    };
    state.metrics.record_ticket_created();
    info!(
        "ticket {} created ({}, {})",
        ticket.id, ticket.priority, ticket.category
    );
    post_notification(
        state,
        Notification::info(
            "Ticket Created",
            format!("Ticket #{} has been created successfully.", ticket.id),
        ),
    )
    .await;
    Ok(ticket)
}

/// Ids are allocated after the highest numeric id already stored. Once the
/// numeric range is exhausted new tickets get a uuid instead.
fn next_ticket_id(tickets: &[Ticket]) -> TicketId {
    let highest = tickets
        .iter()
        .filter_map(|ticket| ticket.id.numeric())
        .max();
    match highest {
        None => TicketId("1".to_string()),
        Some(highest) => match highest.checked_add(1) {
            Some(next) => TicketId(next.to_string()),
            None => TicketId(Uuid::new_v4().to_string()),
        },
    }
}

pub async fn update_ticket(
    state: &AppState,
    ticket_id: &str,
    update: TicketUpdate,
) -> Result<Ticket, AppError> {
    let ticket_id = ticket_id.trim();
    let mut tickets = state.tickets.write().await;
    let ticket = tickets
        .iter_mut()
        .find(|ticket| ticket.id.as_str() == ticket_id)
        .ok_or_else(|| AppError::NotFound(format!("ticket {}", ticket_id)))?;
    ticket.apply(update)?;
    info!("ticket {} updated: {}", ticket.id, ticket.status);
    Ok(ticket.clone())
}

pub async fn attach_image(
    state: &AppState,
    ticket_id: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<Ticket, AppError> {
    let ticket_id = ticket_id.trim();
    if bytes.is_empty() {
        return Err(AppError::BadRequest("image body must not be empty".to_string()));
    }
    let Some(extension) = image_extension(content_type) else {
        return Err(AppError::BadRequest(format!(
            "unsupported image content type '{}'",
            content_type
        )));
    };
    let exists = {
        let tickets = state.tickets.read().await;
        tickets.iter().any(|ticket| ticket.id.as_str() == ticket_id)
    };
    if !exists {
        return Err(AppError::NotFound(format!("ticket {}", ticket_id)));
    }

    let path = format!("tickets/{}/{}.{}", ticket_id, Uuid::new_v4(), extension);
    let url = state
        .services
        .object_storage
        .upload(&path, content_type, bytes)
        .await
        .map_err(|err| AppError::Upstream(format!("image upload failed: {}", err)))?;

    let mut tickets = state.tickets.write().await;
    let ticket = tickets
        .iter_mut()
        .find(|ticket| ticket.id.as_str() == ticket_id)
        .ok_or_else(|| AppError::NotFound(format!("ticket {}", ticket_id)))?;
    ticket.image_url = Some(url);
    Ok(ticket.clone())
}

fn image_extension(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    match mime.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use hub_domain::{Priority, TicketCategory, TicketStatus};

    use super::*;
    use crate::test_support::test_state;

    fn submission(title: &str, description: &str) -> NewTicket {
        NewTicket {
            title: title.to_string(),
            description: description.to_string(),
            ..NewTicket::default()
        }
    }

    #[tokio::test]
    async fn created_tickets_get_sequential_ids_and_classification() {
        let state = test_state();
        let ticket = create_ticket(
            &state,
            submission("Water on the floor", "Gas leak smell near the boiler"),
            None,
        )
        .await
        .expect("ticket");
        assert_eq!(ticket.id.as_str(), "2042");
        assert_eq!(ticket.priority, Priority::Critical);
        assert_eq!(ticket.location, "To be determined");
        assert_eq!(state.metrics.tickets_created(), 1);

        let next = create_ticket(&state, submission("Loud music", "Neighbor party"), None)
            .await
            .expect("second ticket");
        assert_eq!(next.id.as_str(), "2043");
        assert_eq!(next.category, TicketCategory::NoiseComplaint);
    }

    #[tokio::test]
    async fn title_keywords_do_not_affect_classification() {
        let state = test_state();
        let ticket = create_ticket(
            &state,
            submission("Smoke detector chirping", "Please swap the battery"),
            None,
        )
        .await
        .expect("ticket");
        assert_eq!(ticket.priority, Priority::Medium);
        assert_eq!(ticket.category, TicketCategory::Maintenance);
    }

    #[tokio::test]
    async fn exhausted_numeric_ids_fall_back_to_uuid() {
        let state = test_state();
        {
            let mut tickets = state.tickets.write().await;
            let mut last = tickets[0].clone();
            last.id = TicketId(u64::MAX.to_string());
            tickets.push(last);
        }
        let ticket = create_ticket(&state, submission("Door", "Hinge is loose"), None)
            .await
            .expect("ticket");
        assert!(Uuid::parse_str(ticket.id.as_str()).is_ok());
    }

    #[tokio::test]
    async fn invalid_submission_changes_nothing() {
        let state = test_state();
        let before = state.tickets.read().await.len();
        let err = create_ticket(&state, submission("Broken", "  "), None)
            .await
            .expect_err("rejected");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(state.tickets.read().await.len(), before);
    }

    #[tokio::test]
    async fn voice_ticket_title_is_truncated() {
        let state = test_state();
        let description = "There is a constant dripping sound from the ceiling of the laundry room every night";
        let ticket = create_voice_ticket(&state, description, None)
            .await
            .expect("voice ticket");
        assert!(ticket.title.ends_with("..."));
        assert_eq!(ticket.title.chars().count(), 53);
        assert_eq!(ticket.description, description);
    }

    #[tokio::test]
    async fn update_rejects_status_regression() {
        let state = test_state();
        let err = update_ticket(
            &state,
            "2035",
            TicketUpdate {
                status: Some(TicketStatus::Open),
                assigned_to: None,
            },
        )
        .await
        .expect_err("regression");
        assert!(matches!(err, AppError::BadRequest(_)));

        let updated = update_ticket(
            &state,
            "2035",
            TicketUpdate {
                status: Some(TicketStatus::Resolved),
                assigned_to: None,
            },
        )
        .await
        .expect("resolve");
        assert_eq!(updated.status, TicketStatus::Resolved);

        let missing = update_ticket(&state, "9999", TicketUpdate::default())
            .await
            .expect_err("missing");
        assert!(matches!(missing, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn attached_image_url_is_stored() {
        let state = test_state();
        let ticket = attach_image(&state, "2035", "image/png", vec![1, 2, 3])
            .await
            .expect("attach");
        let url = ticket.image_url.expect("url");
        assert!(url.starts_with("https://storage.test/tickets/2035/"));
        assert!(url.ends_with(".png"));

        let err = attach_image(&state, "2035", "text/plain", vec![1])
            .await
            .expect_err("content type");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
