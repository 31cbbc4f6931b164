// Demo collections served when no seed file is configured

use anyhow::Result;
use chrono::{TimeZone, Utc};

use hub_domain::{
    CctvRequest, CctvStatus, EventId, Feedback, FeedbackCategory, FeedbackSource, Hall, Priority,
    Rating, Reminder, ReminderKind, ReminderPriority, SeedData, Ticket, TicketCategory, TicketId,
    TicketStatus,
};

use crate::utils::{date_to_utc, parse_local_minutes};

struct TicketRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    status: TicketStatus,
    category: TicketCategory,
    location: &'static str,
    created: &'static str,
    assigned_to: Option<&'static str>,
}

fn ticket_rows() -> Vec<TicketRow> {
    vec![
        TicketRow {
            id: "2035",
            title: "Air conditioning not working in apartment 5B",
            description: "The AC has been making strange noises and not cooling properly for the past two days.",
            priority: Priority::High,
            status: TicketStatus::InProgress,
            category: TicketCategory::Maintenance,
            location: "Apartment 5B",
            created: "2024-01-15",
            assigned_to: Some("Mike Johnson"),
        },
        TicketRow {
            id: "2036",
            title: "Elevator making loud noise",
            description: "The main elevator is making grinding sounds when moving between floors 3-5.",
            priority: Priority::Critical,
            status: TicketStatus::Assigned,
            category: TicketCategory::Maintenance,
            location: "Main Elevator",
            created: "2024-01-16",
            assigned_to: Some("Sarah Chen"),
        },
        TicketRow {
            id: "2037",
            title: "Sewage leaking in basement parking",
            description: "There is a strong sewage leak near parking spot B-15. The smell is unbearable and water is pooling.",
            priority: Priority::Critical,
            status: TicketStatus::Open,
            category: TicketCategory::Plumbing,
            location: "Basement Parking B-15",
            created: "2024-01-14",
            assigned_to: Some("Plumbing Team"),
        },
        TicketRow {
            id: "2038",
            title: "Broken electrical panel on 7th floor",
            description: "The electrical panel cover is hanging loose and some switches are not working properly.",
            priority: Priority::Critical,
            status: TicketStatus::Assigned,
            category: TicketCategory::Electrical,
            location: "7th Floor Corridor",
            created: "2024-01-13",
            assigned_to: Some("Electrical Team"),
        },
        TicketRow {
            id: "2039",
            title: "Lift stuck between 4th and 5th floor",
            description: "The service elevator has been stuck for 30 minutes. Emergency button pressed but no response.",
            priority: Priority::Critical,
            status: TicketStatus::InProgress,
            category: TicketCategory::Emergency,
            location: "Service Elevator",
            created: "2024-01-17",
            assigned_to: Some("Emergency Response"),
        },
        TicketRow {
            id: "2040",
            title: "Guard harassment of domestic help",
            description: "Security guard at main gate has been asking inappropriate questions and delaying entry for domestic helpers.",
            priority: Priority::High,
            status: TicketStatus::Open,
            category: TicketCategory::Security,
            location: "Main Gate",
            created: "2024-01-12",
            assigned_to: Some("Security Manager"),
        },
        TicketRow {
            id: "2041",
            title: "Elevator door not closing properly",
            description: "The main elevator doors take multiple attempts to close and sometimes open unexpectedly.",
            priority: Priority::High,
            status: TicketStatus::Open,
            category: TicketCategory::Maintenance,
            location: "Main Elevator",
            created: "2024-01-11",
            assigned_to: None,
        },
    ]
}

fn tickets() -> Result<Vec<Ticket>> {
    ticket_rows()
        .into_iter()
        .map(|row| {
            Ok(Ticket {
                id: TicketId::from(row.id),
                title: row.title.to_string(),
                description: row.description.to_string(),
                priority: row.priority,
                status: row.status,
                category: row.category,
                location: row.location.to_string(),
                created_at: date_to_utc(row.created)?,
                assigned_to: row.assigned_to.map(str::to_string),
                image_url: None,
                reported_by: None,
            })
        })
        .collect()
}

fn feedbacks() -> Result<Vec<Feedback>> {
    Ok(vec![
        Feedback {
            id: "fb1".to_string(),
            event_id: EventId::from("event-1"),
            event_title: "Rooftop Sunset Yoga".to_string(),
            rating: Rating::new(5)?,
            body: "Amazing experience! The sunset views were breathtaking and the instructor was wonderful.".to_string(),
            source: FeedbackSource::Text,
            category: FeedbackCategory::Positive,
            submitted_at: date_to_utc("2024-01-10")?,
        },
        Feedback {
            id: "fb2".to_string(),
            event_id: EventId::from("event-2"),
            event_title: "Community Game Night".to_string(),
            rating: Rating::new(4)?,
            body: "Great fun with neighbors. Could use more variety in board games.".to_string(),
            source: FeedbackSource::Voice,
            category: FeedbackCategory::Suggestion,
            submitted_at: date_to_utc("2024-01-12")?,
        },
    ])
}

fn halls() -> Vec<Hall> {
    let hall = |id: &str, name: &str, capacity, location: &str, is_available, amenities: &[&str], next: Option<&str>| Hall {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        location: location.to_string(),
        is_available,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        next_available: next.map(str::to_string),
    };
    vec![
        hall("1", "Community Hall A", 100, "Block A, Ground Floor", true, &["Projector", "Sound System", "Air Conditioning"], None),
        hall("2", "Conference Room B", 50, "Block B, 2nd Floor", false, &["Smart Board", "Video Conferencing"], Some("Tomorrow 2:00 PM")),
        hall("3", "Event Hall C", 200, "Block C, Ground Floor", true, &["Stage", "Professional Lighting", "Sound System"], None),
    ]
}

fn reminders() -> Result<Vec<Reminder>> {
    let rows = [
        ("1", "Water Supply Maintenance", "Water supply will be interrupted tomorrow from 10 AM to 2 PM for maintenance work in Block A and B.", ReminderKind::Maintenance, "2024-01-22 10:00", false, ReminderPriority::High),
        ("2", "Community Meeting", "Monthly community meeting scheduled for this Saturday at 7 PM in Community Hall A.", ReminderKind::Event, "2024-01-27 19:00", false, ReminderPriority::Medium),
        ("3", "Security Alert", "Please ensure all vehicles are locked. There have been reports of attempted break-ins in the parking area.", ReminderKind::Urgent, "2024-01-21 08:00", true, ReminderPriority::High),
        ("4", "Gym Timing Update", "Gym timings have been extended. New hours: 5 AM to 11 PM, Monday to Sunday.", ReminderKind::Notice, "2024-01-20 14:30", true, ReminderPriority::Low),
    ];
    rows.into_iter()
        .map(|(id, title, message, kind, date_time, is_read, priority)| {
            Ok(Reminder {
                id: id.to_string(),
                title: title.to_string(),
                message: message.to_string(),
                kind,
                date_time: parse_local_minutes(date_time)?,
                is_read,
                priority,
            })
        })
        .collect()
}

fn cctv_requests() -> Result<Vec<CctvRequest>> {
    let rows = [
        ("1", "Block A Entrance", "2024-01-20 14:30", "Security incident investigation", CctvStatus::Ready, "2024-01-21 09:00"),
        ("2", "Parking Area B", "2024-01-19 18:00", "Vehicle damage claim", CctvStatus::Processing, "2024-01-20 16:30"),
    ];
    rows.into_iter()
        .map(|(id, area, date_time, reason, status, requested_at)| {
            Ok(CctvRequest {
                id: id.to_string(),
                area: area.to_string(),
                date_time: parse_local_minutes(date_time)?,
                reason: reason.to_string(),
                status,
                requested_at: Utc.from_utc_datetime(&parse_local_minutes(requested_at)?),
                requested_by: None,
            })
        })
        .collect()
}

pub fn builtin_seed() -> Result<SeedData> {
    Ok(SeedData {
        tickets: tickets()?,
        feedbacks: feedbacks()?,
        halls: halls(),
        reminders: reminders()?,
        cctv_requests: cctv_requests()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_matches_the_demo_building() {
        let seed = builtin_seed().expect("seed");
        let highest = seed
            .tickets
            .iter()
            .filter_map(|ticket| ticket.id.numeric())
            .max();
        assert_eq!(highest, Some(2041));
        assert_eq!(seed.reminders.iter().filter(|r| !r.is_read).count(), 2);
        assert!(seed.halls.iter().any(|hall| !hall.is_available));
        assert_eq!(seed.cctv_requests[0].status, CctvStatus::Ready);
    }
}
