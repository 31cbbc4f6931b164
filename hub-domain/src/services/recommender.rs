//! Event suggestions generated from static templates, filtered by the
//! building's facilities and the current date.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};

use crate::entities::EventRecommendation;
use crate::value_objects::{EventCategory, EventId};

pub const MAX_RECOMMENDATIONS: usize = 4;
const WEEKEND_ATTENDANCE_FACTOR: f64 = 1.3;

struct EventTemplate {
    title: &'static str,
    description: &'static str,
    /// Preferred location and the facility it needs; otherwise the fallback.
    preferred: Option<(&'static str, &'static str)>,
    fallback_location: &'static str,
    estimated_attendees: u32,
    category: EventCategory,
    facilities: &'static [&'static str],
    reason: &'static str,
    promotion_script: &'static str,
    broadcast_message: &'static str,
}

impl EventTemplate {
    fn location(&self, facilities: &[String]) -> String {
        match self.preferred {
            Some((facility, location)) if has_facility(facilities, facility) => location.to_string(),
            _ => self.fallback_location.to_string(),
        }
    }

    fn is_supported(&self, facilities: &[String]) -> bool {
        self.facilities
            .iter()
            .all(|facility| has_facility(facilities, facility))
    }
}

static TEMPLATES: [EventTemplate; 5] = [
    EventTemplate {
        title: "Rooftop Sunset Yoga",
        description: "A relaxing yoga session with city views during golden hour. Perfect for stress relief and community bonding.",
        preferred: Some(("terrace", "Rooftop Terrace")),
        fallback_location: "Main Lobby",
        estimated_attendees: 15,
        category: EventCategory::Wellness,
        facilities: &["terrace"],
        reason: "High success rate from past wellness events, utilizing our beautiful terrace space",
        promotion_script: "Join us for a peaceful yoga session as the sun sets over the city. All levels welcome - bring a mat and find your zen!",
        broadcast_message: "ROOFTOP YOGA TONIGHT! Join us at 6 PM on the terrace for sunset yoga. All levels welcome. Bring a mat!",
    },
    EventTemplate {
        title: "Community Game Night",
        description: "Board games, card games, and friendly competition in our comfortable lounge area.",
        preferred: Some(("lounge", "Community Lounge")),
        fallback_location: "Lobby Area",
        estimated_attendees: 20,
        category: EventCategory::Social,
        facilities: &["lounge"],
        reason: "Perfect for weekend community building, using available lounge facilities",
        promotion_script: "Dust off your competitive spirit! Join neighbors for an evening of board games, laughter, and friendly rivalry.",
        broadcast_message: "GAME NIGHT SATURDAY! Board games, snacks, and fun from 7-10 PM in the lounge. Bring your favorites or play ours!",
    },
    EventTemplate {
        title: "Garden Herb Workshop",
        description: "Learn to grow herbs in small spaces. Take home starter plants and gardening tips.",
        preferred: Some(("garden", "Community Garden")),
        fallback_location: "Terrace Area",
        estimated_attendees: 12,
        category: EventCategory::Educational,
        facilities: &["garden", "terrace"],
        reason: "Educational events show high engagement, perfect for spring/summer months",
        promotion_script: "Discover the joy of growing your own herbs! Expert tips, free plants, and green-thumb secrets shared.",
        broadcast_message: "HERB WORKSHOP SUNDAY! Learn to grow basil, mint & more in your apartment. Free starter plants! 2 PM in the garden",
    },
    EventTemplate {
        title: "Movie Night Under Stars",
        description: "Outdoor movie screening with popcorn and cozy blankets. Community votes on the film selection.",
        preferred: Some(("terrace", "Rooftop Terrace")),
        fallback_location: "Community Lounge",
        estimated_attendees: 25,
        category: EventCategory::Entertainment,
        facilities: &["terrace"],
        reason: "Outdoor entertainment events are popular in good weather, high attendance expected",
        promotion_script: "Cinema meets community! Vote for the movie, bring blankets, and enjoy a night under the stars with neighbors.",
        broadcast_message: "OUTDOOR MOVIE NIGHT! Vote for the film, we'll provide popcorn & blankets. Friday 8 PM on the terrace!",
    },
    EventTemplate {
        title: "Building Safety Presentation",
        description: "Fire safety, emergency procedures, and building security updates. Light refreshments provided.",
        preferred: None,
        fallback_location: "Community Lounge",
        estimated_attendees: 30,
        category: EventCategory::Maintenance,
        facilities: &["lounge"],
        reason: "Important community information session, good turnout expected for safety topics",
        promotion_script: "Stay informed and stay safe! Important updates on building procedures, plus time for your questions and concerns.",
        broadcast_message: "SAFETY MEETING TUESDAY! Fire procedures, security updates & Q&A. 7 PM lounge. Refreshments provided!",
    },
];

static SPRING_TEMPLATE: EventTemplate = EventTemplate {
    title: "Spring Cleaning Community Day",
    description: "Organize common areas and share decluttering tips. Community bonding through shared responsibility.",
    preferred: None,
    fallback_location: "Building-wide",
    estimated_attendees: 18,
    category: EventCategory::Maintenance,
    facilities: &[],
    reason: "Spring season perfect for community cleaning initiatives",
    promotion_script: "Spring into action! Join neighbors for a building-wide refresh. Many hands make light work!",
    broadcast_message: "SPRING CLEANING DAY! Let's freshen up our shared spaces together. Saturday 10 AM. Coffee & donuts provided!",
};

fn has_facility(facilities: &[String], wanted: &str) -> bool {
    facilities
        .iter()
        .any(|facility| facility.trim().eq_ignore_ascii_case(wanted))
}

fn is_spring(month: u32) -> bool {
    (3..=5).contains(&month)
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// `now` is taken in the building's local time zone so weekend and season
/// checks follow the residents' calendar.
pub fn recommend_events<Tz: TimeZone>(facilities: &[String], now: &DateTime<Tz>) -> Vec<EventRecommendation> {
    let mut templates: Vec<&EventTemplate> = TEMPLATES
        .iter()
        .filter(|template| template.is_supported(facilities))
        .collect();
    if is_spring(now.month()) {
        templates.insert(0, &SPRING_TEMPLATE);
    }
    let weekend = is_weekend(now.weekday());
    let now_utc = now.with_timezone(&Utc);
    let stamp = now_utc.timestamp_millis();

    templates
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(index, template)| {
            let (estimated_attendees, reason) = if weekend {
                (
                    (f64::from(template.estimated_attendees) * WEEKEND_ATTENDANCE_FACTOR).round() as u32,
                    format!(
                        "{} (Weekend timing increases expected attendance)",
                        template.reason
                    ),
                )
            } else {
                (template.estimated_attendees, template.reason.to_string())
            };
            EventRecommendation {
                id: EventId(format!("event-{}-{}", stamp, index)),
                title: template.title.to_string(),
                description: template.description.to_string(),
                suggested_date: now_utc + Duration::weeks(index as i64 + 1),
                location: template.location(facilities),
                estimated_attendees,
                category: template.category,
                facilities: template.facilities.iter().map(|f| f.to_string()).collect(),
                promotion_script: template.promotion_script.to_string(),
                broadcast_message: template.broadcast_message.to_string(),
                reason,
            }
        })
        .collect()
}
