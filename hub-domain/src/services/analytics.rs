//! Derived aggregates over the feedback and ticket collections.

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::{Feedback, Ticket};
use crate::value_objects::{EventId, FeedbackCategory, Priority, Rating, TicketStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub suggestion: usize,
}

impl CategoryDistribution {
    pub fn record(&mut self, category: FeedbackCategory) {
        match category {
            FeedbackCategory::Positive => self.positive += 1,
            FeedbackCategory::Negative => self.negative += 1,
            FeedbackCategory::Neutral => self.neutral += 1,
            FeedbackCategory::Suggestion => self.suggestion += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral + self.suggestion
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Standing {
    pub fn for_average(average: f64) -> Self {
        if average >= 4.0 {
            Standing::Excellent
        } else if average >= 3.0 {
            Standing::Good
        } else {
            Standing::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRollup {
    pub event_id: EventId,
    pub event_title: String,
    pub feedback_count: usize,
    pub total_rating: u64,
    pub average_rating: f64,
    pub standing: Standing,
}

impl EventRollup {
    pub fn new(event_id: EventId, event_title: String) -> Self {
        Self {
            event_id,
            event_title,
            feedback_count: 0,
            total_rating: 0,
            average_rating: 0.0,
            standing: Standing::NeedsImprovement,
        }
    }

    /// Running average: `(old_avg * old_count + r) / (old_count + 1)`.
    /// Evaluated from the integer total so it matches [`EventRollup::from_ratings`] exactly.
    pub fn record(&mut self, rating: Rating) {
        self.feedback_count += 1;
        self.total_rating += u64::from(rating.value());
        self.average_rating = self.total_rating as f64 / self.feedback_count as f64;
        self.standing = Standing::for_average(self.average_rating);
    }

    /// Batch form of [`EventRollup::record`], computed from the full rating list.
    pub fn from_ratings(event_id: EventId, event_title: String, ratings: &[Rating]) -> Self {
        let mut rollup = Self::new(event_id, event_title);
        if ratings.is_empty() {
            return rollup;
        }
        rollup.feedback_count = ratings.len();
        rollup.total_rating = ratings.iter().map(|rating| u64::from(rating.value())).sum();
        rollup.average_rating = rollup.total_rating as f64 / rollup.feedback_count as f64;
        rollup.standing = Standing::for_average(rollup.average_rating);
        rollup
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackAnalytics {
    pub total: usize,
    pub average_rating: f64,
    pub rating_distribution: Vec<RatingBucket>,
    pub category_distribution: CategoryDistribution,
    pub positive_share: f64,
    pub event_rankings: Vec<EventRollup>,
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn average_rating(feedbacks: &[Feedback]) -> f64 {
    if feedbacks.is_empty() {
        return 0.0;
    }
    let sum: u64 = feedbacks
        .iter()
        .map(|feedback| u64::from(feedback.rating.value()))
        .sum();
    sum as f64 / feedbacks.len() as f64
}

pub fn compute_feedback_analytics(feedbacks: &[Feedback]) -> FeedbackAnalytics {
    let total = feedbacks.len();

    let mut counts = [0usize; Rating::MAX as usize];
    let mut categories = CategoryDistribution::default();
    let mut rollups: Vec<EventRollup> = Vec::new();
    let mut positions: HashMap<&EventId, usize> = HashMap::new();

    for feedback in feedbacks {
        counts[usize::from(feedback.rating.value() - 1)] += 1;
        categories.record(feedback.category);
        let index = *positions.entry(&feedback.event_id).or_insert_with(|| {
            rollups.push(EventRollup::new(
                feedback.event_id.clone(),
                feedback.event_title.clone(),
            ));
            rollups.len() - 1
        });
        rollups[index].record(feedback.rating);
    }

    rollups.sort_by(|a, b| {
        b.average_rating
            .total_cmp(&a.average_rating)
            .then_with(|| a.event_id.cmp(&b.event_id))
    });

    let rating_distribution = counts
        .iter()
        .enumerate()
        .map(|(index, count)| RatingBucket {
            rating: index as u8 + 1,
            count: *count,
            percentage: percentage(*count, total),
        })
        .collect();

    FeedbackAnalytics {
        total,
        average_rating: average_rating(feedbacks),
        rating_distribution,
        positive_share: percentage(categories.positive, total),
        category_distribution: categories,
        event_rankings: rollups,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: TicketStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    pub critical_open: usize,
    pub by_status: Vec<StatusCount>,
    pub by_priority: Vec<PriorityCount>,
}

pub fn summarize_tickets(tickets: &[Ticket]) -> TicketSummary {
    let by_status = TicketStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: tickets.iter().filter(|ticket| ticket.status == *status).count(),
        })
        .collect();
    let by_priority = Priority::ALL
        .iter()
        .map(|priority| PriorityCount {
            priority: *priority,
            count: tickets.iter().filter(|ticket| ticket.priority == *priority).count(),
        })
        .collect();
    let unresolved = tickets.iter().filter(|ticket| !ticket.status.is_resolved());
    TicketSummary {
        total: tickets.len(),
        open: unresolved.clone().count(),
        critical_open: unresolved
            .filter(|ticket| ticket.priority == Priority::Critical)
            .count(),
        by_status,
        by_priority,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::value_objects::FeedbackSource;

    fn feedback(id: &str, event_id: &str, rating: i64, category: FeedbackCategory) -> Feedback {
        Feedback {
            id: id.to_string(),
            event_id: EventId::from(event_id),
            event_title: format!("Event {}", event_id),
            rating: Rating::new(rating).expect("rating"),
            body: "text".to_string(),
            source: FeedbackSource::Text,
            category,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn empty_collection_yields_zeroes_not_nan() {
        let analytics = compute_feedback_analytics(&[]);
        assert_eq!(analytics.total, 0);
        assert_eq!(analytics.average_rating, 0.0);
        assert_eq!(analytics.positive_share, 0.0);
        assert_eq!(analytics.rating_distribution.len(), 5);
        assert!(analytics
            .rating_distribution
            .iter()
            .all(|bucket| bucket.count == 0 && bucket.percentage == 0.0));
        assert!(analytics.event_rankings.is_empty());
    }

    #[test]
    fn counts_sum_to_total() {
        let feedbacks = vec![
            feedback("1", "a", 5, FeedbackCategory::Positive),
            feedback("2", "a", 2, FeedbackCategory::Negative),
            feedback("3", "b", 4, FeedbackCategory::Suggestion),
            feedback("4", "c", 4, FeedbackCategory::Neutral),
        ];
        let analytics = compute_feedback_analytics(&feedbacks);
        let bucket_total: usize = analytics.rating_distribution.iter().map(|b| b.count).sum();
        assert_eq!(bucket_total, 4);
        assert_eq!(analytics.category_distribution.total(), 4);
        assert_eq!(analytics.average_rating, 3.75);
        assert_eq!(analytics.rating_distribution[3].percentage, 50.0);
        assert_eq!(analytics.positive_share, 25.0);
    }

    #[test]
    fn incremental_and_batch_rollups_agree() {
        let ratings = [Rating::new(5).expect("5"), Rating::new(3).expect("3")];
        let mut incremental = EventRollup::new(EventId::from("yoga"), "Yoga".to_string());
        for rating in ratings {
            incremental.record(rating);
        }
        let batch = EventRollup::from_ratings(EventId::from("yoga"), "Yoga".to_string(), &ratings);
        assert_eq!(incremental.average_rating, 4.0);
        assert_eq!(incremental.feedback_count, 2);
        assert_eq!(incremental, batch);
    }

    fn ratings(values: &[i64]) -> Vec<Rating> {
        values
            .iter()
            .map(|value| Rating::new(*value).expect("rating"))
            .collect()
    }

    #[test]
    fn long_rating_runs_do_not_drift_from_batch() {
        let ratings = ratings(&[5, 3, 4, 2, 5, 5, 5, 2]);
        let mut incremental = EventRollup::new(EventId::from("b"), "B".to_string());
        for rating in &ratings {
            incremental.record(*rating);
        }
        let batch = EventRollup::from_ratings(EventId::from("b"), "B".to_string(), &ratings);
        assert_eq!(incremental.average_rating, 3.875);
        assert_eq!(incremental, batch);
    }

    #[test]
    fn equal_averages_rank_by_event_id() {
        let mut feedbacks = Vec::new();
        for (index, rating) in [2, 2, 3, 4, 5, 5, 5, 5].into_iter().enumerate() {
            feedbacks.push(feedback(&format!("a{}", index), "a", rating, FeedbackCategory::Neutral));
        }
        for (index, rating) in [5, 3, 4, 2, 5, 5, 5, 2].into_iter().enumerate() {
            feedbacks.push(feedback(&format!("b{}", index), "b", rating, FeedbackCategory::Neutral));
        }
        let analytics = compute_feedback_analytics(&feedbacks);
        let order: Vec<(&str, f64)> = analytics
            .event_rankings
            .iter()
            .map(|rollup| (rollup.event_id.as_str(), rollup.average_rating))
            .collect();
        assert_eq!(order, vec![("a", 3.875), ("b", 3.875)]);
    }

    #[test]
    fn exact_four_is_excellent_after_incremental_updates() {
        let mut rollup = EventRollup::new(EventId::from("a"), "A".to_string());
        for rating in ratings(&[5, 3, 4, 4, 5, 3]) {
            rollup.record(rating);
        }
        assert_eq!(rollup.average_rating, 4.0);
        assert_eq!(rollup.standing, Standing::Excellent);
    }

    #[test]
    fn rankings_sort_by_average_then_event_id() {
        let feedbacks = vec![
            feedback("1", "b", 4, FeedbackCategory::Positive),
            feedback("2", "c", 5, FeedbackCategory::Positive),
            feedback("3", "a", 4, FeedbackCategory::Positive),
            feedback("4", "c", 3, FeedbackCategory::Neutral),
            feedback("5", "d", 2, FeedbackCategory::Negative),
        ];
        let analytics = compute_feedback_analytics(&feedbacks);
        let order: Vec<&str> = analytics
            .event_rankings
            .iter()
            .map(|rollup| rollup.event_id.as_str())
            .collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert_eq!(analytics.event_rankings[2].average_rating, 4.0);
        assert_eq!(analytics.event_rankings[3].standing, Standing::NeedsImprovement);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let feedbacks = vec![
            feedback("1", "a", 5, FeedbackCategory::Positive),
            feedback("2", "b", 1, FeedbackCategory::Negative),
        ];
        assert_eq!(
            compute_feedback_analytics(&feedbacks),
            compute_feedback_analytics(&feedbacks)
        );
    }
}
