//! Ordered keyword rule tables used to auto-tag free text.
//!
//! A table is evaluated top to bottom and the first rule with any keyword
//! contained in the lower-cased text wins. Matching is plain substring
//! containment, so a short keyword such as `"ac"` also fires inside `"back"`.

use serde::{Deserialize, Serialize};

use crate::value_objects::{FeedbackCategory, Priority, TicketCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule<L> {
    pub label: L,
    pub keywords: Vec<String>,
}

impl<L> ClassificationRule<L> {
    pub fn new(label: L, keywords: &[&str]) -> Self {
        Self {
            label,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
    }

    fn normalized(self) -> Self {
        let keywords = self
            .keywords
            .into_iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self {
            label: self.label,
            keywords,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ClassificationRule<L>>", into = "Vec<ClassificationRule<L>>")]
#[serde(bound(
    serialize = "L: Serialize + Clone",
    deserialize = "L: Deserialize<'de>"
))]
pub struct RuleTable<L> {
    rules: Vec<ClassificationRule<L>>,
}

impl<L> RuleTable<L> {
    pub fn new(rules: Vec<ClassificationRule<L>>) -> Self {
        Self {
            rules: rules.into_iter().map(ClassificationRule::normalized).collect(),
        }
    }

    pub fn rules(&self) -> &[ClassificationRule<L>] {
        &self.rules
    }

    pub fn first_match(&self, text: &str) -> Option<&L> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| &rule.label)
    }
}

impl<L: Clone> RuleTable<L> {
    pub fn classify(&self, text: &str, default: L) -> L {
        self.first_match(text).cloned().unwrap_or(default)
    }
}

impl<L> From<Vec<ClassificationRule<L>>> for RuleTable<L> {
    fn from(rules: Vec<ClassificationRule<L>>) -> Self {
        RuleTable::new(rules)
    }
}

impl<L> From<RuleTable<L>> for Vec<ClassificationRule<L>> {
    fn from(table: RuleTable<L>) -> Self {
        table.rules
    }
}

pub fn builtin_priority_rules() -> RuleTable<Priority> {
    RuleTable::new(vec![
        ClassificationRule::new(
            Priority::Critical,
            &[
                "emergency",
                "urgent",
                "fire",
                "smoke",
                "gas leak",
                "flood",
                "injury",
                "medical",
                "break-in",
                "security threat",
                "electric shock",
            ],
        ),
        ClassificationRule::new(
            Priority::High,
            &[
                "ac",
                "air conditioning",
                "heating",
                "elevator",
                "lift",
                "water leak",
                "power outage",
                "plumbing",
                "leak",
            ],
        ),
    ])
}

pub fn builtin_category_rules() -> RuleTable<TicketCategory> {
    RuleTable::new(vec![
        ClassificationRule::new(
            TicketCategory::NoiseComplaint,
            &["noise", "neighbor", "music", "loud"],
        ),
        ClassificationRule::new(
            TicketCategory::Security,
            &["security", "theft", "intruder", "break-in"],
        ),
    ])
}

pub fn builtin_sentiment_rules() -> RuleTable<FeedbackCategory> {
    RuleTable::new(vec![
        ClassificationRule::new(FeedbackCategory::Positive, &["great", "excellent", "love"]),
        ClassificationRule::new(FeedbackCategory::Negative, &["bad", "poor", "disappointing"]),
        ClassificationRule::new(FeedbackCategory::Suggestion, &["suggest", "idea", "could"]),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketClassification {
    pub priority: Priority,
    pub category: TicketCategory,
    pub inferred_priority: Option<Priority>,
}

/// The full rule set. Any table missing from a rules file falls back to the built-in one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRules {
    #[serde(default = "builtin_priority_rules")]
    pub priority: RuleTable<Priority>,
    #[serde(default = "builtin_category_rules")]
    pub category: RuleTable<TicketCategory>,
    #[serde(default = "builtin_sentiment_rules")]
    pub sentiment: RuleTable<FeedbackCategory>,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            priority: builtin_priority_rules(),
            category: builtin_category_rules(),
            sentiment: builtin_sentiment_rules(),
        }
    }
}

impl ClassificationRules {
    pub const DEFAULT_PRIORITY: Priority = Priority::Medium;

    /// Inferred priority can raise a requested one but never lower it.
    /// An explicitly requested category always wins over keyword inference.
    pub fn classify_ticket(
        &self,
        text: &str,
        requested_priority: Option<Priority>,
        requested_category: Option<TicketCategory>,
    ) -> TicketClassification {
        let inferred_priority = self.priority.first_match(text).copied();
        let priority = match (requested_priority, inferred_priority) {
            (Some(requested), Some(inferred)) => requested.max(inferred),
            (Some(requested), None) => requested,
            (None, Some(inferred)) => inferred,
            (None, None) => Self::DEFAULT_PRIORITY,
        };
        let category = requested_category
            .unwrap_or_else(|| self.category.classify(text, TicketCategory::Maintenance));
        TicketClassification {
            priority,
            category,
            inferred_priority,
        }
    }

    pub fn classify_feedback(&self, text: &str, default: FeedbackCategory) -> FeedbackCategory {
        self.sentiment.classify(text, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_fire_is_critical() {
        let rules = ClassificationRules::default();
        let result = rules.classify_ticket("This is an emergency fire", None, None);
        assert_eq!(result.priority, Priority::Critical);
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = ClassificationRules::default();
        // both a critical and a high keyword are present
        let result = rules.classify_ticket("Elevator flood in the basement", None, None);
        assert_eq!(result.priority, Priority::Critical);
    }

    #[test]
    fn elevator_stuck_is_high_maintenance() {
        let rules = ClassificationRules::default();
        let result = rules.classify_ticket("elevator stuck", None, None);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.category, TicketCategory::Maintenance);
    }

    #[test]
    fn loud_music_is_noise_complaint() {
        let rules = ClassificationRules::default();
        let result = rules.classify_ticket("neighbor's music too loud", None, None);
        assert_eq!(result.category, TicketCategory::NoiseComplaint);
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let rules = ClassificationRules::default();
        assert_eq!(
            rules.priority.first_match("The AIR CONDITIONING died"),
            Some(&Priority::High)
        );
        // "ac" sits inside "back"
        assert_eq!(
            rules.priority.first_match("the back gate squeaks"),
            Some(&Priority::High)
        );
        assert_eq!(rules.priority.first_match("the gate squeaks"), None);
    }

    #[test]
    fn inference_never_downgrades_requested_priority() {
        let rules = ClassificationRules::default();
        let result = rules.classify_ticket("elevator stuck", Some(Priority::Critical), None);
        assert_eq!(result.priority, Priority::Critical);
        assert_eq!(result.inferred_priority, Some(Priority::High));

        let raised = rules.classify_ticket("gas leak on floor 3", Some(Priority::Low), None);
        assert_eq!(raised.priority, Priority::Critical);
    }

    #[test]
    fn requested_category_is_kept() {
        let rules = ClassificationRules::default();
        let result = rules.classify_ticket(
            "loud grinding from the pump",
            None,
            Some(TicketCategory::Plumbing),
        );
        assert_eq!(result.category, TicketCategory::Plumbing);
    }

    #[test]
    fn sentiment_uses_first_match_then_default() {
        let rules = ClassificationRules::default();
        assert_eq!(
            rules.classify_feedback(
                "Great fun with neighbors. Could use more variety in board games.",
                FeedbackCategory::Neutral
            ),
            FeedbackCategory::Positive
        );
        assert_eq!(
            rules.classify_feedback("Poor sound system", FeedbackCategory::Neutral),
            FeedbackCategory::Negative
        );
        assert_eq!(
            rules.classify_feedback("I suggest an earlier start", FeedbackCategory::Neutral),
            FeedbackCategory::Suggestion
        );
        assert_eq!(
            rules.classify_feedback("It happened.", FeedbackCategory::Neutral),
            FeedbackCategory::Neutral
        );
    }

    #[test]
    fn rules_document_overrides_only_listed_tables() {
        let document = serde_json::json!({
            "priority": [{"label": "P1", "keywords": ["  Sparks ", ""]}]
        });
        let rules: ClassificationRules = serde_json::from_value(document).expect("rules");
        assert_eq!(rules.priority.rules().len(), 1);
        assert_eq!(rules.priority.rules()[0].keywords, vec!["sparks".to_string()]);
        assert_eq!(rules.category, builtin_category_rules());
        assert_eq!(
            rules.priority.first_match("SPARKS from the socket"),
            Some(&Priority::Critical)
        );
    }
}
