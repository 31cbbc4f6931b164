//! Maps a transcribed utterance to a voice command.

use crate::entities::VoiceCommand;
use crate::utils::contains_any;

const COMPLAINT_WORDS: [&str; 3] = ["complaint", "issue", "problem"];

/// Returns `None` when the utterance matches no command.
pub fn route_utterance(text: &str) -> Option<VoiceCommand> {
    let lowered = text.to_lowercase();
    if lowered.contains("ticket") && lowered.contains("status") {
        return Some(VoiceCommand::CheckTicketStatus {
            ticket_id: first_number(&lowered),
        });
    }
    if contains_any(&lowered, &COMPLAINT_WORDS) {
        return Some(VoiceCommand::CreateComplaint {
            description: text.trim().to_string(),
        });
    }
    if lowered.contains("event") && lowered.contains("suggest") {
        return Some(VoiceCommand::SuggestEvents);
    }
    if lowered.contains("feedback") {
        return Some(VoiceCommand::CollectFeedback {
            feedback: text.trim().to_string(),
        });
    }
    None
}

/// First run of ASCII digits anywhere in the text.
pub fn first_number(text: &str) -> Option<String> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_question_extracts_ticket_id() {
        assert_eq!(
            route_utterance("what's the status of ticket 2035"),
            Some(VoiceCommand::CheckTicketStatus {
                ticket_id: Some("2035".to_string())
            })
        );
    }

    #[test]
    fn status_question_without_number_has_no_id() {
        assert_eq!(
            route_utterance("Ticket status please"),
            Some(VoiceCommand::CheckTicketStatus { ticket_id: None })
        );
    }

    #[test]
    fn status_check_takes_precedence_over_complaint() {
        assert_eq!(
            route_utterance("status of my complaint ticket 17 and 18"),
            Some(VoiceCommand::CheckTicketStatus {
                ticket_id: Some("17".to_string())
            })
        );
    }

    #[test]
    fn complaint_keeps_original_text() {
        assert_eq!(
            route_utterance("I have a complaint about my AC"),
            Some(VoiceCommand::CreateComplaint {
                description: "I have a complaint about my AC".to_string()
            })
        );
    }

    #[test]
    fn event_suggestion_and_feedback_are_routed() {
        assert_eq!(
            route_utterance("Suggest some community events"),
            Some(VoiceCommand::SuggestEvents)
        );
        assert_eq!(
            route_utterance("I want to give feedback about the last event"),
            Some(VoiceCommand::CollectFeedback {
                feedback: "I want to give feedback about the last event".to_string()
            })
        );
    }

    #[test]
    fn unrelated_utterance_is_dropped() {
        assert_eq!(route_utterance("tell me a joke"), None);
    }
}
