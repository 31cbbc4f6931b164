// Voice command entities

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserProfile;

/// Subscription key for the command hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    CheckTicketStatus,
    CreateComplaint,
    SuggestEvents,
    CollectFeedback,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::CheckTicketStatus => "check_ticket_status",
            CommandKind::CreateComplaint => "create_complaint",
            CommandKind::SuggestEvents => "suggest_events",
            CommandKind::CollectFeedback => "collect_feedback",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "params", rename_all = "snake_case")]
pub enum VoiceCommand {
    CheckTicketStatus {
        #[serde(rename = "ticketId")]
        ticket_id: Option<String>,
    },
    CreateComplaint {
        description: String,
    },
    SuggestEvents,
    CollectFeedback {
        feedback: String,
    },
}

impl VoiceCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            VoiceCommand::CheckTicketStatus { .. } => CommandKind::CheckTicketStatus,
            VoiceCommand::CreateComplaint { .. } => CommandKind::CreateComplaint,
            VoiceCommand::SuggestEvents => CommandKind::SuggestEvents,
            VoiceCommand::CollectFeedback { .. } => CommandKind::CollectFeedback,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// A routed command as delivered to hub subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedCommand {
    pub command: VoiceCommand,
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<UserProfile>,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptRequest {
    pub transcript: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceOutcome {
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<VoiceCommand>,
    pub delivered_to: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAudio {
    pub audio_base64: String,
    pub format: String,
}
