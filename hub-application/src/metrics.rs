use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    tickets_created: AtomicU64,
    feedback_submitted: AtomicU64,
    utterances_routed: AtomicU64,
    utterances_dropped: AtomicU64,
    transcription_errors: AtomicU64,
    commands_delivered: AtomicU64,
}

impl Metrics {
    pub fn record_ticket_created(&self) {
        self.tickets_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_feedback(&self) {
        self.feedback_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_routed(&self, delivered_to: usize) {
        self.utterances_routed.fetch_add(1, Ordering::Relaxed);
        self.commands_delivered
            .fetch_add(delivered_to as u64, Ordering::Relaxed);
    }

    pub fn record_dropped(&self) {
        self.utterances_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_transcription_error(&self) {
        self.transcription_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn tickets_created(&self) -> u64 {
        self.tickets_created.load(Ordering::Relaxed)
    }

    pub fn transcription_errors(&self) -> u64 {
        self.transcription_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let tickets = self.tickets_created.load(Ordering::Relaxed);
        let feedback = self.feedback_submitted.load(Ordering::Relaxed);
        let routed = self.utterances_routed.load(Ordering::Relaxed);
        let dropped = self.utterances_dropped.load(Ordering::Relaxed);
        let transcription_errors = self.transcription_errors.load(Ordering::Relaxed);
        let delivered = self.commands_delivered.load(Ordering::Relaxed);

        format!(
            "# TYPE resident_hub_tickets_created_total counter\n\
resident_hub_tickets_created_total {}\n\
# TYPE resident_hub_feedback_submitted_total counter\n\
resident_hub_feedback_submitted_total {}\n\
# TYPE resident_hub_utterances_routed_total counter\n\
resident_hub_utterances_routed_total {}\n\
# TYPE resident_hub_utterances_dropped_total counter\n\
resident_hub_utterances_dropped_total {}\n\
# TYPE resident_hub_transcription_errors_total counter\n\
resident_hub_transcription_errors_total {}\n\
# TYPE resident_hub_commands_delivered_total counter\n\
resident_hub_commands_delivered_total {}\n",
            tickets, feedback, routed, dropped, transcription_errors, delivered
        )
    }
}
