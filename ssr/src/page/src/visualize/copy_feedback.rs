use consts::limits::COPY_CONFIRMATION_RESET;
use web_time::Duration;

/// Copy button state for a tracking number shown with a result.
///
/// Each successful copy hands out a ticket for the reset timer. Only the
/// ticket of the latest copy can revert the button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    text: String,
    confirmed: bool,
    ticket: u64,
}

impl CopyFeedback {
    pub const RESET_AFTER: Duration = COPY_CONFIRMATION_RESET;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confirmed: false,
            ticket: 0,
        }
    }

    /// Exact string handed to the clipboard.
    pub fn clipboard_text(&self) -> &str {
        &self.text
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn confirm(&mut self) -> u64 {
        self.ticket += 1;
        self.confirmed = true;
        self.ticket
    }

    /// Reverts to the idle state. Returns false when a newer copy owns the
    /// confirmation.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.confirmed = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_the_tracking_number_verbatim() {
        let feedback = CopyFeedback::new("SX-UG-1988-KLA");
        assert_eq!(feedback.clipboard_text(), "SX-UG-1988-KLA");
        assert!(!feedback.is_confirmed());
    }

    #[test]
    fn confirmation_reverts_when_its_timer_fires() {
        let mut feedback = CopyFeedback::new("SX-UG-1988-KLA");
        let ticket = feedback.confirm();
        assert!(feedback.is_confirmed());

        assert_eq!(CopyFeedback::RESET_AFTER, Duration::from_millis(2000));
        assert!(feedback.expire(ticket));
        assert!(!feedback.is_confirmed());
        assert_eq!(feedback.clipboard_text(), "SX-UG-1988-KLA");
    }

    #[test]
    fn earlier_timer_does_not_cut_a_later_confirmation_short() {
        let mut feedback = CopyFeedback::new("SX-UG-1988-KLA");
        let first = feedback.confirm();
        let second = feedback.confirm();

        assert!(!feedback.expire(first));
        assert!(feedback.is_confirmed());
        assert!(feedback.expire(second));
        assert!(!feedback.is_confirmed());
    }
}
