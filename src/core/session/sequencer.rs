use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed to a request when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn number(&self) -> u64 {
        self.0
    }
}

/// Orders overlapping requests that feed the same display slot.
///
/// Requests are not cancelled. Instead each one takes a ticket when it
/// starts and asks to commit when it finishes; a request finishing after a
/// newer one has already committed is stale and must not be shown.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    resolved: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Record `ticket` as resolved. Returns `false` when a newer ticket
    /// already resolved, i.e. the outcome is stale.
    pub fn commit(&self, ticket: RequestTicket) -> bool {
        let previous = self.resolved.fetch_max(ticket.0, Ordering::SeqCst);
        ticket.0 >= previous
    }

    /// Highest ticket that has committed so far, 0 if none.
    pub fn last_resolved(&self) -> u64 {
        self.resolved.load(Ordering::SeqCst)
    }

    pub fn last_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let seq = RequestSequencer::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert_eq!(seq.last_issued(), 2);
    }

    #[test]
    fn test_in_order_completion_commits_both() {
        let seq = RequestSequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.commit(first));
        assert!(seq.commit(second));
        assert_eq!(seq.last_resolved(), second.number());
    }

    #[test]
    fn test_out_of_order_completion_discards_older() {
        let seq = RequestSequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.commit(second));
        assert!(!seq.commit(first));
        assert_eq!(seq.last_resolved(), second.number());
    }
}
