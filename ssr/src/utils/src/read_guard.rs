/// Sequences overlapping reads into one upload slot.
///
/// Every selection takes a ticket; only the newest ticket may write its
/// result back, so a slow earlier read can never clobber a later one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadGuard {
    latest: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket(u64);

impl ReadGuard {
    pub fn begin(&mut self) -> ReadTicket {
        self.latest += 1;
        ReadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        self.latest == ticket.0
    }

    /// Drops any read still in flight, e.g. when the slot is cleared.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
