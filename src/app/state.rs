use std::time::Instant;

/// Pending start/stop action awaiting confirmation.
pub struct PendingAction {
    pub description: String,
    pub kind: PendingActionKind,
    pub expires: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingActionKind {
    StartBot,
    StopBot,
}
