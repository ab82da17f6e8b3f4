/// Rejected status transition, e.g. paying a fee that is already paid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} a record with status '{from}'")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: &'static str,
}

impl TransitionError {
    pub fn new(action: &'static str, from: &'static str) -> Self {
        Self { action, from }
    }
}
