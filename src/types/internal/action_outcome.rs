use super::audit_intent::AuditIntent;

/// Result of a mutation applied inside a write transaction
///
/// A mutation cannot produce a value without also describing itself: the audit
/// intent is recorded on the same transaction before commit.
pub struct ActionOutcome<T> {
    pub value: T,
    pub audit: AuditIntent,
}

impl<T> ActionOutcome<T> {
    pub fn new(value: T, audit: AuditIntent) -> Self {
        Self { value, audit }
    }
}
