/// What a mutation wants written to the audit trail
///
/// Actor, tenant and timestamp are filled in by the write coordinator from the
/// request's resolved scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditIntent {
    pub entity_type: &'static str,
    pub description: String,
}

impl AuditIntent {
    pub fn new(entity_type: &'static str, description: impl Into<String>) -> Self {
        Self {
            entity_type,
            description: description.into(),
        }
    }
}
