use chrono::{DateTime, SubsecRound, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct JournalRecord {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl JournalRecord {
    pub fn new(content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: super::generate_id(),
            content,
            created_at: created_at.trunc_subsecs(6),
        }
    }
}
