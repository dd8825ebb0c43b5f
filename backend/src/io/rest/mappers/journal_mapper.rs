use shared::{JournalEntry, JournalListResponse};

use crate::domain::models::{format_timestamp, JournalRecord};

/// Mapper from domain journal records to shared JournalEntry DTOs.
pub struct JournalMapper;

impl JournalMapper {
    pub fn to_dto(domain: JournalRecord) -> JournalEntry {
        JournalEntry {
            created_at: format_timestamp(&domain.created_at),
            id: domain.id,
            content: domain.content,
        }
    }

    pub fn to_list_dto(domain_journals: Vec<JournalRecord>) -> JournalListResponse {
        JournalListResponse {
            journals: domain_journals.into_iter().map(Self::to_dto).collect(),
        }
    }
}
