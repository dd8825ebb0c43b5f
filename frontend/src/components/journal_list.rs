use shared::JournalEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JournalListProps {
    pub journals: Vec<JournalEntry>,
}

/// "March 4, 2026" from an RFC 3339 timestamp; unparseable input is shown as-is
fn entry_date(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

#[function_component(JournalList)]
pub fn journal_list(props: &JournalListProps) -> Html {
    if props.journals.is_empty() {
        return html! { <p class="muted">{ "No journal entries yet." }</p> };
    }

    html! {
        <div>
            { for props.journals.iter().map(|journal| html! {
                <div class="card" key={journal.id.clone()}>
                    <div class="muted">{ entry_date(&journal.created_at) }</div>
                    <div class="entry">{ journal.content.clone() }</div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_date() {
        assert_eq!(entry_date("2026-03-04T10:00:00.000000Z"), "March 4, 2026");
        assert_eq!(entry_date("yesterday"), "yesterday");
    }
}
