//! Search and status filtering over record lists
//!
//! Filtering is a pure, stable pass: the input is never mutated and the
//! output keeps the input order.

use serde::{Deserialize, Serialize};

use crate::types::{DomainRecord, DomainStatus, TaskRecord, TaskStatus};

/// Status filter: either every record, or exactly one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

// Manual impl: `All` needs no `S: Default`
impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    /// Check if a status passes this filter
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Advance to the next filter: All → first status → ... → last status → All
    pub fn cycle(self, statuses: &[S]) -> Self {
        match self {
            StatusFilter::All => statuses
                .first()
                .copied()
                .map_or(StatusFilter::All, StatusFilter::Only),
            StatusFilter::Only(current) => {
                match statuses.iter().position(|s| *s == current) {
                    Some(idx) if idx + 1 < statuses.len() => StatusFilter::Only(statuses[idx + 1]),
                    _ => StatusFilter::All,
                }
            }
        }
    }
}

/// Search text plus status filter for one filterable list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery<S> {
    pub text: String,
    pub status_filter: StatusFilter<S>,
}

impl<S> Default for FilterQuery<S> {
    fn default() -> Self {
        Self {
            text: String::new(),
            status_filter: StatusFilter::All,
        }
    }
}

impl<S: Copy + PartialEq> FilterQuery<S> {
    pub fn new(text: impl Into<String>, status_filter: StatusFilter<S>) -> Self {
        Self {
            text: text.into(),
            status_filter,
        }
    }

    /// Filter records that know their own search text and status
    pub fn apply<T>(&self, records: &[T]) -> Vec<T>
    where
        T: Searchable<Status = S> + Clone,
    {
        filter(records, self, |r| r.search_text(), |r| r.status())
    }
}

/// Records that can be searched and filtered by status
pub trait Searchable {
    type Status: Copy + PartialEq;

    /// Field matched against the query text
    fn search_text(&self) -> &str;

    /// Field matched against the status filter
    fn status(&self) -> Self::Status;
}

impl Searchable for DomainRecord {
    type Status = DomainStatus;

    fn search_text(&self) -> &str {
        &self.url
    }

    fn status(&self) -> DomainStatus {
        self.status
    }
}

impl Searchable for TaskRecord {
    type Status = TaskStatus;

    fn search_text(&self) -> &str {
        &self.id
    }

    fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Filter `records` by a case-insensitive substring match on `match_field`
/// AND an exact match of `status_field` against the query's status filter.
pub fn filter<T, S, M, F>(
    records: &[T],
    query: &FilterQuery<S>,
    match_field: M,
    status_field: F,
) -> Vec<T>
where
    T: Clone,
    S: Copy + PartialEq,
    M: Fn(&T) -> &str,
    F: Fn(&T) -> S,
{
    let needle = query.text.to_lowercase();

    records
        .iter()
        .filter(|record| {
            (needle.is_empty() || match_field(record).to_lowercase().contains(&needle))
                && query.status_filter.matches(status_field(record))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Protocol;
    use chrono::NaiveDate;

    fn domain(id: u64, url: &str, status: DomainStatus) -> DomainRecord {
        DomainRecord {
            id,
            url: url.to_string(),
            protocol: Protocol::Https,
            status,
            ssl_enabled: true,
            added_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        }
    }

    fn sample() -> Vec<DomainRecord> {
        vec![
            domain(1, "finance.xpectro.com", DomainStatus::Secured),
            domain(2, "legacy.xpectro-internal.net", DomainStatus::Review),
            domain(3, "Portal.Company.com", DomainStatus::Pending),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = sample();
        let out = FilterQuery::default().apply(&records);
        assert_eq!(out, records);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let records = sample();
        let out = FilterQuery::new("PORTAL", StatusFilter::All).apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 3);
    }

    #[test]
    fn test_legacy_query_returns_second_record() {
        let records = sample()[..2].to_vec();
        let out = FilterQuery::new("legacy", StatusFilter::All).apply(&records);
        assert_eq!(out, vec![records[1].clone()]);
    }

    #[test]
    fn test_status_and_text_are_anded() {
        let records = sample();
        let query = FilterQuery::new("xpectro", StatusFilter::Only(DomainStatus::Secured));
        let out = query.apply(&records);
        assert_eq!(out.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);

        let query = FilterQuery::new("portal", StatusFilter::Only(DomainStatus::Secured));
        assert!(query.apply(&records).is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = sample();
        let out = FilterQuery::new(".", StatusFilter::All).apply(&records);
        assert_eq!(out.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let query = FilterQuery::new("xpectro", StatusFilter::Only(DomainStatus::Review));
        let once = query.apply(&records);
        let twice = query.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_with_explicit_accessors() {
        let records = sample();
        let query = FilterQuery::new("2", StatusFilter::<u64>::All);
        let out = filter(&records, &query, |d| d.url.as_str(), |d| d.id);
        assert!(out.is_empty());

        let query = FilterQuery::new("", StatusFilter::Only(2u64));
        let out = filter(&records, &query, |d| d.url.as_str(), |d| d.id);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "legacy.xpectro-internal.net");
    }

    #[test]
    fn test_tasks_match_on_id() {
        let tasks = vec![
            TaskRecord {
                id: "TSK-9921".into(),
                status: TaskStatus::HighRisk,
                description: "Suspicious pattern".into(),
                timestamp: "2 mins ago".into(),
            },
            TaskRecord {
                id: "TSK-9920".into(),
                status: TaskStatus::Safe,
                description: "Routine scan complete".into(),
                timestamp: "15 mins ago".into(),
            },
        ];
        let out = FilterQuery::new("tsk-9920", StatusFilter::All).apply(&tasks);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].status, TaskStatus::Safe);

        // Description is not part of the search text
        assert!(FilterQuery::new("routine", StatusFilter::All)
            .apply(&tasks)
            .is_empty());
    }

    #[test]
    fn test_status_filter_cycle() {
        let all = DomainStatus::ALL;
        let f = StatusFilter::All.cycle(&all);
        assert_eq!(f, StatusFilter::Only(DomainStatus::Secured));
        let f = f.cycle(&all).cycle(&all);
        assert_eq!(f, StatusFilter::Only(DomainStatus::Pending));
        assert_eq!(f.cycle(&all), StatusFilter::All);
    }
}
