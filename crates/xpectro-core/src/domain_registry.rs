//! In-memory registry of monitored domains
//!
//! Records are kept in insertion order. Removal never re-sorts the rest.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::filter::FilterQuery;
use crate::types::{DomainRecord, DomainStatus, Protocol};

/// Ordered, append/remove collection of [`DomainRecord`]s
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    records: Vec<DomainRecord>,
    /// Next id to hand out. Only ever increases, so ids stay unique even
    /// after removals.
    next_id: u64,
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a registry pre-populated with `records`
    pub fn with_records(records: Vec<DomainRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        Self { records, next_id }
    }

    /// Add a domain dated today. Returns `None` for a blank url.
    pub fn add(&mut self, url: &str, protocol: Protocol) -> Option<DomainRecord> {
        self.add_on(url, protocol, Local::now().date_naive())
    }

    /// Add a domain with an explicit `added_date`. Returns `None` for a blank url.
    pub fn add_on(
        &mut self,
        url: &str,
        protocol: Protocol,
        added_date: NaiveDate,
    ) -> Option<DomainRecord> {
        let url = url.trim();
        if url.is_empty() {
            debug!("Ignoring add_domain with blank url");
            return None;
        }

        let record = DomainRecord {
            id: self.next_id,
            url: url.to_string(),
            protocol,
            status: DomainStatus::Pending,
            ssl_enabled: protocol == Protocol::Https,
            added_date,
        };
        self.next_id += 1;
        self.records.push(record.clone());

        info!("Added domain {} ({}) as #{}", record.url, protocol.as_str(), record.id);
        Some(record)
    }

    /// Remove a domain by id. Returns false when no record has that id.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(idx) => {
                let removed = self.records.remove(idx);
                info!("Removed domain {} (#{})", removed.url, removed.id);
                true
            }
            None => {
                debug!("remove_domain: no domain with id {}", id);
                false
            }
        }
    }

    /// All records in insertion order
    pub fn all(&self) -> &[DomainRecord] {
        &self.records
    }

    /// Records matching `query`, in insertion order
    pub fn filtered(&self, query: &FilterQuery<DomainStatus>) -> Vec<DomainRecord> {
        query.apply(&self.records)
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of records with SSL enabled
    pub fn ssl_enabled_count(&self) -> usize {
        self.records.iter().filter(|r| r.ssl_enabled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
