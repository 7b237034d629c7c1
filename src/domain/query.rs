use super::payment::{PaymentRecord, PaymentStatus};
use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column a payment list can be ordered by.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Customer,
    Date,
    Method,
    Amount,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        Self::Id,
        Self::Customer,
        Self::Date,
        Self::Method,
        Self::Amount,
        Self::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Customer => "customer",
            Self::Date => "date",
            Self::Method => "method",
            Self::Amount => "amount",
            Self::Status => "status",
        }
    }

    /// Natural ordering of the field this key names.
    ///
    /// Strings (and ISO-8601 dates) compare lexicographically, amounts
    /// numerically, statuses by their label.
    fn compare(&self, a: &PaymentRecord, b: &PaymentRecord) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Customer => a.customer.cmp(&b.customer),
            Self::Date => a.date.cmp(&b.date),
            Self::Method => a.method.cmp(&b.method),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaymentError::ValidationError(format!("Unknown sort key: {s}")))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column and direction.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest payments first.
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Returns the config that results from selecting `key` as sort column.
    ///
    /// Selecting the active key while ascending flips to descending; anything
    /// else (a new key, or the active key while descending) sorts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }

    fn compare(&self, a: &PaymentRecord, b: &PaymentRecord) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Status narrowing applied on top of the free-text search.
///
/// Written as `all` or the status label; `FromStr` reads either back.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad("all"),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl From<PaymentStatus> for StatusFilter {
    fn from(status: PaymentStatus) -> Self {
        Self::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<PaymentStatus>().map(Self::Only)
        }
    }
}

/// Free-text search plus status filter.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct QueryState {
    pub search_term: String,
    pub status_filter: StatusFilter,
}

impl QueryState {
    pub fn new(search_term: impl Into<String>, status_filter: StatusFilter) -> Self {
        Self {
            search_term: search_term.into(),
            status_filter,
        }
    }

    /// Case-insensitive substring match on id, customer or method, combined
    /// with the status filter. An empty search term matches every record.
    pub fn matches(&self, record: &PaymentRecord) -> bool {
        self.status_filter.matches(record.status) && self.matches_search(record)
    }

    fn matches_search(&self, record: &PaymentRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        [&record.id, &record.customer, &record.method]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Derives the visible list from the loaded records.
///
/// Filters first, then applies a stable sort; ties keep their input order in
/// both directions because the comparator is reversed, not the output.
pub fn apply(records: &[PaymentRecord], sort: &SortConfig, query: &QueryState) -> Vec<PaymentRecord> {
    let mut visible = filter(records, query);
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// Records matching `query`, in input order.
pub fn filter(records: &[PaymentRecord], query: &QueryState) -> Vec<PaymentRecord> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}
