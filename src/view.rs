//! Filtered and sorted views over the record list
//!
//! Everything here is a pure function of the records plus the current
//! search query, filters and sort configuration.

use crate::record::{Department, Record};
use crate::utils::fuzzy::{is_fuzzy_match, normalize_name};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Department and year filters; `None` passes every record through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub dept: Option<Department>,
    /// Compared against the record year's string form
    pub year: Option<String>,
}

/// Field the table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Cgpa,
    Name,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cgpa" | "score" => Ok(SortField::Cgpa),
            "name" => Ok(SortField::Name),
            other => Err(format!("cannot sort by '{}' (use name or cgpa)", other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Cgpa => f.write_str("cgpa"),
            SortField::Name => f.write_str("name"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            other => Err(format!("unknown direction '{}' (use asc or desc)", other)),
        }
    }
}

/// Current sort; `field == None` keeps insertion order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub field: Option<SortField>,
    pub direction: Direction,
}

impl SortConfig {
    pub fn by(field: SortField, direction: Direction) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Same field flips direction, a new field starts ascending
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == Some(field) {
            Self::by(field, self.direction.flipped())
        } else {
            Self::by(field, Direction::Asc)
        }
    }
}

/// Does a record pass the search query?
///
/// An empty query matches everything; otherwise the query must fuzzily
/// match either the roll number or the name.
pub fn matches_query(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = normalize_name(query);
    is_fuzzy_match(&q, &normalize_name(&record.roll))
        || is_fuzzy_match(&q, &normalize_name(&record.name))
}

/// Does a record pass all filters and the query?
pub fn passes(record: &Record, query: &str, filters: &Filters) -> bool {
    if let Some(dept) = filters.dept {
        if record.dept != dept {
            return false;
        }
    }
    if let Some(year) = filters.year.as_deref() {
        if record.year.to_string() != year {
            return false;
        }
    }
    matches_query(record, query)
}

pub fn filter_records<'a>(records: &'a [Record], query: &str, filters: &Filters) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| passes(r, query, filters))
        .collect()
}

fn compare(a: &Record, b: &Record, field: SortField) -> Ordering {
    match field {
        SortField::Name => normalize_name(&a.name).cmp(&normalize_name(&b.name)),
        SortField::Cgpa => a.cgpa.partial_cmp(&b.cgpa).unwrap_or(Ordering::Equal),
    }
}

pub fn sort_records(records: &mut [&Record], sort: SortConfig) {
    let Some(field) = sort.field else {
        return;
    };
    records.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match sort.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

/// Filter then sort, the way the table shows it
pub fn visible<'a>(
    records: &'a [Record],
    query: &str,
    filters: &Filters,
    sort: SortConfig,
) -> Vec<&'a Record> {
    let mut view = filter_records(records, query, filters);
    sort_records(&mut view, sort);
    view
}
