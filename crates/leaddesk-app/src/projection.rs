// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Derives the displayed row set from the raw lead records.
//!
//! The projection is pure: it filters on the type filter and the search query,
//! then stable-sorts on a single column. Records with equal keys keep their
//! store order, so rows do not jitter between redraws.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{LeadRecord, SortDirection, SortSpec, TypeFilter};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeadQuery {
    pub search: String,
    pub type_filter: TypeFilter,
    pub sort: SortSpec,
}

pub fn project<'a>(records: &'a [LeadRecord], query: &LeadQuery) -> Vec<&'a LeadRecord> {
    let needle = query.search.to_lowercase();
    let mut rows = records
        .iter()
        .filter(|record| query.type_filter.matches(record.lead_type))
        .filter(|record| matches_folded_search(record, &query.search, &needle))
        .collect::<Vec<_>>();

    rows.sort_by(|left, right| compare(left, right, query.sort));
    rows
}

/// Case-insensitive match on name and email, literal match on phone.
pub fn matches_search(record: &LeadRecord, query: &str) -> bool {
    matches_folded_search(record, query, &query.to_lowercase())
}

fn matches_folded_search(record: &LeadRecord, raw: &str, folded: &str) -> bool {
    if raw.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(folded)
        || record.email.to_lowercase().contains(folded)
        || record.phone.contains(raw)
}

pub fn compare(left: &LeadRecord, right: &LeadRecord, sort: SortSpec) -> Ordering {
    let order = left
        .sort_key(sort.column)
        .cmp(right.sort_key(sort.column));
    match sort.direction {
        SortDirection::Asc => order,
        SortDirection::Desc => order.reverse(),
    }
}
