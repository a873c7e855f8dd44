// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::projection::{LeadQuery, project};
use crate::seed::initial_leads;
use crate::{LeadField, LeadId, LeadRecord, SortSpec, TypeFilter};

/// In-memory lead records plus the query that shapes the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadStore {
    records: Vec<LeadRecord>,
    query: LeadQuery,
}

impl LeadStore {
    pub fn new(records: Vec<LeadRecord>) -> Self {
        Self {
            records,
            query: LeadQuery::default(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(initial_leads())
    }

    pub fn with_query(mut self, query: LeadQuery) -> Self {
        self.query = query;
        self
    }

    /// Appends without validation or deduplication; the form boundary owns
    /// both.
    pub fn append(&mut self, record: LeadRecord) {
        self.records.push(record);
    }

    pub fn get(&self, id: &LeadId) -> Option<&LeadRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn contains(&self, id: &LeadId) -> bool {
        self.get(id).is_some()
    }

    pub fn records(&self) -> &[LeadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self) -> &LeadQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.query.type_filter = filter;
    }

    pub fn cycle_type_filter(&mut self) -> TypeFilter {
        self.query.type_filter = self.query.type_filter.next();
        self.query.type_filter
    }

    pub fn sort_by(&mut self, column: LeadField) -> SortSpec {
        self.query.sort = self.query.sort.toggled(column);
        self.query.sort
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.query.sort = sort;
    }

    pub fn view(&self) -> Vec<&LeadRecord> {
        project(&self.records, &self.query)
    }
}
