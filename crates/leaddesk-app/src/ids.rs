// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mints an id from the wall-clock millisecond, stepping forward until
    /// `taken` reports the candidate as free.
    pub fn mint(now: OffsetDateTime, taken: impl Fn(&LeadId) -> bool) -> Self {
        let mut millis = now.unix_timestamp_nanos() / 1_000_000;
        loop {
            let candidate = Self(millis.to_string());
            if !taken(&candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

impl From<&str> for LeadId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for LeadId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
