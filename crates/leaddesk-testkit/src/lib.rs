// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use leaddesk_app::{BudgetRange, LeadFormInput, LeadId, LeadRecord, LeadSource, LeadType};
use std::path::PathBuf;
use time::OffsetDateTime;

const FIRST_NAMES: [&str; 18] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan", "Priya", "Mateo",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

const TOWNS: [(&str, &str, &str); 12] = [
    ("Matawan", "NJ", "07747"),
    ("Caldwell", "NJ", "07006"),
    ("Manasquan", "NJ", "08736"),
    ("Asbury Park", "NJ", "07712"),
    ("New Providence", "NJ", "07974"),
    ("Hoboken", "NJ", "07030"),
    ("Greenlawn", "NY", "11740"),
    ("Huntington", "NY", "11743"),
    ("White Plains", "NY", "10601"),
    ("North Bethesda", "MD", "20852"),
    ("Rockville", "MD", "20850"),
    ("Stamford", "CT", "06901"),
];
const STREET_NAMES: [&str; 12] = [
    "Cedar", "Maple", "Oak", "Pine", "Willow", "Elm", "Birch", "Dolan", "Mountain", "Ridge",
    "Lakeview", "Brookside",
];
const STREET_SUFFIXES: [&str; 5] = ["St", "Ave", "Rd", "Ln", "Ct"];
const AREA_CODES: [&str; 8] = ["201", "203", "732", "784", "908", "914", "973", "994"];
const EMAIL_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yahoo.com",
    "verizon.net",
    "comcast.net",
    "outlook.com",
    "example.com",
];

const CATEGORIES: [&str; 4] = ["Residential", "Commercial", "Land", "Rental"];
const AGENTS: [&str; 6] = [
    "Dana Whitfield",
    "Marcus Lee",
    "Sofia Ortega",
    "Ben Adler",
    "Grace Kim",
    "Omar Haddad",
];
const STATUSES: [&str; 5] = ["New", "Contacted", "Qualified", "Showing", "Closed"];
const SECONDARY_SOURCES: [&str; 5] = ["Zillow", "Realtor.com", "Open House", "Mailer", "Sign Call"];
const THIRD_SOURCES: [&str; 4] = ["Spring Campaign", "Facebook Ad", "Past Client", "Newsletter"];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }
}

/// Reproducible fake leads. The same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct LeadFaker {
    rng: DeterministicRng,
    next_id: u64,
}

impl LeadFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    /// Ids are `demo-1`, `demo-2`, ... so they never collide with seeded
    /// or minted ids.
    pub fn lead(&mut self) -> LeadRecord {
        let id = LeadId::new(format!("demo-{}", self.next_id));
        self.next_id += 1;
        self.lead_with_id(id)
    }

    pub fn leads(&mut self, count: usize) -> Vec<LeadRecord> {
        (0..count).map(|_| self.lead()).collect()
    }

    pub fn lead_with_id(&mut self, id: LeadId) -> LeadRecord {
        let form = self.form_input();
        let mut record = LeadRecord::new(
            id,
            form.name,
            form.phone,
            form.email,
            form.address,
            form.lead_type,
        );
        record.category = self.maybe(&CATEGORIES, 50);
        record.agent = self.maybe(&AGENTS, 60);
        record.source = self.maybe_source(60);
        record.status = self.maybe(&STATUSES, 50);
        record.secondary_source = self.maybe(&SECONDARY_SOURCES, 30);
        record.third_source = self.maybe(&THIRD_SOURCES, 15);
        record.budget = form.budget;
        record
    }

    /// A form that passes validation.
    pub fn form_input(&mut self) -> LeadFormInput {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let domain = self.pick(&EMAIL_DOMAINS);
        let (town, state, zip) = TOWNS[self.rng.int_n(TOWNS.len())];
        let lead_type = LeadType::ALL[self.rng.int_n(LeadType::ALL.len())];
        let budget = if self.rng.chance(70) {
            Some(BudgetRange::ALL[self.rng.int_n(BudgetRange::ALL.len())])
        } else {
            None
        };

        LeadFormInput {
            name: format!("{first} {last}"),
            phone: format!(
                "({}) {:03}-{:04}",
                self.pick(&AREA_CODES),
                self.int_range(200, 999),
                self.int_range(0, 9_999),
            ),
            email: format!(
                "{}{}{}@{domain}",
                first.to_ascii_lowercase(),
                &last[..1].to_ascii_lowercase(),
                self.int_range(1, 99)
            ),
            address: format!(
                "{} {} {}, {town}, {state}, {zip}",
                self.int_range(1, 999),
                self.pick(&STREET_NAMES),
                self.pick(&STREET_SUFFIXES),
            ),
            lead_type,
            budget,
            source: LeadSource::ALL[self.rng.int_n(LeadSource::ALL.len())],
            notes: String::new(),
        }
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn maybe(&mut self, items: &[&str], percent: u64) -> Option<String> {
        if self.rng.chance(percent) {
            Some(self.pick(items).to_owned())
        } else {
            None
        }
    }

    fn maybe_source(&mut self, percent: u64) -> Option<String> {
        if self.rng.chance(percent) {
            let source = LeadSource::ALL[self.rng.int_n(LeadSource::ALL.len())];
            Some(source.label().to_owned())
        } else {
            None
        }
    }

    fn int_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (self.rng.next_u64() % span) as u32
    }
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

pub fn fixture_datetime() -> &'static str {
    "2026-02-19T12:34:56Z"
}

/// `fixture_datetime` as a timestamp, for deterministic id minting.
pub fn fixture_now() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(1_771_504_496)
}

/// A minimal lead with only the required attributes filled in.
pub fn bare_lead(id: &str, name: &str, lead_type: LeadType) -> LeadRecord {
    let handle = name.to_ascii_lowercase().replace(' ', ".");
    LeadRecord::new(
        id,
        name,
        "(555) 010-0000",
        format!("{handle}@example.com"),
        "1 Test Ln",
        lead_type,
    )
}
