// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::{BudgetRange, LeadId, LeadRecord, LeadSource, LeadType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFormInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub lead_type: LeadType,
    pub budget: Option<BudgetRange>,
    pub source: LeadSource,
    pub notes: String,
}

impl Default for LeadFormInput {
    fn default() -> Self {
        Self::blank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Address,
    LeadType,
    Budget,
    Source,
    Notes,
}

impl FormField {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::LeadType,
        Self::Budget,
        Self::Source,
        Self::Notes,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::LeadType => "Lead Type",
            Self::Budget => "Budget Range",
            Self::Source => "Lead Source",
            Self::Notes => "Notes",
        }
    }

    pub const fn is_choice(self) -> bool {
        matches!(self, Self::LeadType | Self::Budget | Self::Source)
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Phone | Self::Email | Self::Address)
    }
}

impl LeadFormInput {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            lead_type: LeadType::Buyer,
            budget: None,
            source: LeadSource::Website,
            notes: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("lead name is required -- enter a full name and retry");
        }
        if self.phone.trim().is_empty() {
            bail!("lead phone is required -- enter a phone number and retry");
        }
        if self.email.trim().is_empty() {
            bail!("lead email is required -- enter an email address and retry");
        }
        if !self.email.contains('@') {
            bail!(
                "lead email {:?} is missing `@` -- enter a full address like name@example.com",
                self.email.trim()
            );
        }
        if self.address.trim().is_empty() {
            bail!("lead address is required -- enter an address and retry");
        }
        Ok(())
    }

    /// Trimmed record carrying the chosen source label. Category, agent and
    /// status stay absent so the table shows their placeholders.
    pub fn into_record(self, id: LeadId) -> LeadRecord {
        let mut record = LeadRecord::new(
            id,
            self.name.trim(),
            self.phone.trim(),
            self.email.trim(),
            self.address.trim(),
            self.lead_type,
        );
        record.source = Some(self.source.label().to_owned());
        record.budget = self.budget;
        record.notes = self.notes.trim().to_owned();
        record
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Phone => Some(&mut self.phone),
            FormField::Email => Some(&mut self.email),
            FormField::Address => Some(&mut self.address),
            FormField::Notes => Some(&mut self.notes),
            FormField::LeadType | FormField::Budget | FormField::Source => None,
        }
    }

    pub fn display(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Email => self.email.clone(),
            FormField::Address => self.address.clone(),
            FormField::Notes => self.notes.clone(),
            FormField::LeadType => self.lead_type.as_str().to_owned(),
            FormField::Budget => self
                .budget
                .map_or("Select budget range", BudgetRange::label)
                .to_owned(),
            FormField::Source => self.source.label().to_owned(),
        }
    }

    /// Steps a choice field forward or back. The budget cycle includes the
    /// unset state.
    pub fn cycle_choice(&mut self, field: FormField, delta: isize) -> bool {
        match field {
            FormField::LeadType => {
                self.lead_type = step(&LeadType::ALL, self.lead_type, delta);
                true
            }
            FormField::Source => {
                self.source = step(&LeadSource::ALL, self.source, delta);
                true
            }
            FormField::Budget => {
                let options = std::iter::once(None)
                    .chain(BudgetRange::ALL.into_iter().map(Some))
                    .collect::<Vec<_>>();
                self.budget = step(&options, self.budget, delta);
                true
            }
            _ => false,
        }
    }
}

fn step<T: Copy + PartialEq>(options: &[T], current: T, delta: isize) -> T {
    let len = options.len() as isize;
    let index = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0) as isize;
    options[(index + delta).rem_euclid(len) as usize]
}
