// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{LeadId, LeadRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Call,
    Email,
    Message,
}

impl ContactAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub action: ContactAction,
    pub lead_id: LeadId,
    pub uri: String,
}

impl ContactRequest {
    /// `None` when the lead has nothing to dial or address.
    pub fn for_lead(action: ContactAction, lead: &LeadRecord) -> Option<Self> {
        let uri = match action {
            ContactAction::Call => format!("tel:{}", dialable(&lead.phone)?),
            ContactAction::Message => format!("sms:{}", dialable(&lead.phone)?),
            ContactAction::Email => {
                let email = lead.email.trim();
                if email.is_empty() {
                    return None;
                }
                format!("mailto:{email}")
            }
        };
        Some(Self {
            action,
            lead_id: lead.id.clone(),
            uri,
        })
    }
}

fn dialable(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    if out.trim_start_matches('+').is_empty() {
        None
    } else {
        Some(out)
    }
}
