// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use leaddesk_app::ContactRequest;
use std::process::{Command, Stdio};
use std::thread;
use tracing::info;

/// Hands contact links to an external opener such as `xdg-open`.
pub struct SystemRuntime {
    opener: String,
}

impl SystemRuntime {
    pub fn new(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }
}

impl leaddesk_tui::AppRuntime for SystemRuntime {
    fn open_contact(&mut self, request: &ContactRequest) -> Result<()> {
        let mut child = Command::new(&self.opener)
            .arg(&request.uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| {
                format!(
                    "run {:?}; install it or set [contact].opener in the config",
                    self.opener
                )
            })?;
        info!(
            action = request.action.label(),
            lead_id = %request.lead_id,
            opener = %self.opener,
            "contact opened"
        );
        // Reap in the background so the TUI never blocks on the opener.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SystemRuntime;
    use anyhow::Result;
    use leaddesk_app::{ContactAction, ContactRequest, LeadType};
    use leaddesk_testkit::bare_lead;
    use leaddesk_tui::AppRuntime;

    fn request() -> Option<ContactRequest> {
        let lead = bare_lead("1", "Test Person", LeadType::Buyer);
        ContactRequest::for_lead(ContactAction::Email, &lead)
    }

    #[test]
    fn missing_opener_is_actionable() -> Result<()> {
        let mut runtime = SystemRuntime::new("leaddesk-no-such-opener");
        let request = request().ok_or_else(|| anyhow::anyhow!("lead has an email"))?;
        let error = runtime
            .open_contact(&request)
            .expect_err("missing opener should fail");
        let message = format!("{error:#}");
        assert!(message.contains("[contact].opener"), "got {message}");
        assert!(message.contains("leaddesk-no-such-opener"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn existing_opener_is_spawned() -> Result<()> {
        let mut runtime = SystemRuntime::new("true");
        let request = request().ok_or_else(|| anyhow::anyhow!("lead has an email"))?;
        runtime.open_contact(&request)?;
        assert_eq!(runtime.opener(), "true");
        Ok(())
    }
}
