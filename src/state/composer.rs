use crate::api::client::DraftRequest;
use crate::api::models::{Role, Vendor};
use crate::error::{DashboardError, Result, ValidationError};

pub const SYSTEM_INSTRUCTION: &str = "Act as a world-class professional administrator. Your task is to draft a text message for vendors that is clear, concise, and professional.";

/// Draft text, purpose text and the `Idle -> Generating -> Idle` cycle of
/// asking a generator for a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageComposer {
    draft: String,
    purpose: String,
    is_generating: bool,
}

impl MessageComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_purpose(&mut self, text: impl Into<String>) {
        self.purpose = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Validate and enter `Generating`. Nothing changes on error.
    pub fn begin(&mut self, selected: &[&Vendor]) -> Result<DraftRequest> {
        if selected.is_empty() || self.purpose.trim().is_empty() {
            return Err(ValidationError::MissingSelectionOrPurpose.into());
        }
        self.is_generating = true;
        Ok(DraftRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(selected, self.purpose.trim()),
        })
    }

    /// Leave `Generating`. On success the draft is replaced wholesale,
    /// otherwise it is left alone and the error handed back.
    pub fn finish(&mut self, outcome: Result<String>) -> Result<()> {
        self.is_generating = false;
        match outcome {
            Ok(text) if !text.trim().is_empty() => {
                self.draft = text;
                Ok(())
            }
            Ok(_) => Err(DashboardError::GenerationEmpty),
            Err(e) => Err(e),
        }
    }
}

fn distinct_roles(selected: &[&Vendor]) -> Vec<Role> {
    let mut roles = Vec::new();
    for v in selected {
        if !roles.contains(&v.role) {
            roles.push(v.role);
        }
    }
    roles
}

fn build_prompt(selected: &[&Vendor], purpose: &str) -> String {
    let roles = distinct_roles(selected)
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Draft a concise and polite text message for a company administrator to send to a group of vendors. \
         The vendors are: {roles}. The purpose of the message is: {purpose}. \
         The message should be professional and clear."
    )
}
