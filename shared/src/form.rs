//! add-campaign form: gating and validation

use crate::error::ValidationError;
use crate::models::{CampaignStatus, NewCampaign};

/// required field of the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Client,
    StartDate,
}

/// raw contents of the add form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub client: String,
    pub start_date: String,
    pub status: CampaignStatus,
}

impl AddForm {
    /// required fields that are currently empty (name and client are trimmed)
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(FormField::Name);
        }
        if self.client.trim().is_empty() {
            missing.push(FormField::Client);
        }
        if self.start_date.is_empty() {
            missing.push(FormField::StartDate);
        }
        missing
    }

    /// whether the add button should be enabled right now
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<NewCampaign, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        Ok(NewCampaign {
            name: self.name.trim().to_string(),
            client: self.client.trim().to_string(),
            start_date: self.start_date.clone(),
            status: self.status,
        })
    }

    /// clears the text fields after a successful add; the status choice stays
    pub fn clear_inputs(&mut self) {
        self.name.clear();
        self.client.clear();
        self.start_date.clear();
    }
}
