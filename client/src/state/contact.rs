//! Contact form fields and submission lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Submitted -> Idle`. The machine never validates
//! fields; required-input enforcement and disabling controls while
//! submitting are presentation policy. Each submission is stamped with an
//! attempt number so a completion that arrives for a superseded or torn-down
//! attempt is dropped instead of applied.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::net::inquiry::{InquiryError, InquiryReceipt};

/// Free-text inputs of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    /// Optional; the only field without a required flag.
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    /// Stable identifier used for element ids and the JSON payload key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Work Email",
            Self::Company => "Company / Organization",
            Self::Message => "Message",
        }
    }

    /// Drives the input-level `required` attribute.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    /// Rendered as a `<textarea>` instead of an `<input>`.
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Handle for one in-flight submission, returned by [`ContactForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    attempt: u64,
    fields: ContactFields,
}

impl SubmissionTicket {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Snapshot of the fields at the moment `submit` was called.
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    attempt: u64,
    last_error: Option<String>,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Message from the most recent rejected delivery, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Inputs and the submit button are disabled while a submission is in flight.
    pub fn inputs_disabled(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Allowed in every status.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Start a submission. Only `Idle` moves to `Submitting`; calling again
    /// while a submission is pending (or after success, before `reset`) does
    /// nothing and returns `None`, so no second delivery is started.
    pub fn submit(&mut self) -> Option<SubmissionTicket> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }
        self.attempt = self.attempt.wrapping_add(1);
        self.status = SubmissionStatus::Submitting;
        self.last_error = None;
        Some(SubmissionTicket { attempt: self.attempt, fields: self.fields.clone() })
    }

    /// Apply the delivery outcome for `ticket`. Returns `false` and leaves the
    /// form untouched when the ticket is not the pending attempt.
    ///
    /// Success clears all four fields and moves to `Submitted`. A rejection
    /// keeps the entered values and returns to `Idle` so the user can retry.
    pub fn complete(&mut self, ticket: &SubmissionTicket, outcome: Result<InquiryReceipt, InquiryError>) -> bool {
        if self.status != SubmissionStatus::Submitting || ticket.attempt != self.attempt {
            return false;
        }
        match outcome {
            Ok(_) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Submitted;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.status = SubmissionStatus::Idle;
            }
        }
        true
    }

    /// "Send another message": `Submitted -> Idle`. No-op elsewhere.
    pub fn reset(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitted {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}
