use crate::domain::{EmailAddress, ServiceOffering};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Country,
    Service,
    Description,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Country,
        Field::Service,
        Field::Description,
    ];
}

/// The in-progress, not-yet-submitted form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub country: String,
    pub service: String,
    pub description: String,
}

impl ContactDraft {
    /// Check every field. An empty result means the draft is submittable.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(message) = self.check_field(field) {
                errors.set(field, message);
            }
        }
        errors
    }

    /// Check a single field, returning the message to display if it fails.
    /// The rules are independent, there are no cross-field constraints.
    pub fn check_field(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some("Name is required".into())
                } else if name.graphemes(true).count() < 2 {
                    Some("Name must be at least 2 characters".into())
                } else {
                    None
                }
            }
            Field::Email => {
                if self.email.trim().is_empty() {
                    Some("Email is required".into())
                } else if EmailAddress::parse(self.email.clone()).is_err() {
                    Some("Please enter a valid email address".into())
                } else {
                    None
                }
            }
            Field::Country => {
                if self.country.trim().is_empty() {
                    Some("Country is required".into())
                } else {
                    None
                }
            }
            Field::Service => {
                if ServiceOffering::from_name(&self.service).is_none() {
                    Some("Please select a service".into())
                } else {
                    None
                }
            }
            Field::Description => {
                let description = self.description.trim();
                if description.is_empty() {
                    Some("Project description is required".into())
                } else if description.graphemes(true).count() < 10 {
                    Some("Description must be at least 10 characters".into())
                } else {
                    None
                }
            }
        }
    }
}

/// One optional human-readable message per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Country => &self.country,
            Field::Service => &self.service,
            Field::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Country => &mut self.country,
            Field::Service => &mut self.service,
            Field::Description => &mut self.description,
        }
    }

    fn set(&mut self, field: Field, message: String) {
        *self.slot_mut(field) = Some(message);
    }

    fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }
}

/// The JSON body POSTed to `/api/contact`, the validated draft plus the
/// fixed business-side recipient.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub country: String,
    pub service: String,
    pub description: String,
    pub recipient: String,
}

/// Mutable state of one form session: the current draft, the per-field
/// errors from the last validation, a status line, and whether a
/// submission is in flight.
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    in_flight: bool,
    status: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// While true the submit control is disabled; this is the only guard
    /// against duplicate submissions.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Update one field. Only that field's error is cleared, the others
    /// keep whatever the last validation produced.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Country => self.draft.country = value,
            Field::Service => self.draft.service = value,
            Field::Description => self.draft.description = value,
        }
        self.errors.clear(field);
    }

    /// Validate the draft and, if it passes, mark the session in flight and
    /// hand back the payload to POST. A failing draft blocks the network
    /// call entirely: the full error map is stored, a generic status is
    /// surfaced, and nothing is submitted.
    pub fn try_begin_submission(&mut self, recipient: &str) -> Option<SubmissionPayload> {
        if self.in_flight {
            return None;
        }
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.status = Some("Please fill in all required fields correctly.".into());
            return None;
        }
        self.errors = FieldErrors::default();
        self.status = None;
        self.in_flight = true;
        Some(SubmissionPayload {
            name: self.draft.name.clone(),
            email: self.draft.email.clone(),
            country: self.draft.country.clone(),
            service: self.draft.service.clone(),
            description: self.draft.description.clone(),
            recipient: recipient.to_string(),
        })
    }

    /// Record the outcome of the in-flight submission. Success resets the
    /// draft and errors; failure keeps the draft for retry and surfaces the
    /// server's error string verbatim.
    pub fn complete_submission(&mut self, outcome: Result<(), String>) {
        self.in_flight = false;
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.errors = FieldErrors::default();
                self.status =
                    Some("Message sent successfully! We'll get back to you soon.".into());
            }
            Err(error) => {
                self.status = Some(error);
            }
        }
    }
}
