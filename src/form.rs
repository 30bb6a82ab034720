//! Contact form state, validation and submission.
//!
//! Field rules match the public site's schema: name and company at least two
//! characters, a syntactically valid email, a selected country, and a message
//! of at least ten characters. Validation failures stay inline next to their
//! field; only the submission outcome itself surfaces as a translated
//! success or error banner, and nothing is retried automatically.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::Result;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// The five form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Contact name.
    Name,
    /// Email address.
    Email,
    /// Company name.
    Company,
    /// Country of origin (selected from a fixed list).
    Country,
    /// Free-form message.
    Message,
}

impl Field {
    /// All fields in focus order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Country,
        Field::Message,
    ];

    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Company,
            Field::Company => Field::Country,
            Field::Country => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// The field before this one, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Company => Field::Email,
            Field::Country => Field::Company,
            Field::Message => Field::Country,
        }
    }
}

/// A validated submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Contact name, at least two characters.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Company name, at least two characters.
    pub company: String,
    /// Selected country.
    pub country: String,
    /// Free-form message, at least ten characters.
    pub message: String,
}

impl ContactForm {
    /// Check all field rules, returning one error per failing field.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.chars().count() < 2 {
            errors.push(FieldError::new(
                Field::Name,
                "Name must be at least 2 characters",
            ));
        }
        if !EMAIL.is_match(&self.email) {
            errors.push(FieldError::new(Field::Email, "Invalid email address"));
        }
        if self.company.chars().count() < 2 {
            errors.push(FieldError::new(
                Field::Company,
                "Company name must be at least 2 characters",
            ));
        }
        if self.country.is_empty() {
            errors.push(FieldError::new(Field::Country, "Please select a country"));
        }
        if self.message.chars().count() < 10 {
            errors.push(FieldError::new(
                Field::Message,
                "Message must be at least 10 characters",
            ));
        }
        errors
    }
}

/// A validation failure attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// The failing field.
    pub field: Field,
    /// Human-readable rule description.
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Submission sink for validated forms.
///
/// The deck ships with [`LogSubmitter`]; a real deployment would put an HTTP
/// client behind this trait.
pub trait Submitter {
    /// Deliver a validated form, returning whether delivery succeeded.
    fn submit(&self, form: &ContactForm) -> Result<()>;
}

/// Stub sink: serializes the payload to JSON and records it in the log.
#[derive(Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, form: &ContactForm) -> Result<()> {
        let payload = serde_json::to_string(form)?;
        tracing::info!(%payload, "Contact form submission");
        Ok(())
    }
}

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing submitted yet.
    Idle,
    /// A valid form is queued; delivery happens on the next tick.
    Submitting,
    /// Last submission was delivered.
    Success,
    /// Last submission failed; the user must resubmit.
    Error,
}

/// Interactive state of the contact form.
#[derive(Debug)]
pub struct FormState {
    /// Field that currently receives keystrokes.
    pub focus: Field,
    /// Outstanding validation errors from the last submit attempt.
    pub errors: Vec<FieldError>,
    /// Submission outcome.
    pub status: SubmitStatus,
    name: String,
    email: String,
    company: String,
    message: String,
    country: Option<usize>,
}

impl FormState {
    /// Create an empty form focused on the name field.
    pub fn new() -> Self {
        Self {
            focus: Field::Name,
            errors: Vec::new(),
            status: SubmitStatus::Idle,
            name: String::new(),
            email: String::new(),
            company: String::new(),
            message: String::new(),
            country: None,
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused text field.
    ///
    /// The country field is a selection, not free text; typing there is
    /// ignored.
    pub fn input(&mut self, c: char) {
        if let Some(buffer) = self.buffer_mut() {
            buffer.push(c);
        }
    }

    /// Remove the last character from the focused text field.
    pub fn backspace(&mut self) {
        if let Some(buffer) = self.buffer_mut() {
            buffer.pop();
        }
    }

    /// Advance the country selection, wrapping past the end.
    pub fn cycle_country(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.country = Some(match self.country {
            Some(i) => (i + 1) % option_count,
            None => 0,
        });
    }

    /// The text of a field, as entered so far.
    pub fn text(&self, field: Field, countries: &[String]) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Company => self.company.clone(),
            Field::Message => self.message.clone(),
            Field::Country => self
                .country
                .and_then(|i| countries.get(i))
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// The outstanding validation message for a field, if any.
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// Build the submission payload from the current buffers.
    pub fn to_form(&self, countries: &[String]) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            country: self.text(Field::Country, countries),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate and queue the form for delivery.
    ///
    /// On validation failure the errors are stored for inline display and
    /// the status is left untouched.
    pub fn request_submit(&mut self, countries: &[String]) {
        let form = self.to_form(countries);
        self.errors = form.validate();
        if self.errors.is_empty() {
            self.status = SubmitStatus::Submitting;
        }
    }

    /// Deliver a queued form through the given sink.
    ///
    /// Success clears the buffers, mirroring the site's form reset; failure
    /// keeps them so the user can resubmit.
    pub fn finish_submit(&mut self, submitter: &dyn Submitter, countries: &[String]) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        let form = self.to_form(countries);
        match submitter.submit(&form) {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.clear();
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.company.clear();
        self.message.clear();
        self.country = None;
        self.focus = Field::Name;
    }

    fn buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Company => Some(&mut self.company),
            Field::Message => Some(&mut self.message),
            Field::Country => None,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
