//! Tests for contact form validation and the submission flow.

use lapacho::error::LapachoError;
use lapacho::form::{
    ContactForm, Field, FormState, LogSubmitter, SubmitStatus, Submitter,
};

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Jane Doe".to_string(),
        email: "jane@company.com".to_string(),
        company: "Acme GmbH".to_string(),
        country: "Germany".to_string(),
        message: "We are evaluating a regional expansion.".to_string(),
    }
}

fn countries() -> Vec<String> {
    vec!["Germany".to_string(), "Spain".to_string()]
}

/// Sink that always fails, for exercising the error banner path.
struct DownSubmitter;

impl Submitter for DownSubmitter {
    fn submit(&self, _form: &ContactForm) -> lapacho::Result<()> {
        Err(LapachoError::Terminal("sink unavailable".to_string()))
    }
}

#[test]
fn valid_form_passes_validation() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn short_name_is_rejected() {
    let mut form = valid_form();
    form.name = "J".to_string();
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Name);
}

#[test]
fn malformed_emails_are_rejected() {
    for bad in ["", "jane", "jane@", "@company.com", "jane@com", "a b@c.de"] {
        let mut form = valid_form();
        form.email = bad.to_string();
        assert!(
            form.validate().iter().any(|e| e.field == Field::Email),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn short_company_is_rejected() {
    let mut form = valid_form();
    form.company = "A".to_string();
    assert!(form.validate().iter().any(|e| e.field == Field::Company));
}

#[test]
fn missing_country_is_rejected() {
    let mut form = valid_form();
    form.country = String::new();
    assert!(form.validate().iter().any(|e| e.field == Field::Country));
}

#[test]
fn short_message_is_rejected() {
    let mut form = valid_form();
    form.message = "too short".to_string();
    assert!(form.validate().iter().any(|e| e.field == Field::Message));
}

#[test]
fn every_empty_field_gets_its_own_error() {
    let form = ContactForm {
        name: String::new(),
        email: String::new(),
        company: String::new(),
        country: String::new(),
        message: String::new(),
    };
    assert_eq!(form.validate().len(), 5);
}

fn fill_valid(state: &mut FormState) {
    for c in "Jane Doe".chars() {
        state.input(c);
    }
    state.focus_next();
    for c in "jane@company.com".chars() {
        state.input(c);
    }
    state.focus_next();
    for c in "Acme GmbH".chars() {
        state.input(c);
    }
    state.focus_next(); // country
    state.cycle_country(countries().len());
    state.focus_next();
    for c in "We are evaluating a regional expansion.".chars() {
        state.input(c);
    }
}

#[test]
fn invalid_submit_stores_inline_errors_and_stays_idle() {
    let mut state = FormState::new();
    state.request_submit(&countries());

    assert_eq!(state.status, SubmitStatus::Idle);
    assert!(!state.errors.is_empty());
    assert!(state.error_for(Field::Name).is_some());
}

#[test]
fn valid_submit_goes_through_the_sink_and_clears() {
    let mut state = FormState::new();
    fill_valid(&mut state);

    state.request_submit(&countries());
    assert_eq!(state.status, SubmitStatus::Submitting);
    assert!(state.errors.is_empty());

    state.finish_submit(&LogSubmitter, &countries());
    assert_eq!(state.status, SubmitStatus::Success);
    // Buffers reset after success, like the site's form.
    assert_eq!(state.text(Field::Name, &countries()), "");
    assert_eq!(state.text(Field::Country, &countries()), "");
}

#[test]
fn failed_delivery_keeps_the_buffers_for_resubmission() {
    let mut state = FormState::new();
    fill_valid(&mut state);

    state.request_submit(&countries());
    state.finish_submit(&DownSubmitter, &countries());

    assert_eq!(state.status, SubmitStatus::Error);
    assert_eq!(state.text(Field::Name, &countries()), "Jane Doe");
}

#[test]
fn country_selection_cycles_through_options() {
    let mut state = FormState::new();
    state.focus = Field::Country;
    let opts = countries();

    state.cycle_country(opts.len());
    assert_eq!(state.text(Field::Country, &opts), "Germany");
    state.cycle_country(opts.len());
    assert_eq!(state.text(Field::Country, &opts), "Spain");
    state.cycle_country(opts.len());
    assert_eq!(state.text(Field::Country, &opts), "Germany");
}

#[test]
fn typing_into_the_country_field_is_ignored() {
    let mut state = FormState::new();
    state.focus = Field::Country;
    state.input('x');
    assert_eq!(state.text(Field::Country, &countries()), "");
}

#[test]
fn focus_wraps_in_both_directions() {
    let mut field = Field::Name;
    for _ in 0..Field::ALL.len() {
        field = field.next();
    }
    assert_eq!(field, Field::Name);

    let mut field = Field::Name;
    for _ in 0..Field::ALL.len() {
        field = field.prev();
    }
    assert_eq!(field, Field::Name);
}

#[test]
fn payload_serializes_with_site_field_names() {
    let json = serde_json::to_value(valid_form()).expect("serializable");
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@company.com");
    assert_eq!(json["company"], "Acme GmbH");
    assert_eq!(json["country"], "Germany");
    assert_eq!(json["message"], "We are evaluating a regional expansion.");
}
