use super::*;

fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.update_field(ContactField::Name, "Jane");
    form.update_field(ContactField::Email, "jane@x.com");
    form.update_field(ContactField::Message, "Hello");
    form
}

fn receipt() -> Result<InquiryReceipt, InquiryError> {
    Ok(InquiryReceipt { payload_bytes: 64 })
}

// =============================================================
// Defaults and field metadata
// =============================================================

#[test]
fn contact_form_default_idle_and_empty() {
    let form = ContactForm::default();
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.fields().is_empty());
    assert!(form.last_error().is_none());
    assert!(!form.inputs_disabled());
}

#[test]
fn company_is_the_only_optional_field() {
    let required: Vec<_> = ContactField::ALL.into_iter().filter(|f| f.is_required()).collect();
    assert_eq!(required, vec![ContactField::Name, ContactField::Email, ContactField::Message]);
}

#[test]
fn field_presentation_metadata() {
    assert_eq!(ContactField::Email.input_type(), "email");
    assert_eq!(ContactField::Name.input_type(), "text");
    assert!(ContactField::Message.is_multiline());
    assert!(!ContactField::Company.is_multiline());
    assert_eq!(ContactField::Email.label(), "Work Email");
    assert_eq!(ContactField::Company.key(), "company");
}

#[test]
fn update_field_writes_the_named_field_only() {
    let mut form = ContactForm::default();
    form.update_field(ContactField::Company, "Acme");
    assert_eq!(form.fields().company, "Acme");
    assert_eq!(form.fields().get(ContactField::Company), "Acme");
    assert!(form.fields().name.is_empty());
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn submit_moves_to_submitting_synchronously() {
    let mut form = filled_form();
    let ticket = form.submit().expect("idle form should start a submission");
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert!(form.inputs_disabled());
    assert_eq!(ticket.fields().name, "Jane");
    // Fields stay populated until delivery completes.
    assert_eq!(form.fields().email, "jane@x.com");
}

#[test]
fn submit_does_not_validate_fields() {
    let mut form = ContactForm::default();
    assert!(form.submit().is_some());
    assert_eq!(form.status(), SubmissionStatus::Submitting);
}

#[test]
fn second_submit_while_submitting_is_noop() {
    let mut form = filled_form();
    let first = form.submit().unwrap();
    assert!(form.submit().is_none());
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    // The original attempt still completes normally.
    assert!(form.complete(&first, receipt()));
    assert_eq!(form.status(), SubmissionStatus::Submitted);
}

#[test]
fn completion_clears_all_fields_and_marks_submitted() {
    let mut form = filled_form();
    form.update_field(ContactField::Company, "Acme");
    let ticket = form.submit().unwrap();
    assert!(form.complete(&ticket, receipt()));
    assert_eq!(form.status(), SubmissionStatus::Submitted);
    assert_eq!(form.fields(), &ContactFields::default());
}

#[test]
fn update_field_is_allowed_while_submitting() {
    let mut form = filled_form();
    let _ticket = form.submit().unwrap();
    form.update_field(ContactField::Message, "Hello again");
    assert_eq!(form.fields().message, "Hello again");
}

#[test]
fn reset_from_submitted_returns_to_idle_with_empty_fields() {
    let mut form = filled_form();
    let ticket = form.submit().unwrap();
    form.complete(&ticket, receipt());
    assert!(form.reset());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.fields().is_empty());
}

#[test]
fn reset_is_noop_unless_submitted() {
    let mut form = filled_form();
    assert!(!form.reset());
    let _ticket = form.submit().unwrap();
    assert!(!form.reset());
    assert_eq!(form.status(), SubmissionStatus::Submitting);
}

#[test]
fn submit_after_success_requires_reset() {
    let mut form = filled_form();
    let ticket = form.submit().unwrap();
    form.complete(&ticket, receipt());
    assert!(form.submit().is_none());
    form.reset();
    assert!(form.submit().is_some());
}

#[test]
fn stale_ticket_is_discarded() {
    let mut form = filled_form();
    let first = form.submit().unwrap();
    form.complete(&first, receipt());
    form.reset();
    form.update_field(ContactField::Name, "Sam");
    let _second = form.submit().unwrap();

    assert!(!form.complete(&first, receipt()));
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert_eq!(form.fields().name, "Sam");
}

#[test]
fn completion_without_pending_submission_is_ignored() {
    let mut form = filled_form();
    let ticket = form.submit().unwrap();
    form.complete(&ticket, receipt());
    assert!(!form.complete(&ticket, receipt()));
    assert_eq!(form.status(), SubmissionStatus::Submitted);
}

#[test]
fn rejected_delivery_keeps_fields_and_reports_error() {
    let mut form = filled_form();
    let ticket = form.submit().unwrap();
    assert!(form.complete(&ticket, Err(InquiryError::Rejected("503".to_owned()))));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.fields().name, "Jane");
    assert_eq!(form.last_error(), Some("inquiry rejected: 503"));

    // Retrying clears the previous error.
    let _retry = form.submit().unwrap();
    assert!(form.last_error().is_none());
}
