use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::models::GiftStatus;
use crate::requests::{
    AddParticipantRequest, CreateCommentRequest, CreateEventRequest, CreateGiftRequest, LoginRequest,
    SignupRequest, UpdateGiftRequest,
};

/// Input fields that can carry a field-level error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    Date,
    Recipient,
    Status,
    Message,
    ParticipantEmail,
}

/// Specific validation errors for the application's forms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormValidationError {
    #[error("{} is required", field_label(*.0))]
    Required(FormField),
    #[error("Please enter a valid email address")]
    MalformedEmail(FormField),
    #[error("'{0}' is not a valid date (YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Unsupported gift status {0}")]
    InvalidStatus(i32),
}

impl FormValidationError {
    pub fn field(&self) -> FormField {
        match self {
            FormValidationError::Required(field) | FormValidationError::MalformedEmail(field) => *field,
            FormValidationError::InvalidDate(_) => FormField::Date,
            FormValidationError::InvalidStatus(_) => FormField::Status,
        }
    }
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name",
        FormField::Email | FormField::ParticipantEmail => "Email",
        FormField::Password => "Password",
        FormField::Date => "Date",
        FormField::Recipient => "Recipient",
        FormField::Status => "Status",
        FormField::Message => "Message",
    }
}

/// Outcome of validating a form before it is submitted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValidation {
    pub errors: Vec<FormValidationError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error message attached to `field`, for rendering under the input
    pub fn error_for(&self, field: FormField) -> Option<String> {
        self.errors.iter().find(|e| e.field() == field).map(|e| e.to_string())
    }

    fn push(&mut self, error: FormValidationError) {
        self.errors.push(error);
    }

    fn require(&mut self, field: FormField, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(FormValidationError::Required(field));
            false
        } else {
            true
        }
    }

    fn require_email(&mut self, field: FormField, value: &str) {
        if self.require(field, value) && !is_valid_email(value.trim()) {
            self.push(FormValidationError::MalformedEmail(field));
        }
    }

    fn into_result<T>(self, value: T) -> Result<T, FormValidation> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Loose structural check: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FormValidation> {
    let mut validation = FormValidation::default();
    validation.require_email(FormField::Email, email);
    validation.require(FormField::Password, password);
    validation.into_result(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<SignupRequest, FormValidation> {
    let mut validation = FormValidation::default();
    validation.require(FormField::Name, name);
    validation.require_email(FormField::Email, email);
    validation.require(FormField::Password, password);
    validation.into_result(SignupRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
        name: name.trim().to_string(),
    })
}

/// `date` is the value of an `<input type="date">` (YYYY-MM-DD); the event is
/// sent as midnight UTC of that day.
pub fn validate_new_event(name: &str, date: &str) -> Result<CreateEventRequest, FormValidation> {
    let mut validation = FormValidation::default();
    validation.require(FormField::Name, name);

    let mut parsed: Option<DateTime<Utc>> = None;
    if validation.require(FormField::Date, date) {
        match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(day) => parsed = day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
            Err(_) => validation.push(FormValidationError::InvalidDate(date.trim().to_string())),
        }
    }

    match parsed {
        Some(date) if validation.is_valid() => Ok(CreateEventRequest {
            name: name.trim().to_string(),
            date,
        }),
        _ => Err(validation),
    }
}

/// URLs are trimmed and blank entries dropped, matching what the server stores
pub fn validate_new_gift(
    name: &str,
    to_id: &str,
    urls: &[String],
    secret: bool,
) -> Result<CreateGiftRequest, FormValidation> {
    let mut validation = FormValidation::default();
    validation.require(FormField::Name, name);
    validation.require(FormField::Recipient, to_id);
    validation.into_result(CreateGiftRequest {
        name: name.trim().to_string(),
        to_id: to_id.trim().to_string(),
        urls: clean_urls(urls),
        secret,
    })
}

pub fn clean_urls(urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Any of the three selectable statuses is accepted, including moving backwards
pub fn validate_status_update(status: GiftStatus) -> Result<UpdateGiftRequest, FormValidation> {
    let mut validation = FormValidation::default();
    if !status.is_known() {
        validation.push(FormValidationError::InvalidStatus(status.code()));
    }
    validation.into_result(UpdateGiftRequest { status })
}

pub fn validate_comment(message: &str) -> Result<CreateCommentRequest, FormValidation> {
    let mut validation = FormValidation::default();
    validation.require(FormField::Message, message);
    validation.into_result(CreateCommentRequest {
        message: message.trim().to_string(),
    })
}

pub fn validate_participant_email(email: &str) -> Result<AddParticipantRequest, FormValidation> {
    let mut validation = FormValidation::default();
    validation.require_email(FormField::ParticipantEmail, email);
    validation.into_result(AddParticipantRequest {
        participant_email: email.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice@@example.com"));
        assert!(!is_valid_email("ali ce@example.com"));
        assert!(!is_valid_email("alice@example..com"));
    }

    #[test]
    fn test_login_malformed_email_is_field_error() {
        let validation = validate_login("not-an-email", "secret").unwrap_err();
        assert_eq!(
            validation.errors,
            vec![FormValidationError::MalformedEmail(FormField::Email)]
        );
        assert_eq!(
            validation.error_for(FormField::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(validation.error_for(FormField::Password), None);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let validation = validate_login("  ", "").unwrap_err();
        assert_eq!(validation.errors.len(), 2);
        assert_eq!(validation.error_for(FormField::Email).as_deref(), Some("Email is required"));
        assert_eq!(validation.error_for(FormField::Password).as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_login_trims_email_but_not_password() {
        let request = validate_login(" a@b.co ", " pw ").unwrap();
        assert_eq!(request.email, "a@b.co");
        assert_eq!(request.password, " pw ");
    }

    #[test]
    fn test_signup_requires_name() {
        let validation = validate_signup("", "a@b.co", "pw").unwrap_err();
        assert_eq!(validation.errors, vec![FormValidationError::Required(FormField::Name)]);
    }

    #[test]
    fn test_new_event_parses_date_input() {
        let request = validate_new_event("Christmas", "2025-12-25").unwrap();
        assert_eq!(request.date.to_rfc3339(), "2025-12-25T00:00:00+00:00");

        let validation = validate_new_event("Christmas", "25/12/2025").unwrap_err();
        assert_eq!(
            validation.errors,
            vec![FormValidationError::InvalidDate("25/12/2025".to_string())]
        );

        let validation = validate_new_event("", "").unwrap_err();
        assert_eq!(validation.errors.len(), 2);
    }

    #[test]
    fn test_new_gift_cleans_urls() {
        let urls = vec![" https://a.example ".to_string(), "   ".to_string(), "https://b.example".to_string()];
        let request = validate_new_gift("Bike", "u1", &urls, true).unwrap();
        assert_eq!(request.urls, vec!["https://a.example", "https://b.example"]);
        assert!(request.secret);

        let validation = validate_new_gift("Bike", "", &[], false).unwrap_err();
        assert_eq!(validation.errors, vec![FormValidationError::Required(FormField::Recipient)]);
    }

    #[test]
    fn test_status_update_allows_backwards_transition() {
        assert!(validate_status_update(GiftStatus::New).is_ok());
        assert!(validate_status_update(GiftStatus::Bought).is_ok());
        assert_eq!(
            validate_status_update(GiftStatus::Unknown(4)).unwrap_err().errors,
            vec![FormValidationError::InvalidStatus(4)]
        );
    }

    #[test]
    fn test_blank_comment_rejected() {
        assert!(validate_comment(" \n ").is_err());
        assert_eq!(validate_comment(" hi ").unwrap().message, "hi");
    }

    #[test]
    fn test_participant_email() {
        assert!(validate_participant_email("friend@example.com").is_ok());
        let validation = validate_participant_email("friend").unwrap_err();
        assert!(validation.error_for(FormField::ParticipantEmail).is_some());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormValidationError::Required(FormField::ParticipantEmail).to_string(), "Email is required");
        assert_eq!(
            FormValidationError::MalformedEmail(FormField::Email).to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FormValidationError::InvalidDate("25/12".to_string()).to_string(),
            "'25/12' is not a valid date (YYYY-MM-DD)"
        );
        assert_eq!(FormValidationError::InvalidStatus(4).to_string(), "Unsupported gift status 4");

        let error: &dyn std::error::Error = &FormValidationError::InvalidStatus(4);
        assert!(error.source().is_none());
    }
}
