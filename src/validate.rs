//! Field-scoped signup form validation.
//!
//! Validation failures are local and non-fatal: they block submission only,
//! and the user can correct and retry indefinitely.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // National number without country code; the flow prepends the code.
    RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("static regex"))
}

/// Whether `phone` is a valid 10-digit national number.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_re().is_match(phone)
}

/// Raw signup form values.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub fullname: String,
    pub phone: String,
    pub password: String,
    pub verify_password: String,
}

/// Per-field error messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFormErrors {
    pub fullname: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub verify_password: Option<String>,
}

impl SignupFormErrors {
    pub fn is_valid(&self) -> bool {
        self.fullname.is_none()
            && self.phone.is_none()
            && self.password.is_none()
            && self.verify_password.is_none()
    }
}

/// Validate a signup form, reporting every failing field at once.
pub fn validate_signup(form: &SignupForm) -> SignupFormErrors {
    let mut errors = SignupFormErrors::default();

    if form.fullname.trim().is_empty() {
        errors.fullname = Some("Please enter a valid name".to_string());
    }

    if !phone_re().is_match(&form.phone) {
        errors.phone = Some("Please enter a valid phone number".to_string());
    }

    if form.password.len() < MIN_PASSWORD_LEN {
        errors.password = Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    } else if form.password != form.verify_password {
        errors.password = Some("Password does not match".to_string());
        errors.verify_password = Some("Password does not match".to_string());
    }

    errors
}
