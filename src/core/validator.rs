use regex::Regex;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "*Required";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";
pub const PHONE_RULE_MESSAGE: &str = "10 digit mobile number required";
pub const PASSWORD_RULE_MESSAGE: &str = "8-20 char, A-Z, a-z, 0-9, and symbol";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required";

const PASSWORD_SYMBOLS: &str = "@$!%*?&";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Identifier,
    Password,
    ConfirmPassword,
}

/// Every invalid field gets exactly one message; later rules for the same
/// field overwrite earlier ones.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Password policy: 8-20 characters from `[A-Za-z0-9@$!%*?&]` with at least
/// one lowercase, one uppercase, one digit and one symbol.
pub fn valid_password(password: &str) -> bool {
    let shape_ok = Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,20}$")
        .is_ok_and(|regex| regex.is_match(password));

    shape_ok
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn is_ten_digit(identifier: &str) -> bool {
    Regex::new(r"^[0-9]{10}$").is_ok_and(|regex| regex.is_match(identifier))
}

pub fn validate_login(identifier: &str, password: &str) -> FieldErrors {
    let identifier = identifier.trim();
    let password = password.trim();

    let mut errors = FieldErrors::new();
    if identifier.is_empty() {
        errors.insert(Field::Identifier, REQUIRED_MESSAGE);
    }
    apply_password_rules(&mut errors, password);
    errors
}

pub fn validate_email_signup(email: &str, password: &str) -> FieldErrors {
    let email = email.trim();
    let password = password.trim();

    let mut errors = FieldErrors::new();
    if email.is_empty() {
        errors.insert(Field::Identifier, EMAIL_REQUIRED_MESSAGE);
    }
    apply_password_rules(&mut errors, password);
    errors
}

pub fn validate_phone_signup(phone: &str, password: &str) -> FieldErrors {
    let phone = phone.trim();
    let password = password.trim();

    let mut errors = FieldErrors::new();
    if !is_ten_digit(phone) {
        errors.insert(Field::Identifier, PHONE_RULE_MESSAGE);
    }
    apply_password_rules(&mut errors, password);
    errors
}

/// The reset screen only checks for presence; the composition policy was
/// already enforced when the password was first chosen.
pub fn validate_password_reset(new_password: &str, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if new_password.trim().is_empty() {
        errors.insert(Field::Password, REQUIRED_MESSAGE);
    }
    if confirm_password.trim().is_empty() {
        errors.insert(Field::ConfirmPassword, REQUIRED_MESSAGE);
    }
    errors
}

fn apply_password_rules(errors: &mut FieldErrors, password: &str) {
    if !valid_password(password) {
        errors.insert(Field::Password, PASSWORD_RULE_MESSAGE);
    }
    // A blank password overwrites the composition message.
    if password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED_MESSAGE);
    }
}
