use crate::core::validator::is_ten_digit;
use crate::domain::model::{
    Credentials, LoginRequest, RegisterEmailRequest, RegisterPhoneRequest, RegistrationDraft,
};
use secrecy::ExposeSecret;

pub const COUNTRY_CODE_PREFIX: &str = "+91";

/// A bare 10-digit identifier gets the fixed country prefix; everything else
/// (emails, already-prefixed numbers) passes through untouched.
pub fn normalize_identifier(identifier: &str) -> String {
    let identifier = identifier.trim();
    if is_ten_digit(identifier) {
        format!("{}{}", COUNTRY_CODE_PREFIX, identifier)
    } else {
        identifier.to_string()
    }
}

pub fn login_payload(credentials: &Credentials) -> LoginRequest {
    LoginRequest {
        contact: normalize_identifier(&credentials.identifier),
        password: credentials.password.expose_secret().to_string(),
    }
}

pub fn register_email_payload(draft: &RegistrationDraft) -> RegisterEmailRequest {
    RegisterEmailRequest {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        email: draft.identifier.clone(),
        password: draft.password.expose_secret().to_string(),
    }
}

pub fn register_phone_payload(draft: &RegistrationDraft) -> RegisterPhoneRequest {
    RegisterPhoneRequest {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        // Normalization is idempotent, so drafts that already carry the
        // prefix are left alone.
        phone: normalize_identifier(&draft.identifier),
        password: draft.password.expose_secret().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefixes_ten_digit_identifiers() {
        assert_eq!(normalize_identifier("9876543210"), "+919876543210");
        assert_eq!(normalize_identifier(" 9876543210 "), "+919876543210");
    }

    #[test]
    fn test_normalize_passes_other_identifiers_through() {
        assert_eq!(normalize_identifier("user@example.com"), "user@example.com");
        assert_eq!(normalize_identifier("+919876543210"), "+919876543210");
        assert_eq!(normalize_identifier("987654321"), "987654321");
        assert_eq!(normalize_identifier(""), "");
    }

    #[test]
    fn test_login_payload_normalizes_contact() {
        let credentials = Credentials::new("9876543210", "Passw0rd!");
        let payload = login_payload(&credentials);
        assert_eq!(payload.contact, "+919876543210");
        assert_eq!(payload.password, "Passw0rd!");
    }

    #[test]
    fn test_register_email_payload_maps_draft() {
        let mut draft = RegistrationDraft::default();
        draft.first_name = "Asha".to_string();
        draft.last_name = "Verma".to_string();
        draft.identifier = "asha@example.com".to_string();
        draft.password = "Passw0rd!".to_string().into();

        let value = serde_json::to_value(register_email_payload(&draft)).unwrap();
        assert_eq!(value["firstName"], "Asha");
        assert_eq!(value["lastName"], "Verma");
        assert_eq!(value["email"], "asha@example.com");
        assert_eq!(value["password"], "Passw0rd!");
    }

    #[test]
    fn test_register_phone_payload_uses_wire_field_names() {
        let mut draft = RegistrationDraft::default();
        draft.first_name = "Asha".to_string();
        draft.last_name = "Verma".to_string();
        draft.identifier = "+919876543210".to_string();
        draft.password = "Passw0rd!".to_string().into();

        let value = serde_json::to_value(register_phone_payload(&draft)).unwrap();
        assert_eq!(value["firstName"], "Asha");
        assert_eq!(value["phone"], "+919876543210");
    }
}
