use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(validate_credentials("  ada@example.com ", "hunter22"), Ok("ada@example.com".to_owned()));
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "hunter22"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("ada@example.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_credentials_requires_at_sign() {
    assert_eq!(validate_credentials("ada.example.com", "hunter22"), Err("Enter a valid email address."));
}

#[test]
fn validate_credentials_password_too_short() {
    assert_eq!(validate_credentials("ada@example.com", "12345"), Err("Password must be at least 6 characters."));
}

#[test]
fn validate_credentials_password_at_minimum() {
    assert!(validate_credentials("ada@example.com", "123456").is_ok());
}

#[test]
fn auth_mode_toggles_back_and_forth() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled().toggled(), AuthMode::SignUp);
}

#[test]
fn sign_in_heads_for_dashboard_and_sign_up_for_verify() {
    assert_eq!(AuthMode::SignIn.next_route(), AppRoute::Dashboard);
    assert_eq!(AuthMode::SignUp.next_route(), AppRoute::Verify);
}
