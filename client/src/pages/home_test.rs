use super::*;
use crate::net::types::User;

fn user(name: &str) -> User {
    User {
        id: "u1".to_owned(),
        name: name.to_owned(),
        surname: "Huseynov".to_owned(),
        email: "x@clinic.test".to_owned(),
        phone_number: String::new(),
        email_confirmed: true,
        phone_number_confirmed: true,
        two_factor_enabled: false,
        lockout_end: None,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn greeting_names_authenticated_user() {
    let state = AuthState { user: Some(user("Rashad")), is_authenticated: true, ..AuthState::default() };
    assert_eq!(greeting(&state), "Welcome back, Rashad");
}

#[test]
fn greeting_is_generic_when_signed_out() {
    assert_eq!(greeting(&AuthState::default()), "Dental supplies for clinics, wholesale");
}

#[test]
fn greeting_ignores_user_without_authentication() {
    let state = AuthState { user: Some(user("Rashad")), is_authenticated: false, ..AuthState::default() };
    assert_eq!(greeting(&state), "Dental supplies for clinics, wholesale");
}
