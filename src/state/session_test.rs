use super::*;

fn doctor() -> User {
    User {
        id: 9,
        full_name: "Dr. Lee".to_owned(),
        email: "doc@example.com".to_owned(),
        role: Role::Doctor,
        is_active: true,
        profile_picture: None,
        phone: None,
    }
}

// =============================================================
// SessionState defaults and transitions
// =============================================================

#[test]
fn default_session_is_empty_and_idle() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.role().is_none());
}

#[test]
fn apply_login_sets_token_and_user_together() {
    let mut state = SessionState::default();
    state.apply_login("tok-1".to_owned(), doctor());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.role(), Some(Role::Doctor));
}

#[test]
fn apply_login_preserves_role_case_exactly() {
    let mut state = SessionState::default();
    state.apply_login("tok-1".to_owned(), doctor());
    assert_eq!(state.user.unwrap().role.as_str(), "Doctor");
}

#[test]
fn clear_drops_token_and_user_together() {
    let mut state = SessionState::default();
    state.apply_login("tok-1".to_owned(), doctor());
    state.clear();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

// =============================================================
// Login outcome branching
// =============================================================

#[test]
fn active_user_is_a_verified_outcome() {
    let user = doctor();
    let outcome = LoginOutcome { verified: user.is_active, user };
    assert!(outcome.verified);
}

#[test]
fn inactive_user_is_an_unverified_outcome_not_an_error() {
    let mut user = doctor();
    user.is_active = false;
    let outcome = LoginOutcome { verified: user.is_active, user };
    assert!(!outcome.verified);
    assert_eq!(outcome.user.role, Role::Doctor);
}
