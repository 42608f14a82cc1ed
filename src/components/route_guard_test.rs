use super::*;

fn user_with(role: Role) -> User {
    User {
        id: 1,
        full_name: "Test User".to_owned(),
        email: "user@example.com".to_owned(),
        role,
        is_active: true,
        profile_picture: None,
        phone: None,
    }
}

// =============================================================
// Unauthenticated: always to the landing route
// =============================================================

#[test]
fn no_user_redirects_to_landing_without_allow_list() {
    assert_eq!(evaluate(None, None), GuardOutcome::Redirect("/"));
}

#[test]
fn no_user_redirects_to_landing_for_every_allow_list() {
    let lists: [&[Role]; 3] = [&[], &[Role::SuperAdmin], &[Role::Doctor, Role::Patient]];
    for allowed in lists {
        assert_eq!(evaluate(None, Some(allowed)), GuardOutcome::Redirect("/"));
    }
}

// =============================================================
// Authenticated + authorized: render
// =============================================================

#[test]
fn user_without_allow_list_renders() {
    let user = user_with(Role::Patient);
    assert_eq!(evaluate(Some(&user), None), GuardOutcome::Render);
}

#[test]
fn listed_role_renders() {
    let user = user_with(Role::Doctor);
    assert_eq!(
        evaluate(Some(&user), Some(&[Role::Doctor])),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate(Some(&user), Some(&[Role::SuperAdmin, Role::Doctor])),
        GuardOutcome::Render
    );
}

// =============================================================
// Authenticated + unauthorized: redirect to the user's own dashboard
// =============================================================

#[test]
fn unlisted_doctor_redirects_to_doctor_dashboard() {
    let user = user_with(Role::Doctor);
    assert_eq!(
        evaluate(Some(&user), Some(&[Role::SuperAdmin])),
        GuardOutcome::Redirect("/doctor")
    );
}

#[test]
fn unlisted_patient_redirects_to_patient_dashboard() {
    let user = user_with(Role::Patient);
    assert_eq!(
        evaluate(Some(&user), Some(&[Role::SuperAdmin, Role::Doctor])),
        GuardOutcome::Redirect("/patient")
    );
}

#[test]
fn unlisted_super_admin_redirects_to_super_admin_dashboard() {
    let user = user_with(Role::SuperAdmin);
    assert_eq!(
        evaluate(Some(&user), Some(&[Role::Patient])),
        GuardOutcome::Redirect("/super-admin")
    );
}

#[test]
fn empty_allow_list_never_renders_for_a_user() {
    let user = user_with(Role::Doctor);
    assert_eq!(
        evaluate(Some(&user), Some(&[])),
        GuardOutcome::Redirect("/doctor")
    );
}

// =============================================================
// End-to-end shape: login then guard
// =============================================================

#[test]
fn fresh_login_renders_behind_matching_guard() {
    let mut state = SessionState::default();
    state.apply_login("tok-1".to_owned(), user_with(Role::Doctor));
    assert_eq!(
        evaluate(state.user.as_ref(), Some(&[Role::Doctor])),
        GuardOutcome::Render
    );
}
