use super::*;

fn form() -> SignupForm {
    SignupForm {
        full_name: "New Admin".to_owned(),
        email: "admin@example.com".to_owned(),
        password: "secret".to_owned(),
        phone: "555-0103".to_owned(),
        specialization: None,
    }
}

// =============================================================
// Signup payload normalization
// =============================================================

#[test]
fn signup_payload_maps_admin_alias_to_super_admin() {
    let payload = signup_payload(&form(), "admin");
    assert_eq!(payload["userType"], "SuperAdmin");
}

#[test]
fn signup_payload_keeps_canonical_types() {
    assert_eq!(signup_payload(&form(), "doctor")["userType"], "Doctor");
    assert_eq!(signup_payload(&form(), "patient")["userType"], "Patient");
}

#[test]
fn signup_payload_passes_unknown_alias_through() {
    assert_eq!(signup_payload(&form(), "nurse")["userType"], "nurse");
}

#[test]
fn signup_payload_carries_form_fields() {
    let payload = signup_payload(&form(), "admin");
    assert_eq!(payload["full_name"], "New Admin");
    assert_eq!(payload["email"], "admin@example.com");
    assert_eq!(payload["phone"], "555-0103");
    assert!(payload.get("specialization").is_none());
}

#[test]
fn signup_payload_includes_specialization_for_doctors() {
    let mut doctor_form = form();
    doctor_form.specialization = Some("Psychiatry".to_owned());
    let payload = signup_payload(&doctor_form, "doctor");
    assert_eq!(payload["specialization"], "Psychiatry");
}

// =============================================================
// Signup URL keeps the raw alias
// =============================================================

#[test]
fn signup_path_uses_raw_user_type() {
    assert_eq!(signup_path("admin"), "/api/auth/signup/admin");
    assert_eq!(signup_path("doctor"), "/api/auth/signup/doctor");
}

// =============================================================
// Verification payload
// =============================================================

#[test]
fn verify_payload_normalizes_user_type() {
    let payload = verify_payload("admin@example.com", "123456", "admin");
    assert_eq!(payload["email"], "admin@example.com");
    assert_eq!(payload["code"], "123456");
    assert_eq!(payload["userType"], "SuperAdmin");
}

#[test]
fn normalized_user_type_is_case_insensitive() {
    assert_eq!(normalized_user_type("Admin"), "SuperAdmin");
    assert_eq!(normalized_user_type("DOCTOR"), "Doctor");
}
