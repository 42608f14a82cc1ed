use super::*;

#[test]
fn base_url_is_a_known_target() {
    let base = api_base_url();
    assert!(
        base == LOCAL_API_URL || base == PROD_API_URL || option_env!("CLINIC_API_URL").is_some(),
        "unexpected base url: {base}"
    );
}

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/api/auth/login");
    assert!(url.starts_with(api_base_url()));
    assert!(url.ends_with("/api/auth/login"));
}
