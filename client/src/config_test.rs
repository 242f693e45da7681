use super::*;

#[test]
fn unset_api_url_uses_default() {
    assert_eq!(resolve_api_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn blank_api_url_uses_default() {
    assert_eq!(resolve_api_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn api_url_trailing_slash_trimmed() {
    assert_eq!(resolve_api_base_url(Some("https://api.edificio.test/v1/")), "https://api.edificio.test/v1");
}

#[test]
fn api_base_url_is_never_empty() {
    assert!(!api_base_url().is_empty());
}
