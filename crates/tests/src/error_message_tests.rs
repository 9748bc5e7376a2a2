use pretty_assertions::assert_eq;
use shared_types::AppError;

// Server functions carry a JSON-encoded AppError inside the transport
// error string; these mirror the strings the pages actually receive.

#[test]
fn login_failure_surfaces_the_server_message() {
    let wrapped = r#"error running server function: {"kind":"Unauthorized","message":"Invalid email or password"} (details: None)"#;
    assert_eq!(
        AppError::friendly_message(wrapped),
        "Invalid email or password"
    );
    assert!(AppError::parse_field_errors(wrapped).is_empty());
}

#[test]
fn validation_failure_maps_onto_form_fields() {
    let wrapped = r#"error running server function: {"kind":"ValidationError","message":"Validation failed","field_errors":{"price":"Price must be non-negative","name":"Product name is required"}} (details: None)"#;

    let fields = AppError::parse_field_errors(wrapped);
    assert_eq!(fields.len(), 2);
    assert_eq!(
        fields.get("price").map(String::as_str),
        Some("Price must be non-negative")
    );
    assert_eq!(
        fields.get("name").map(String::as_str),
        Some("Product name is required")
    );
}

#[test]
fn transport_failure_falls_back_to_a_generic_message() {
    let raw = "error running server function: connection reset by peer";
    assert_eq!(
        AppError::friendly_message(raw),
        "Something went wrong. Please try again."
    );
    assert!(AppError::parse_field_errors(raw).is_empty());
}

#[test]
fn sign_out_revoke_failure_reaches_the_toast() {
    // admin_logout propagates a failed token revoke; the sidebar and
    // denied-screen handlers toast this string instead of reporting success.
    let wrapped = r#"error running server function: {"kind":"DatabaseError","message":"error returned from database: connection closed"} (details: None)"#;
    assert_eq!(
        AppError::friendly_message(wrapped),
        "error returned from database: connection closed"
    );
}

#[test]
fn missing_directory_record_keeps_its_own_wording() {
    let wrapped = r#"error running server function: {"kind":"Forbidden","message":"Admin record not found"} (details: None)"#;
    assert_eq!(AppError::friendly_message(wrapped), "Admin record not found");
}

#[test]
fn denied_lookup_keeps_its_admin_only_wording() {
    let wrapped = r#"error running server function: {"kind":"Forbidden","message":"Unauthorized: Admin access only"} (details: None)"#;
    assert_eq!(
        AppError::friendly_message(wrapped),
        "Unauthorized: Admin access only"
    );
}
