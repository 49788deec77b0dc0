use contactbook_core::{Contact, ContactValidationError};
use uuid::Uuid;

#[test]
fn new_sets_identity_and_creation_time() {
    let contact = Contact::new("Ann", "ann@x.com");

    assert!(!contact.uuid.is_nil());
    assert_eq!(contact.name, "Ann");
    assert_eq!(contact.email, "ann@x.com");
    assert!(contact.created_at > 0);
}

#[test]
fn new_generates_unique_ids() {
    let first = Contact::new("Ann", "ann@x.com");
    let second = Contact::new("Ann", "ann@x.com");

    assert_ne!(first.uuid, second.uuid);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Contact::with_id(Uuid::nil(), "Ann", "ann@x.com", 1_700_000_000_000).unwrap_err();
    assert_eq!(err, ContactValidationError::NilUuid);
}

#[test]
fn with_id_rejects_empty_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();

    let err = Contact::with_id(id, "", "ann@x.com", 1).unwrap_err();
    assert_eq!(err, ContactValidationError::EmptyName);

    let err = Contact::with_id(id, "Ann", "", 1).unwrap_err();
    assert_eq!(err, ContactValidationError::EmptyEmail);
}

#[test]
fn validate_reports_first_failing_field() {
    let mut contact = Contact::new("", "");
    assert_eq!(
        contact.validate().unwrap_err(),
        ContactValidationError::EmptyName
    );

    contact.name = "Ann".to_string();
    assert_eq!(
        contact.validate().unwrap_err(),
        ContactValidationError::EmptyEmail
    );

    contact.email = "ann@x.com".to_string();
    assert!(contact.validate().is_ok());
}

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let contact_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let contact = Contact::with_id(contact_id, "Ann", "ann@x.com", 1_700_000_000_000).unwrap();

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["uuid"], contact_id.to_string());
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "ann@x.com");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}
