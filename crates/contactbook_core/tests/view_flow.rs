use contactbook_core::{ContactListScreen, ContactStore, StoreError};
use uuid::Uuid;

fn empty_screen() -> ContactListScreen {
    ContactListScreen::new(ContactStore::open_in_memory().unwrap())
}

fn screen_with(contacts: &[(&str, &str)]) -> ContactListScreen {
    let mut store = ContactStore::open_in_memory().unwrap();
    for (name, email) in contacts {
        store.add(*name, *email).unwrap();
    }
    ContactListScreen::new(store)
}

#[test]
fn begin_add_clears_form_and_opens_modal() {
    let mut screen = empty_screen();
    screen.set_name("stale");
    screen.set_email("stale@x.com");

    screen.begin_add();

    assert_eq!(screen.name(), "");
    assert_eq!(screen.email(), "");
    assert_eq!(screen.editing(), None);
    assert!(screen.is_modal_visible());
}

#[test]
fn save_in_add_mode_appends_record_and_closes_modal() {
    let mut screen = empty_screen();

    screen.begin_add();
    screen.set_name("Ann");
    screen.set_email("ann@x.com");
    let id = screen.save().unwrap();

    assert!(!screen.is_modal_visible());
    assert_eq!(screen.name(), "");
    assert_eq!(screen.email(), "");

    let rows = screen.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].uuid, id);
    assert_eq!(rows[0].name, "Ann");
}

#[test]
fn begin_edit_copies_target_fields_into_form() {
    let mut screen = screen_with(&[("Ann", "ann@x.com")]);
    let id = screen.rows()[0].uuid;

    screen.begin_edit(id).unwrap();

    assert_eq!(screen.name(), "Ann");
    assert_eq!(screen.email(), "ann@x.com");
    assert_eq!(screen.editing(), Some(id));
    assert!(screen.is_modal_visible());
}

#[test]
fn begin_edit_unknown_id_is_rejected() {
    let mut screen = empty_screen();

    let missing = Uuid::new_v4();
    let err = screen.begin_edit(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
    assert!(!screen.is_modal_visible());
}

#[test]
fn save_in_edit_mode_updates_target_and_preserves_identity() {
    let mut screen = screen_with(&[("Ann", "ann@x.com")]);
    let before = screen.rows()[0].clone();

    screen.begin_edit(before.uuid).unwrap();
    screen.set_name("Ann B");
    let saved = screen.save().unwrap();

    assert_eq!(saved, before.uuid);
    let rows = screen.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ann B");
    assert_eq!(rows[0].email, "ann@x.com");
    assert_eq!(rows[0].created_at, before.created_at);
    assert!(!screen.is_modal_visible());
}

#[test]
fn save_with_empty_field_keeps_modal_open_and_form_intact() {
    let mut screen = empty_screen();

    screen.begin_add();
    screen.set_name("Ann");
    let err = screen.save().unwrap_err();

    assert!(matches!(err, StoreError::Validation(_)));
    assert!(screen.is_modal_visible());
    assert_eq!(screen.name(), "Ann");
    assert!(screen.rows().is_empty());
}

#[test]
fn save_treats_whitespace_only_fields_as_empty() {
    let mut screen = empty_screen();

    screen.begin_add();
    screen.set_name("   ");
    screen.set_email("ann@x.com");
    let err = screen.save().unwrap_err();

    assert!(matches!(err, StoreError::Validation(_)));
    assert!(screen.rows().is_empty());
}

#[test]
fn cancel_closes_modal_without_store_mutation() {
    let mut screen = screen_with(&[("Ann", "ann@x.com")]);
    let before = screen.rows();

    screen.begin_edit(before[0].uuid).unwrap();
    screen.set_name("discarded");
    screen.cancel();

    assert!(!screen.is_modal_visible());
    assert_eq!(screen.rows(), before);
}

#[test]
fn delete_row_removes_record_immediately() {
    let mut screen = screen_with(&[("Ann", "ann@x.com"), ("Bob", "bob@x.com")]);
    let ann = screen.rows()[0].uuid;

    screen.delete_row(ann).unwrap();

    let rows = screen.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bob");
}

#[test]
fn search_narrows_rows_and_shows_placeholder_when_empty() {
    let mut screen = screen_with(&[("Bob", "bob@x.com"), ("Carol", "carol@x.com")]);

    screen.set_search("BOB");
    let rows = screen.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bob");

    screen.set_search("x.com");
    assert_eq!(screen.rows().len(), 2);

    screen.set_search("zzz");
    assert!(screen.rows().is_empty());
    assert!(screen.is_empty());

    screen.set_search("");
    assert_eq!(screen.rows().len(), 2);
    assert!(!screen.is_empty());
}
