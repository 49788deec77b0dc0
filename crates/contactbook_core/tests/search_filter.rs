use contactbook_core::{filter_contacts, matches_query, Contact};

fn sample() -> Vec<Contact> {
    vec![
        Contact::new("Bob", "bob@x.com"),
        Contact::new("Carol", "carol@x.com"),
        Contact::new("Dmitri", "dmitri@elsewhere.org"),
    ]
}

#[test]
fn matching_is_case_insensitive() {
    let contact = Contact::new("Bob", "bob@x.com");

    assert!(matches_query(&contact, "BOB"));
    assert!(matches_query(&contact, "bOb"));
    assert!(matches_query(&contact, "X.COM"));
}

#[test]
fn matches_on_name_or_email_substring() {
    let contact = Contact::new("Carol", "carol@x.com");

    assert!(matches_query(&contact, "aro"));
    assert!(matches_query(&contact, "@x"));
    assert!(!matches_query(&contact, "bob"));
}

#[test]
fn blank_query_returns_full_collection() {
    let contacts = sample();

    assert_eq!(filter_contacts(&contacts, "").len(), contacts.len());
    assert_eq!(filter_contacts(&contacts, "   ").len(), contacts.len());
}

#[test]
fn unmatched_query_returns_empty_result() {
    let contacts = sample();

    assert!(filter_contacts(&contacts, "zzz").is_empty());
}

#[test]
fn filter_preserves_snapshot_order() {
    let contacts = sample();

    let hits = filter_contacts(&contacts, "x.com");
    let names: Vec<_> = hits.iter().map(|contact| contact.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Carol"]);
}

#[test]
fn name_query_narrows_email_query_spans() {
    let contacts = sample();

    let bob_only = filter_contacts(&contacts, "bob");
    assert_eq!(bob_only.len(), 1);
    assert_eq!(bob_only[0].name, "Bob");

    let shared_domain = filter_contacts(&contacts, "x.com");
    assert_eq!(shared_domain.len(), 2);
}
