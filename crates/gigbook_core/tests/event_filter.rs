use gigbook_core::{BandDraft, EventCatalog, EventDraft};

fn graspop_draft() -> EventDraft {
    EventDraft {
        title: "GrasPop Metal Meeting".to_string(),
        comment: "super event".to_string(),
        img_url: "image.jpg".to_string(),
        nb_stars: 5,
        bands: vec![
            BandDraft::new("Metallica", ["Queen Anika Walsh", "Queen Aliyah Jarvis"]),
            BandDraft::new("Pink Floyd", ["Queen Aliyah Jarvis"]),
        ],
    }
}

#[test]
fn filter_returns_annotated_copies_of_matching_graph() {
    let mut catalog = EventCatalog::open_in_memory().unwrap();
    catalog.create_event(&graspop_draft()).unwrap();

    let filtered = catalog.filtered_events("Wa").unwrap();

    assert_eq!(filtered.len(), 1);
    let event = &filtered[0];
    assert_eq!(event.title, "GrasPop Metal Meeting[2]");
    assert_eq!(event.comment, "super event");
    assert_eq!(event.nb_stars, 5);
    assert_eq!(event.bands.len(), 1);
    assert_eq!(event.bands[0].name, "Metallica[1]");
    assert_eq!(event.bands[0].members.len(), 1);
    assert_eq!(event.bands[0].members[0].name, "Queen Anika Walsh");
}

#[test]
fn filter_never_mutates_stored_events() {
    let mut catalog = EventCatalog::open_in_memory().unwrap();
    catalog.create_event(&graspop_draft()).unwrap();

    catalog.filtered_events("Wa").unwrap();

    let stored = catalog.events().unwrap();
    assert_eq!(stored[0].title, "GrasPop Metal Meeting");
    assert_eq!(stored[0].bands.len(), 2);
    assert_eq!(stored[0].bands[0].name, "Metallica");
    assert_eq!(stored[0].bands[0].members.len(), 2);
}

#[test]
fn filter_drops_events_whose_bands_all_lose_their_members() {
    let mut catalog = EventCatalog::open_in_memory().unwrap();
    catalog.create_event(&graspop_draft()).unwrap();
    let mut no_match = EventDraft::new("Quiet Night");
    no_match.bands = vec![BandDraft::new("Pink Floyd", ["Queen Aliyah Jarvis"])];
    catalog.create_event(&no_match).unwrap();

    let filtered = catalog.filtered_events("Wa").unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "GrasPop Metal Meeting[2]");
}

#[test]
fn filter_with_no_matches_returns_empty_list() {
    let mut catalog = EventCatalog::open_in_memory().unwrap();
    catalog.create_event(&graspop_draft()).unwrap();

    assert!(catalog.filtered_events("Zappa").unwrap().is_empty());
}

#[test]
fn catalog_update_and_delete_roundtrip() {
    let mut catalog = EventCatalog::open_in_memory().unwrap();
    let created = catalog.create_event(&graspop_draft()).unwrap();

    let mut draft = graspop_draft();
    draft.comment = "changed".to_string();
    let updated = catalog
        .update_event(created.id, &draft)
        .unwrap()
        .expect("event should exist");
    assert_eq!(updated.comment, "changed");

    catalog.delete_event(created.id).unwrap();
    assert!(catalog.events().unwrap().is_empty());
    assert!(catalog.update_event(created.id, &draft).unwrap().is_none());
}
