//! Substring filter projection over the event/band/member graph.
//!
//! # Responsibility
//! - Derive a pruned, count-annotated copy of an event list for one query.
//!
//! # Invariants
//! - Matching is literal substring containment on member names,
//!   case-sensitive, no wildcards or escaping.
//! - Input records are never mutated; every returned record is a fresh copy.
//! - Input event order is preserved; no re-sorting.

use crate::model::band::Band;
use crate::model::event::Event;

/// Projects an event list down to the members whose name contains `query`.
///
/// Bands with no surviving member are dropped; a surviving band is renamed
/// `"<name>[<member count>]"`. Events with no surviving band are dropped; a
/// surviving event is renamed `"<title>[<elements count>]"` where the
/// elements count totals its surviving bands plus their surviving members.
pub fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    events
        .iter()
        .filter_map(|event| filter_event(event, query))
        .collect()
}

fn filter_event(event: &Event, query: &str) -> Option<Event> {
    let bands: Vec<Band> = event
        .bands
        .iter()
        .filter_map(|band| filter_band(band, query))
        .collect();

    if bands.is_empty() {
        return None;
    }

    let member_count: usize = bands.iter().map(|band| band.members.len()).sum();
    let elements_count = bands.len() + member_count;

    let mut projected = Event::with_id(event.id, format!("{}[{elements_count}]", event.title));
    projected.comment = event.comment.clone();
    projected.img_url = event.img_url.clone();
    projected.nb_stars = event.nb_stars;
    projected.bands = bands;
    Some(projected)
}

fn filter_band(band: &Band, query: &str) -> Option<Band> {
    let members: Vec<_> = band
        .members
        .iter()
        .filter(|member| member.name.contains(query))
        .cloned()
        .collect();

    if members.is_empty() {
        return None;
    }

    let mut projected = Band::with_id(band.id, format!("{}[{}]", band.name, members.len()));
    projected.members = members;
    Some(projected)
}

#[cfg(test)]
mod tests {
    use super::filter_events;
    use crate::model::band::Band;
    use crate::model::event::Event;
    use crate::model::member::Member;

    fn band(name: &str, members: &[&str]) -> Band {
        let mut band = Band::new(name);
        band.members = members.iter().map(|name| Member::new(*name)).collect();
        band
    }

    fn event(title: &str, bands: Vec<Band>) -> Event {
        let mut event = Event::new(title);
        event.comment = "super event".to_string();
        event.img_url = "image.jpg".to_string();
        event.nb_stars = 5;
        event.bands = bands;
        event
    }

    #[test]
    fn graspop_scenario_prunes_and_annotates() {
        let events = vec![event(
            "GrasPop Metal Meeting",
            vec![
                band("Metallica", &["Queen Anika Walsh", "Queen Aliyah Jarvis"]),
                band("Pink Floyd", &["Queen Aliyah Jarvis"]),
            ],
        )];

        let filtered = filter_events(&events, "Wa");

        assert_eq!(filtered.len(), 1);
        let projected = &filtered[0];
        assert_eq!(projected.title, "GrasPop Metal Meeting[2]");
        assert_eq!(projected.bands.len(), 1);
        assert_eq!(projected.bands[0].name, "Metallica[1]");
        assert_eq!(projected.bands[0].members.len(), 1);
        assert_eq!(projected.bands[0].members[0].name, "Queen Anika Walsh");
    }

    #[test]
    fn scalars_and_ids_are_carried_into_the_projection() {
        let source = event("Solo Night", vec![band("Metallica", &["Walsh"])]);
        let source_id = source.id;
        let band_id = source.bands[0].id;

        let filtered = filter_events(&[source], "Wa");

        assert_eq!(filtered[0].id, source_id);
        assert_eq!(filtered[0].comment, "super event");
        assert_eq!(filtered[0].img_url, "image.jpg");
        assert_eq!(filtered[0].nb_stars, 5);
        assert_eq!(filtered[0].bands[0].id, band_id);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let events = vec![event("Night", vec![band("Metallica", &["walsh"])])];

        assert!(filter_events(&events, "Wa").is_empty());
        assert_eq!(filter_events(&events, "wa").len(), 1);
    }

    #[test]
    fn band_without_matches_is_dropped_and_empty_event_disappears() {
        let events = vec![
            event("Kept", vec![band("Metallica", &["Walsh", "Jarvis"])]),
            event("Dropped", vec![band("Pink Floyd", &["Jarvis"])]),
        ];

        let filtered = filter_events(&events, "Wa");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Kept[2]");
    }

    #[test]
    fn input_events_are_not_mutated() {
        let events = vec![event(
            "GrasPop Metal Meeting",
            vec![band("Metallica", &["Queen Anika Walsh"])],
        )];

        let _ = filter_events(&events, "Wa");

        assert_eq!(events[0].title, "GrasPop Metal Meeting");
        assert_eq!(events[0].bands[0].name, "Metallica");
        assert_eq!(events[0].bands[0].members.len(), 1);
    }

    #[test]
    fn elements_count_totals_bands_and_members() {
        let events = vec![event(
            "Fest",
            vec![
                band("Metallica", &["A Walsh", "B Walsh"]),
                band("Queen", &["C Walsh"]),
            ],
        )];

        let filtered = filter_events(&events, "Walsh");

        // 2 bands + 3 members.
        assert_eq!(filtered[0].title, "Fest[5]");
    }

    #[test]
    fn surviving_events_keep_input_order() {
        let events = vec![
            event("First", vec![band("A", &["Walsh"])]),
            event("Skipped", vec![band("B", &["Jarvis"])]),
            event("Second", vec![band("C", &["Walsh"])]),
        ];

        let filtered = filter_events(&events, "Wa");

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "First[2]");
        assert_eq!(filtered[1].title, "Second[2]");
    }
}
