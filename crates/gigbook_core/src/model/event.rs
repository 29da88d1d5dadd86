//! Event domain model and desired-state update input.
//!
//! # Responsibility
//! - Define the root entity of the event/band/member graph.
//! - Define the draft shape accepted by create/update use-cases.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `bands` holds references to store-resident bands; an update replaces
//!   the whole set with the resolved bands of the draft.
//! - External schema naming is camelCase (`imgUrl`, `nbStars`).

use crate::model::band::Band;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an event record.
pub type EventId = Uuid;

/// Concert/gathering root entity with scalar metadata and a band set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable global ID used for linking and auditing.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Free-form user comment.
    pub comment: String,
    /// Poster/cover image location.
    pub img_url: String,
    /// User rating, 0 to 5 stars.
    pub nb_stars: u8,
    /// Store-resident bands, loaded in deterministic `name ASC` order.
    pub bands: Vec<Band>,
}

impl Event {
    /// Creates a new event with a generated stable ID and no bands.
    ///
    /// # Invariants
    /// - Scalar fields other than `title` start empty/zero.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an event with a caller-provided stable ID and no bands.
    pub fn with_id(id: EventId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            comment: String::new(),
            img_url: String::new(),
            nb_stars: 0,
            bands: Vec::new(),
        }
    }
}

/// Desired state for one band inside an [`EventDraft`].
///
/// Carries names only: the update use-case resolves each name against the
/// stores and reuses or creates the shared records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDraft {
    /// Band natural key.
    pub name: String,
    /// Member natural keys. Replaces the resolved band's member set.
    pub members: Vec<String>,
}

impl BandDraft {
    /// Creates a draft band from a name and member names.
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Desired state accepted by event create/update use-cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Display title.
    pub title: String,
    /// Free-form user comment.
    pub comment: String,
    /// Poster/cover image location.
    pub img_url: String,
    /// User rating, 0 to 5 stars.
    pub nb_stars: u8,
    /// Desired band graph, by name.
    pub bands: Vec<BandDraft>,
}

impl EventDraft {
    /// Creates a draft with the given title and no bands.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            comment: String::new(),
            img_url: String::new(),
            nb_stars: 0,
            bands: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Event, EventDraft};

    #[test]
    fn event_serializes_with_camel_case_field_names() {
        let mut event = Event::new("GrasPop Metal Meeting");
        event.img_url = "image.jpg".to_string();
        event.nb_stars = 5;

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["imgUrl"], "image.jpg");
        assert_eq!(json["nbStars"], 5);
        assert!(json.get("img_url").is_none());
    }

    #[test]
    fn draft_deserializes_from_external_schema() {
        let draft: EventDraft = serde_json::from_str(
            r#"{
                "title": "GrasPop Metal Meeting",
                "comment": "super event",
                "imgUrl": "image.jpg",
                "nbStars": 3,
                "bands": [
                    { "name": "Metallica", "members": ["Queen Anika Walsh"] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(draft.img_url, "image.jpg");
        assert_eq!(draft.nb_stars, 3);
        assert_eq!(draft.bands[0].members.len(), 1);
    }
}
