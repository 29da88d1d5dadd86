//! Event use-case service.
//!
//! # Responsibility
//! - List, filter, update, create, and delete events against the three
//!   store collaborators.
//! - Resolve draft band/member names into shared store-resident records.
//!
//! # Invariants
//! - Bands and members are deduplicated by name across the whole store:
//!   an update reuses existing records and never creates per-event copies.
//! - A resolved band's member set and an event's band set are fully
//!   replaced on update, never merged.
//! - An absent update/delete target is a silent non-result, not an error.
//! - Update never deletes band or member records, even when the
//!   replacement leaves them unreferenced.

use crate::model::band::Band;
use crate::model::event::{Event, EventDraft, EventId};
use crate::model::member::Member;
use crate::repo::band_repo::BandRepository;
use crate::repo::event_repo::EventRepository;
use crate::repo::member_repo::MemberRepository;
use crate::repo::{RepoError, RepoResult};
use crate::search::filter::filter_events;

/// Use-case service over explicit store collaborators.
///
/// Stores are injected rather than ambient so the logic stays testable
/// with in-memory fakes; atomicity comes from whatever unit of work the
/// caller wraps the stores in.
pub struct EventService<E, B, M> {
    events: E,
    bands: B,
    members: M,
}

impl<E, B, M> EventService<E, B, M>
where
    E: EventRepository,
    B: BandRepository,
    M: MemberRepository,
{
    /// Creates a service using the provided store implementations.
    pub fn new(events: E, bands: B, members: M) -> Self {
        Self {
            events,
            bands,
            members,
        }
    }

    /// Lists all events in store fetch order.
    pub fn get_events(&self) -> RepoResult<Vec<Event>> {
        self.events.find_all()
    }

    /// Lists the filter projection of all events for a substring query.
    ///
    /// Returns fresh copies; stored records are never mutated.
    pub fn get_filtered_events(&self, query: &str) -> RepoResult<Vec<Event>> {
        let events = self.events.find_all()?;
        Ok(filter_events(&events, query))
    }

    /// Applies a desired-state draft to an existing event.
    ///
    /// Returns `Ok(None)` when the target id is absent. Otherwise overwrites
    /// the scalar fields, resolves every draft band and member by name
    /// (reusing store records, creating missing ones), replaces each resolved
    /// band's member set and the event's band set with exactly the resolved
    /// records, persists the event, and returns the saved state.
    ///
    /// # Side effects
    /// - May create band/member records (upsert-on-write).
    /// - A band name shared with other events resolves to the single shared
    ///   record, so its member replacement is visible to those events too.
    pub fn update(&self, id: EventId, draft: &EventDraft) -> RepoResult<Option<Event>> {
        let Some(mut event) = self.events.find_by_id(id)? else {
            return Ok(None);
        };

        event.title = draft.title.clone();
        event.comment = draft.comment.clone();
        event.img_url = draft.img_url.clone();
        event.nb_stars = draft.nb_stars;

        let mut bands: Vec<Band> = Vec::with_capacity(draft.bands.len());
        for band_draft in &draft.bands {
            let mut band = resolve(
                &band_draft.name,
                |name| self.bands.find_by_name(name),
                |band| self.bands.save(band),
                |name| Band::new(name),
            )?;

            let mut members: Vec<Member> = Vec::with_capacity(band_draft.members.len());
            for member_name in &band_draft.members {
                let member = resolve(
                    member_name,
                    |name| self.members.find_by_name(name),
                    |member| self.members.save(member),
                    |name| Member::new(name),
                )?;
                // Drafts carry lists; the stored relation is a set.
                if !members.iter().any(|existing| existing.id == member.id) {
                    members.push(member);
                }
            }

            band.members = members;
            let saved = self.bands.save(&band)?;
            if let Some(slot) = bands.iter_mut().find(|existing| existing.id == saved.id) {
                *slot = saved;
            } else {
                bands.push(saved);
            }
        }

        event.bands = bands;
        self.events.save(&event).map(Some)
    }

    /// Creates a new event from a desired-state draft.
    ///
    /// Persists a bare event first, then routes the draft through
    /// [`EventService::update`] so creation shares the exact band/member
    /// resolution semantics of an update.
    pub fn create(&self, draft: &EventDraft) -> RepoResult<Event> {
        let event = Event::new(draft.title.as_str());
        self.events.save(&event)?;
        self.update(event.id, draft)?
            .ok_or(RepoError::NotFound(event.id))
    }

    /// Deletes an event by id.
    ///
    /// Clears the band association set before removing the record; the bands
    /// themselves survive. An absent id is a no-op.
    pub fn delete(&self, id: EventId) -> RepoResult<()> {
        if let Some(mut event) = self.events.find_by_id(id)? {
            event.bands.clear();
            self.events.delete(&event)?;
        }
        Ok(())
    }
}

/// Idempotent natural-key resolution: find by name, create-and-save if absent.
///
/// Shared by band and member resolution so both get identical
/// collision/creation semantics.
fn resolve<T>(
    name: &str,
    find: impl FnOnce(&str) -> RepoResult<Option<T>>,
    save: impl FnOnce(&T) -> RepoResult<T>,
    build: impl FnOnce(&str) -> T,
) -> RepoResult<T> {
    if let Some(existing) = find(name)? {
        return Ok(existing);
    }
    save(&build(name))
}
