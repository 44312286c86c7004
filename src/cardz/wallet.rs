//! The wallet state container.
//!
//! [`CardWallet`] owns the authoritative in-memory card list and keeps it in
//! sync with the persisted blob behind a [`KeyValueStore`]. Every operation
//! runs the same three-phase machine:
//!
//! - **pending**: `loading` flips on and any previous `error` is cleared.
//! - **fulfilled**: `loading` flips off and the collection mutates.
//! - **rejected**: `loading` flips off, `error` holds one human-readable
//!   message, and the collection is untouched.
//!
//! Operations also return `Result`, so a caller may handle the failure
//! directly instead of polling `error`. The underlying cause goes to the
//! log, not into state.
//!
//! Every mutation is a full read-modify-write of the persisted blob. The
//! `&mut self` receivers make the borrow checker the single-writer
//! discipline: two mutations cannot interleave their read and write phases.

use crate::error::{CardzError, Result};
use crate::form::GiftCardFormData;
use crate::model::GiftCard;
use crate::store::{KeyValueStore, CARDS_KEY};
use tracing::warn;
use uuid::Uuid;

pub struct CardWallet<S: KeyValueStore> {
    store: S,
    cards: Vec<GiftCard>,
    loading: bool,
    error: Option<String>,
}

impl<S: KeyValueStore> CardWallet<S> {
    /// A wallet starts empty; call [`load`](Self::load) to populate it from
    /// the persisted blob.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cards: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// All cards, in insertion order.
    pub fn cards(&self) -> &[GiftCard] {
        &self.cards
    }

    pub fn get(&self, id: Uuid) -> Option<&GiftCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the current error message. No other effect.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace the in-memory collection with the persisted one. An absent
    /// blob is an empty collection, not an error.
    pub fn load(&mut self) -> Result<()> {
        self.begin();
        match self.read_cards() {
            Ok(cards) => {
                self.cards = cards;
                self.loading = false;
                Ok(())
            }
            Err(err) => self.fail(err, "Failed to load gift cards"),
        }
    }

    /// Append a new card built from `form` to the persisted list and the
    /// in-memory collection. Returns the stored record.
    pub fn create(&mut self, form: &GiftCardFormData) -> Result<GiftCard> {
        self.begin();
        match self.persist_new(form) {
            Ok(card) => {
                self.cards.push(card.clone());
                self.loading = false;
                Ok(card)
            }
            Err(err) => self.fail(err, "Failed to save gift card"),
        }
    }

    /// Replace the mutable fields of the card with `id`, preserving its id
    /// and creation timestamp. Fails if no such card exists.
    pub fn update(&mut self, id: Uuid, form: &GiftCardFormData) -> Result<GiftCard> {
        self.begin();
        match self.persist_update(id, form) {
            Ok(card) => {
                if let Some(slot) = self.cards.iter_mut().find(|c| c.id == id) {
                    *slot = card.clone();
                }
                self.loading = false;
                Ok(card)
            }
            Err(err) => self.fail(err, "Failed to update gift card"),
        }
    }

    /// Remove the card with `id` from the persisted list and the in-memory
    /// collection. Deleting an id that does not exist is a no-op, not an
    /// error; only persistence failures reject.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        self.begin();
        match self.persist_delete(id) {
            Ok(()) => {
                self.cards.retain(|card| card.id != id);
                self.loading = false;
                Ok(())
            }
            Err(err) => self.fail(err, "Failed to delete gift card"),
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail<T>(&mut self, err: CardzError, fallback: &str) -> Result<T> {
        warn!(error = %err, "gift card operation failed");
        self.loading = false;
        // Not-found and validation errors already read well; everything
        // else collapses to the operation's generic message.
        self.error = Some(match &err {
            CardzError::CardNotFound(_) | CardzError::Validation(_) => err.to_string(),
            _ => fallback.to_string(),
        });
        Err(err)
    }

    fn read_cards(&self) -> Result<Vec<GiftCard>> {
        match self.store.get(CARDS_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_cards(&mut self, cards: &[GiftCard]) -> Result<()> {
        let blob = serde_json::to_string_pretty(cards)?;
        self.store.set(CARDS_KEY, &blob)
    }

    fn persist_new(&mut self, form: &GiftCardFormData) -> Result<GiftCard> {
        let draft = form.draft()?;
        let mut persisted = self.read_cards()?;
        let card = GiftCard::new(draft);
        persisted.push(card.clone());
        self.write_cards(&persisted)?;
        Ok(card)
    }

    fn persist_update(&mut self, id: Uuid, form: &GiftCardFormData) -> Result<GiftCard> {
        let draft = form.draft()?;
        let mut persisted = self.read_cards()?;
        let card = persisted
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CardzError::CardNotFound(id))?;
        card.apply(draft);
        let updated = card.clone();
        self.write_cards(&persisted)?;
        Ok(updated)
    }

    fn persist_delete(&mut self, id: Uuid) -> Result<()> {
        let mut persisted = self.read_cards()?;
        persisted.retain(|card| card.id != id);
        self.write_cards(&persisted)
    }
}
