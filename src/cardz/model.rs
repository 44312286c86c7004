use crate::form::CardDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single gift card as it lives in the persisted blob.
///
/// Field names serialize in camelCase to match the documented blob shape
/// (`expirationDate`, `cardNumber`, `createdAt`, ...). The expiration date
/// stays a raw string in either `DD-MM-YYYY` or ISO-8601 form; the
/// [`crate::dates`] module interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCard {
    pub id: Uuid,
    pub brand: String,
    pub amount: f64,
    pub currency: String,
    pub expiration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GiftCard {
    /// Build a fresh card from a coerced form draft. Both timestamps are set
    /// to the same instant, so `created_at <= updated_at` holds from birth.
    pub fn new(draft: CardDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            brand: draft.brand,
            amount: draft.amount,
            currency: draft.currency,
            expiration_date: draft.expiration_date,
            card_number: draft.card_number,
            pin: draft.pin,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields from a draft, keeping `id` and
    /// `created_at`, and bump `updated_at`.
    pub fn apply(&mut self, draft: CardDraft) {
        self.brand = draft.brand;
        self.amount = draft.amount;
        self.currency = draft.currency;
        self.expiration_date = draft.expiration_date;
        self.card_number = draft.card_number;
        self.pin = draft.pin;
        self.notes = draft.notes;
        self.updated_at = Utc::now();
    }
}
