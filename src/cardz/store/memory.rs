use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::form::GiftCardFormData;
    use crate::model::GiftCard;
    use crate::store::CARDS_KEY;

    pub fn form(brand: &str, amount: &str) -> GiftCardFormData {
        GiftCardFormData {
            brand: brand.to_string(),
            amount: amount.to_string(),
            currency: "USD".to_string(),
            expiration_date: "31-12-2030".to_string(),
            card_number: None,
            pin: None,
            notes: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed the persisted blob with `count` cards.
        pub fn with_cards(mut self, count: usize) -> Self {
            let cards: Vec<GiftCard> = (1..=count)
                .map(|i| GiftCard::new(form(&format!("Brand {}", i), "10").draft().unwrap()))
                .collect();
            let blob = serde_json::to_string_pretty(&cards).unwrap();
            self.store.set(CARDS_KEY, &blob).unwrap();
            self
        }

        /// Seed the persisted blob with raw content, valid JSON or not.
        pub fn with_blob(mut self, blob: &str) -> Self {
            self.store.set(CARDS_KEY, blob).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("gift_cards").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = InMemoryStore::new();
        store.set("gift_cards", "[]").unwrap();
        assert_eq!(store.get("gift_cards").unwrap().as_deref(), Some("[]"));
    }
}
