//! # Storage Layer
//!
//! This module defines the persistence abstraction for cardz. The
//! [`KeyValueStore`] trait is the whole contract: read a serialized string
//! by key, write one back. The entire card collection lives under a single
//! fixed key as one JSON array — there is no indexed or partial-update
//! storage, which is acceptable because the dataset is small and
//! single-user.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (platform key-value stores, etc.) without
//!   changing the wallet
//! - Keep the wallet **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage; each key is one
//!   `<key>.json` file under the store's root directory.
//! - [`memory::InMemoryStore`]: In-memory storage for testing, no
//!   persistence.
//!
//! ## Storage Format
//!
//! ```text
//! <root>/
//! └── gift_cards.json     # JSON array of all gift card records
//! ```
//!
//! There is no schema versioning or migration logic; a structural change to
//! the record shape requires a manual, out-of-band migration.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// The fixed key holding the serialized gift card collection.
pub const CARDS_KEY: &str = "gift_cards";

/// Abstract key-value persistence: one serialized blob per key.
pub trait KeyValueStore {
    /// Read the blob stored under `key`, or `None` if nothing was ever
    /// written there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
