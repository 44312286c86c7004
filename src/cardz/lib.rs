//! # Cardz Architecture
//!
//! Cardz is a **UI-agnostic gift card wallet library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Wallet Layer (wallet.rs)                                   │
//! │  - Owns the in-memory card collection and loading/error     │
//! │    state, keeps it in sync with the persisted blob          │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the storage trait              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `wallet.rs` inward (wallet, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could back a GUI, a mobile shell, or any other
//! UI.
//!
//! ## Dates Are Strings Until Proven Otherwise
//!
//! Expiration dates are stored as the raw strings users and pickers produce,
//! in one of two shapes: `DD-MM-YYYY` (typed/legacy) or ISO-8601 (picker).
//! The [`dates`] module is the single place that interprets them; every
//! consumer goes through it so the format branching and timezone handling
//! stay consistent. See `dates.rs` for why naive instant math is not enough.
//!
//! ## Testing Strategy
//!
//! 1. **Dates** (`dates.rs`): thorough unit tests of the format branching
//!    and expiry boundaries, driven through clock-injected variants.
//!    This is where the lion's share of edge cases lives.
//!
//! 2. **Wallet** (`wallet.rs`): state-machine tests against `InMemoryStore`
//!    (and a deliberately failing store for the rejected paths).
//!
//! 3. **CLI** (`args.rs`/`print.rs` + thin `main.rs`): integration tests
//!    driving the real binary against a temp data directory.
//!
//! ## Module Overview
//!
//! - [`wallet`]: The wallet state container—entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The persisted `GiftCard` record
//! - [`form`]: Form input and typed validation
//! - [`dates`]: Date parsing, formatting, and expiration classification
//! - [`currency`]: The supported-currency table
//! - [`error`]: Error types

pub mod currency;
pub mod dates;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
pub mod wallet;
