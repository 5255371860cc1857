//! # Terra Core
//!
//! The reading engine. A direction (plus a seed or an intention) resolves
//! to one of 64 reference records; a household layout is scored into
//! per-person influence; both are narrated into display text.
//!
//! ## Core Components
//!
//! - **reference_store**: Loads and caches the 64-record reference dataset
//! - **selector**: Four deterministic strategies from symbols to a record key
//! - **scorer**: Weighted attribution of the household layout to people
//! - **narrator**: Pure formatting of a record and a score into display text
//! - **engine**: Request orchestration and the success-or-error response
//!
//! Only the initial dataset load is asynchronous. Everything after it is
//! synchronous and pure.

pub mod config;
pub mod engine;
pub mod error;
pub mod narrator;
pub mod reference_store;
pub mod scorer;
pub mod selector;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use narrator::*;
pub use reference_store::*;
pub use scorer::*;
pub use selector::*;
