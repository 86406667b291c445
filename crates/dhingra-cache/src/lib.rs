//! Type-safe key-value storage slots for the Dhingra storefront.
//!
//! Provides a small, ergonomic API for keeping JSON-serialized values in named
//! slots, the way a browser keeps them in local storage. The backing store is
//! pluggable through [`KvStore`]:
//!
//! - [`MemoryStore`] keeps slots in process memory (tests, ephemeral sessions).
//! - [`FileStore`] keeps one file per slot under a directory (CLI sessions).
//!
//! # Example
//!
//! ```rust
//! use dhingra_cache::Cache;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     theme: String,
//! }
//!
//! let cache = Cache::in_memory();
//! cache.set("prefs", &Prefs { theme: "dark".into() })?;
//!
//! let prefs: Option<Prefs> = cache.get("prefs")?;
//! assert_eq!(prefs.unwrap().theme, "dark");
//!
//! cache.delete("prefs")?;
//! assert!(!cache.exists("prefs")?);
//! # Ok::<(), dhingra_cache::CacheError>(())
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
