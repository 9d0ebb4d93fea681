//! Storage abstractions for service layer
//!
//! One JSON file per entity type, holding the whole list. A store instance is
//! opened per request through [`ResourceStores`], which also serialises access
//! to each file.

pub mod json_list_store;
pub mod locks;
pub mod session;

pub use json_list_store::JsonListStore;
pub use locks::ResourceLocks;
pub use session::{ResourceStores, StoreSession};
