//! Consumer side of the hero API.
//!
//! - [`hero_client::HeroClient`] talks to `/api/heroes` and narrates every call
//!   into a shared [`messages::MessageLog`].
//! - [`view::View`] plus the free functions in [`views`] hold page state
//!   (dashboard, list, detail) without any component base type.
//! - [`routes::Route`] maps browser paths to pages.

pub mod errors;
pub mod hero_client;
pub mod messages;
pub mod routes;
pub mod view;
pub mod views;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::ClientError;
pub use hero_client::{HeroBackend, HeroClient};
pub use messages::MessageLog;
pub use view::View;
