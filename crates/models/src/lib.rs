//! Record types shared by the store, the HTTP layer and the client.

pub mod errors;
pub mod resource;
pub mod hero;

pub use hero::{Hero, HeroInput};
pub use resource::Resource;
