//! Page state records and the handlers that drive them.
//!
//! Every handler awaits the backend, then applies the outcome through
//! [`View::apply`](crate::view::View::apply). A failed call records a short
//! error on the page and leaves everything else as it was.

pub mod hero_detail;
pub mod heroes;
pub mod home;
