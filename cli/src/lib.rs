//! Command-line front end for the Students resource.
//!
//! # Design
//! - `state` is the explicit state container: a pure reducer over
//!   `idle | loading | success | error`, so a message and an error can never
//!   be shown together.
//! - `form` turns raw user input into typed payloads, rejecting incomplete
//!   input before any request is made.
//! - `app` runs the handlers against any `Transport` and keeps the last
//!   successful read as the displayed snapshot.

pub mod app;
pub mod form;
pub mod render;
pub mod state;

pub use app::App;
pub use form::{FormError, StudentForm};
pub use state::{Action, Status, View};
