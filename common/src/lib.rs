//! Shared core of the reservation admin client: records exchanged with the
//! REST backend, date/time normalisation, and the resource stores the views
//! are built on. Nothing in this crate touches the DOM.

pub mod config;
pub mod datetime;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
