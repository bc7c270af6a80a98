#![deny(missing_debug_implementations)]

//! # rallye-entities
//!
//! Reusable, agnostic domain entities for the Rallye backend.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod creator;
pub mod geo;
pub mod id;
pub mod location;
pub mod membership;
pub mod rally;
pub mod time;
pub mod user;
pub mod view;
pub mod visit;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
