//! # rallye-core
//!
//! Domain logic of the Rallye backend: the repository contracts towards
//! the relational store and the use cases operating on them.

pub mod db;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use rallye_entities::{
        creator::*, geo::*, id::*, location::*, membership::*, rally::*, time::*, user::*,
        view::*, visit::*,
    };
}
