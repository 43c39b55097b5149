//! Player Presence Core Library
//!
//! Contains the player domain model, the typed error taxonomy and the
//! storage abstraction used by the presence HTTP service.

pub mod domain;
pub mod error;
pub mod repository;

pub use error::{CoreError, Result};
