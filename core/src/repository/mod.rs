//! Storage abstraction for player records

use crate::domain::{Player, PlayerInput};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "memory"))]
pub use memory::InMemoryPlayerRepository;
pub use postgres::PostgresPlayerRepository;

/// Abstract player storage
///
/// Handlers receive an implementation of this trait through application
/// state. Each method maps to exactly one statement against the backing store.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// List every player ordered by id
    async fn list(&self) -> Result<Vec<Player>>;

    /// Fetch one player, `CoreError::PlayerNotFound` if absent
    async fn get(&self, id: i32) -> Result<Player>;

    /// Insert a player and return it with its storage-assigned id
    async fn create(&self, input: &PlayerInput) -> Result<Player>;

    /// Overwrite the writable fields of a player.
    /// Returns the number of affected rows (0 when the id does not exist).
    async fn update(&self, id: i32, input: &PlayerInput) -> Result<u64>;

    /// Delete one player, returning the number of affected rows
    async fn delete(&self, id: i32) -> Result<u64>;

    /// Delete every player, returning the number of affected rows
    async fn delete_all(&self) -> Result<u64>;
}
