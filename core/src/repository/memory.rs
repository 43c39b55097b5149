//! In-memory repository used as a storage double in tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Player, PlayerInput};
use crate::error::{CoreError, Result};
use crate::repository::PlayerRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Player>,
    last_id: i32,
}

/// Player repository keeping rows in a process-local map.
///
/// Identifiers behave like a `SERIAL` column: they start at 1 and are never
/// reused, even after deletes.
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    table: Mutex<Table>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|e| CoreError::StorageUnavailable(e.to_string()))
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn list(&self) -> Result<Vec<Player>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Player> {
        self.lock()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(CoreError::PlayerNotFound(id))
    }

    async fn create(&self, input: &PlayerInput) -> Result<Player> {
        let mut table = self.lock()?;
        table.last_id += 1;
        let player = input.clone().into_player(table.last_id);
        table.rows.insert(player.id, player.clone());
        Ok(player)
    }

    async fn update(&self, id: i32, input: &PlayerInput) -> Result<u64> {
        let mut table = self.lock()?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = input.clone().into_player(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        Ok(self.lock()?.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut table = self.lock()?;
        let count = table.rows.len() as u64;
        table.rows.clear();
        Ok(count)
    }
}
