//! Server-error log backed by the `errors` table.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::entities::error_log::ActiveModel;
use crate::errors::{AppError, AppResult};
use crate::services::LogErrorRepository;

pub struct LogStore {
    db: DatabaseConnection,
}

impl LogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogErrorRepository for LogStore {
    async fn log_error(&self, stack: &str) -> AppResult<()> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            stack: Set(stack.to_owned()),
            date: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }
}
