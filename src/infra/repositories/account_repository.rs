//! Account repository backed by the `accounts` table.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::{AccountModel, AddAccountModel};
use crate::errors::{AppError, AppResult};
use crate::services::{AddAccountRepository, LoadAccountByEmailRepository};

/// Concrete account store
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddAccountRepository for AccountStore {
    async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(account.name),
            email: Set(account.email),
            password: Set(account.password),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(AccountModel::from(model))
    }
}

#[async_trait]
impl LoadAccountByEmailRepository for AccountStore {
    async fn load_by_email(&self, email: &str) -> AppResult<Option<AccountModel>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AccountModel::from))
    }
}
