//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::AccountModel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for AccountModel {
    fn from(model: Model) -> Self {
        AccountModel {
            id: model.id.to_string(),
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}
