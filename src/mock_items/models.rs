use chrono::SecondsFormat;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::errors::ApiResult;
use crate::validation_error;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mock_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body accepted by both create and update.
///
/// Fields are optional at the serde level so that a missing `name` reaches
/// validation and is reported per field instead of as a parse failure.
#[derive(ToSchema, Deserialize, Serialize, Debug, Clone, Default)]
pub struct MockItemPayload {
    #[schema(example = "Pump inspection")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Quarterly check of the booster pump")]
    pub description: Option<String>,
}

/// A payload that passed validation, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMockItem {
    pub name: String,
    pub description: String,
}

impl MockItemPayload {
    pub fn validate(self) -> ApiResult<NewMockItem> {
        let name = match self.name {
            None => return Err(validation_error!("name", "is required")),
            Some(name) if name.is_empty() => {
                return Err(validation_error!("name", "must not be empty"));
            }
            Some(name) => name,
        };

        Ok(NewMockItem {
            name,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Wire representation of a mock item
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MockItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// RFC 3339, UTC, second precision
    #[schema(example = "2025-01-01T08:30:00Z")]
    pub created_at: String,
}

impl From<Model> for MockItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
