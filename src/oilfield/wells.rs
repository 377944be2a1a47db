use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "kebab-case")]
pub enum WellStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "shut-in")]
    ShutIn,
    #[sea_orm(string_value = "abandoned")]
    Abandoned,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wells")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub oil_field_id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub status: WellStatus,
    pub drill_date: Date,
    #[sea_orm(column_type = "Double")]
    pub depth_m: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::oil_fields::Entity",
        from = "Column::OilFieldId",
        to = "super::oil_fields::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    OilFields,
    #[sea_orm(has_many = "super::sensors::Entity")]
    Sensors,
}

impl Related<super::oil_fields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OilFields.def()
    }
}

impl Related<super::sensors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sensors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
