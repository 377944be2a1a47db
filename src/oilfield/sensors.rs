use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    #[sea_orm(string_value = "pressure")]
    Pressure,
    #[sea_orm(string_value = "temperature")]
    Temperature,
    #[sea_orm(string_value = "flowrate")]
    FlowRate,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sensors")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub well_id: i32,
    pub sensor_type: SensorType,
    pub install_date: Date,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wells::Entity",
        from = "Column::WellId",
        to = "super::wells::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Wells,
    #[sea_orm(has_many = "super::production_readings::Entity")]
    ProductionReadings,
}

impl Related<super::wells::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wells.def()
    }
}

impl Related<super::production_readings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionReadings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
