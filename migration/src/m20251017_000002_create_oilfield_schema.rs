use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OilFields::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OilFields::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OilFields::Name).text().not_null())
                    .col(ColumnDef::new(OilFields::Location).text().not_null())
                    .col(ColumnDef::new(OilFields::OperatorCompany).text().not_null())
                    .col(ColumnDef::new(OilFields::StartDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wells::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wells::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wells::OilFieldId).integer().not_null())
                    .col(ColumnDef::new(Wells::Name).text().not_null())
                    .col(
                        ColumnDef::new(Wells::Status)
                            .text()
                            .not_null()
                            .check(Expr::col(Wells::Status).is_in([
                                "active",
                                "shut-in",
                                "abandoned",
                            ])),
                    )
                    .col(ColumnDef::new(Wells::DrillDate).date().not_null())
                    .col(ColumnDef::new(Wells::DepthM).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wells_oil_field_id")
                            .from(Wells::Table, Wells::OilFieldId)
                            .to(OilFields::Table, OilFields::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sensors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sensors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sensors::WellId).integer().not_null())
                    .col(
                        ColumnDef::new(Sensors::SensorType)
                            .text()
                            .not_null()
                            .check(Expr::col(Sensors::SensorType).is_in([
                                "pressure",
                                "temperature",
                                "flowrate",
                            ])),
                    )
                    .col(ColumnDef::new(Sensors::InstallDate).date().not_null())
                    .col(
                        ColumnDef::new(Sensors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensors_well_id")
                            .from(Sensors::Table, Sensors::WellId)
                            .to(Wells::Table, Wells::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductionReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductionReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductionReadings::SensorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductionReadings::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductionReadings::Value).double().not_null())
                    .col(ColumnDef::new(ProductionReadings::Unit).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_readings_sensor_id")
                            .from(ProductionReadings::Table, ProductionReadings::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes on the foreign keys and on the reading time axis
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_wells_oil_field_id")
                    .table(Wells::Table)
                    .col(Wells::OilFieldId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sensors_well_id")
                    .table(Sensors::Table)
                    .col(Sensors::WellId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_production_readings_sensor_id")
                    .table(ProductionReadings::Table)
                    .col(ProductionReadings::SensorId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_production_readings_timestamp")
                    .table(ProductionReadings::Table)
                    .col(ProductionReadings::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(
                Table::drop()
                    .table(ProductionReadings::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Sensors::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wells::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OilFields::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum OilFields {
    Table,
    Id,
    Name,
    Location,
    OperatorCompany,
    StartDate,
}

#[derive(DeriveIden)]
enum Wells {
    Table,
    Id,
    OilFieldId,
    Name,
    Status,
    DrillDate,
    DepthM,
}

#[derive(DeriveIden)]
enum Sensors {
    Table,
    Id,
    WellId,
    SensorType,
    InstallDate,
    IsActive,
}

#[derive(DeriveIden)]
enum ProductionReadings {
    Table,
    Id,
    SensorId,
    Timestamp,
    Value,
    Unit,
}
