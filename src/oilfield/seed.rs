use super::{oil_fields, production_readings, sensors, wells};
use super::{sensors::SensorType, wells::WellStatus};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    TransactionTrait,
};

const READINGS_PER_SENSOR: u32 = 5;

struct FieldFixture {
    name: &'static str,
    location: &'static str,
    operator_company: &'static str,
    start_date: (i32, u32, u32),
}

const FIELDS: [FieldFixture; 2] = [
    FieldFixture {
        name: "Caspian Ridge",
        location: "Caspian Sea",
        operator_company: "BlueWave Oil",
        start_date: (2020, 9, 5),
    },
    FieldFixture {
        name: "Absheron Onshore",
        location: "Absheron",
        operator_company: "GreenRock",
        start_date: (2017, 3, 12),
    },
];

/// Row counts of the four oilfield tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub oil_fields: u64,
    pub wells: u64,
    pub sensors: u64,
    pub readings: u64,
}

fn date(ymd: (i32, u32, u32)) -> Result<NaiveDate, DbErr> {
    let (year, month, day) = ymd;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DbErr::Custom(format!("Invalid fixture date {year}-{month}-{day}")))
}

/// Wipe the oilfield tables and insert the fixture data.
///
/// Each field gets one active well ("<field> Well A"), one pressure sensor on
/// that well and five hourly readings starting 2025-01-01T00:00Z. Everything
/// runs in one transaction, so a failure leaves the previous contents intact.
pub async fn seed<C>(db: &C) -> Result<SeedSummary, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    clear(&txn).await?;

    for fixture in &FIELDS {
        let field = oil_fields::ActiveModel {
            name: Set(fixture.name.to_string()),
            location: Set(fixture.location.to_string()),
            operator_company: Set(fixture.operator_company.to_string()),
            start_date: Set(date(fixture.start_date)?),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let well = wells::ActiveModel {
            oil_field_id: Set(field.id),
            name: Set(format!("{} Well A", field.name)),
            status: Set(WellStatus::Active),
            drill_date: Set(date((2019, 1, 1))?),
            depth_m: Set(3200.0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let sensor = sensors::ActiveModel {
            well_id: Set(well.id),
            sensor_type: Set(SensorType::Pressure),
            install_date: Set(date((2022, 1, 1))?),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for hour in 0..READINGS_PER_SENSOR {
            let timestamp = Utc
                .with_ymd_and_hms(2025, 1, 1, hour, 0, 0)
                .single()
                .ok_or_else(|| DbErr::Custom(format!("Invalid reading hour {hour}")))?;

            production_readings::ActiveModel {
                sensor_id: Set(sensor.id),
                timestamp: Set(timestamp),
                value: Set(120.0 + f64::from(hour) * 1.5),
                unit: Set("bar".to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        tracing::debug!("Seeded oil field {} ({})", field.name, field.id);
    }

    txn.commit().await?;

    count_rows(db).await
}

/// Delete every oilfield row, children first
async fn clear<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    production_readings::Entity::delete_many().exec(db).await?;
    sensors::Entity::delete_many().exec(db).await?;
    wells::Entity::delete_many().exec(db).await?;
    oil_fields::Entity::delete_many().exec(db).await?;
    Ok(())
}

pub async fn count_rows<C: ConnectionTrait>(db: &C) -> Result<SeedSummary, DbErr> {
    Ok(SeedSummary {
        oil_fields: oil_fields::Entity::find().count(db).await?,
        wells: wells::Entity::find().count(db).await?,
        sensors: sensors::Entity::find().count(db).await?,
        readings: production_readings::Entity::find().count(db).await?,
    })
}
