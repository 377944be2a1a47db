//! Oilfield production schema: fields own wells, wells own sensors, sensors
//! own production readings. Every ownership link cascades on delete.
//!
//! Nothing here is served over HTTP; the tables are filled by [`seed::seed`].

pub mod oil_fields;
pub mod production_readings;
pub mod seed;
pub mod sensors;
pub mod wells;
