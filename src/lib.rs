pub mod common;
pub mod config;
pub mod db;
pub mod mock_items;
pub mod oilfield;
pub mod routes;
