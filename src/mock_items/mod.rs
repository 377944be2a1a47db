pub mod models;
pub mod services;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;
