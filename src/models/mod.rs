pub mod calendar;
pub mod classify;
pub mod climate;
pub mod error;
pub mod export;
pub mod location;
pub mod preferences;
pub mod query;
pub mod views;
