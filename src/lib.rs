pub mod calendar;
pub mod config;
pub mod constants;
pub mod logger;
pub mod models;
pub mod physics;
pub mod report;
