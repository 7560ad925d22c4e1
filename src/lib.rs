pub mod app;
pub mod cache;
pub mod classify;
pub mod config;
pub mod domain;
pub mod elevation;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod inat;
mod labels;
pub mod lookup;
pub mod output;
pub mod report;
pub mod resolve;
