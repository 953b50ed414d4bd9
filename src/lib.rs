pub mod config;
pub mod domain;
pub mod errors;
pub mod report;
pub mod services;
pub mod sources;
