pub mod config;
pub mod db;
pub mod notify;
pub mod routes;
pub mod scoring;
pub mod service;
pub mod types;
pub mod utils;
pub mod workflow;
