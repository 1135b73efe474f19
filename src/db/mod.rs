pub mod answer;
pub mod evaluation;
pub mod notification;
pub mod postgres_service;
pub mod settings;
pub mod user;
