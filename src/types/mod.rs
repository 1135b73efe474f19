pub mod error;
pub mod evaluation;
pub mod mail;
pub mod response;
pub mod user;
