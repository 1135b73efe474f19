pub mod mail;
pub mod push;
pub mod webutils;
