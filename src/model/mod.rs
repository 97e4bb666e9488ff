//! Request and response payloads exchanged with the scheduling server

pub mod dtos;
pub mod structs;
