pub mod app;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod interface;
pub mod model;
