pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod explorer;
pub mod model;
pub mod pages;
pub mod query;
