// src/lib.rs
pub mod config;
pub mod errors;
pub mod models;
pub mod form;
pub mod client;
pub mod render;
pub mod container;
pub mod handler;
pub mod banner;
