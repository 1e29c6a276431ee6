//! HTTP API routes

pub mod common;
pub mod hello;
pub mod utils;
