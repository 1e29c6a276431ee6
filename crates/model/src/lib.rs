#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Data types for the HTTP API.

pub mod common;
pub use common::*;

pub mod hello;
pub use hello::*;
