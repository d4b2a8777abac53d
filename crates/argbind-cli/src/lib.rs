//! Command-line front end: prepare arguments for a JavaScript callable from
//! JSON data, or show how its parameter list decomposes.

pub mod args;
pub mod driver;
pub mod tracing_config;
