// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod aggregate;
pub mod data;
pub mod file;
pub mod ident;
pub mod page;
pub mod probe;
pub mod progress;
pub mod scrape;
