// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod csv;
pub mod net;
pub mod pricing;
pub mod records;
pub mod session;
pub mod shuffle;
pub mod source;
pub mod store;

pub mod gui;
