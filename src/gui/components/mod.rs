// src/gui/components/mod.rs
pub mod nav_bar;
