pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod docker;
pub mod error;
pub mod fleet;
pub mod keymap;
pub mod logging;
pub mod models;
pub mod monitor;
pub mod multiplexer;
pub mod tui;
pub mod ui;
