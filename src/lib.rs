pub mod action;
pub mod action_handler;
pub mod app;
pub mod catalog;
pub mod config;
pub mod file_loader;
pub mod input;
pub mod logging;
pub mod state;

mod ui;
