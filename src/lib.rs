// repocard - GitHub repository card for the terminal.

pub mod app;
pub mod cache;
pub mod error;
pub mod github;
pub mod models;
pub mod ui;
