pub mod api;
pub mod mirror;
pub mod ui;
