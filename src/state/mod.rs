pub mod config;
pub mod data_model;
pub mod grid_state;
pub mod i18n;
