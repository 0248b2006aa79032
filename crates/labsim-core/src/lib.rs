pub mod action;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod item;
pub mod practice;
pub mod rule;
pub mod vessel;

pub use error::LabError;
