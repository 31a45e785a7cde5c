pub mod api;
pub mod catalog;
pub mod duration;
pub mod error;
pub mod matcher;
pub mod model;
