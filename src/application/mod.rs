//! Application services layer.

pub mod admin;
pub mod chrome;
pub mod clock;
pub mod context;
pub mod error;
pub mod repos;
pub mod site;
pub mod store;
pub mod stream;
