#![warn(clippy::pedantic)]

pub mod badge;
pub mod log;
mod service;

pub use service::Service;
