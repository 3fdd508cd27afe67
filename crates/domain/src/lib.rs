#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod classification;
mod error;
mod exercise;
mod service;
mod sex;
mod threshold;
mod weight;

pub use classification::*;
pub use error::*;
pub use exercise::*;
pub use service::*;
pub use sex::*;
pub use threshold::*;
pub use weight::*;
