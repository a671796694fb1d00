pub mod cost_service;

pub use cost_service::*;
