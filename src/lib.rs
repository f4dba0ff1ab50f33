pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod model;
pub mod normalizer;
pub mod risk;
pub mod service;
pub mod tracing;
pub mod utils;

pub use error::*;

pub use layout::layout;
pub use layout::layout_scene;
pub use normalizer::normalize;
pub use risk::classify;

pub use error::Result;
