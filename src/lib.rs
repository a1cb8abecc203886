#[cfg(feature = "ffi")]
pub mod client;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod geometry;
pub mod layouts;
pub mod normalize;
pub mod pruner;
pub mod ranker;
pub mod scorer;
pub mod simulate;
#[cfg(feature = "wasm")]
pub mod wasm;
// cmd and reports are binary modules (declared in main.rs).

pub use engine::SwipeEngine;
pub use error::{LoadError, SwResult, SwipeError};
pub use scorer::Prediction;

#[cfg(feature = "wasm")]
pub use wasm::*;
