// Core types shared across engine and game code

pub mod math;

pub use math::{clamp_index, IntPoint, IntRect};
