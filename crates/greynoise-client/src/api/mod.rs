//! API endpoint modules.

mod noise;
mod research;

pub use noise::NoiseApi;
pub use research::ResearchApi;
