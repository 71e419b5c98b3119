//! The per-file transcription pipeline.

pub mod driver;
pub mod inference;

pub use inference::{DiarPipeline, DiarPipelineConfig};
