//! Transcript rendering.

pub mod assembler;
pub mod timestamp;

pub use assembler::assemble;
pub use timestamp::TimestampFormat;
