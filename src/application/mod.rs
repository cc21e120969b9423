//! Application layer - orchestration of a complete render.
//!
//! The domain supplies pure pieces (resolution, aggregation, slicing,
//! section builders); the assembler here runs them in the fixed pipeline
//! order and writes the result through the sink port.

mod assembler;

pub use assembler::{RenderInput, RenderOutcome, ReportAssembler};
