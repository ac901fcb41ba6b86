pub mod assembler;
pub mod types;

pub use assembler::{assemble_chart, cast_chart, ChartAssembler};
pub use types::{Chart, ChartMeta};
