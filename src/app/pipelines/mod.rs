pub mod convert_pipeline;
pub mod merge_pipeline;

pub use convert_pipeline::ConvertPipeline;
pub use merge_pipeline::MergePipeline;
