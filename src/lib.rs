pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{ConvertConfig, MergeArgs};

pub use crate::app::pipelines::{ConvertPipeline, MergePipeline};
pub use crate::config::cli::{LocalStorage, StdinConfirm};
pub use crate::core::etl::EtlEngine;
pub use crate::utils::error::{EtlError, Result};
