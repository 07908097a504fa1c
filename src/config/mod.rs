pub mod cli;
pub mod merge_config;

#[cfg(feature = "cli")]
use crate::core::merge::default_offset;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{MergePlan, MergeSource, ValidationPolicy};
#[cfg(feature = "cli")]
use crate::utils::error::{EtlError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// 原本合併流程固定使用的三個來源檔
pub const DEFAULT_MERGE_SOURCES: [&str; 3] = [
    "ai-engr1-data.json",
    "ai-engr2-data.json",
    "ai-engr3-data.json",
];
pub const DEFAULT_MERGE_OUTPUT: &str = "ai-engr.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "quiz-etl")]
#[command(about = "Convert quiz data from the summary format to the game textAnswer format")]
pub struct ConvertConfig {
    /// Input JSON file with a top-level "summary" list
    pub input: String,

    /// Output JSON file (parent directories are created)
    pub output: String,

    /// What to do when the converted data fails validation
    #[arg(long, value_enum, default_value_t = ValidationPolicy::Prompt)]
    pub on_validation_error: ValidationPolicy,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log elapsed time and memory after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for ConvertConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn validation_policy(&self) -> ValidationPolicy {
        self.on_validation_error
    }
}

#[cfg(feature = "cli")]
impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "combine_data")]
#[command(about = "Merge numbered JSON dictionaries, offsetting each source's keys by 50")]
pub struct MergeArgs {
    /// Source files in order (default: ai-engr1-data.json ai-engr2-data.json ai-engr3-data.json)
    pub sources: Vec<String>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_MERGE_OUTPUT)]
    pub output: String,

    /// TOML merge plan; overrides positional sources and --output
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log elapsed time and memory after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl MergeArgs {
    /// 依命令列或 TOML 檔建立合併計畫
    pub fn plan(&self) -> Result<MergePlan> {
        if let Some(config_path) = &self.config {
            let config = merge_config::MergeConfig::from_file(config_path)?;
            return Ok(config.to_plan());
        }

        let sources: Vec<String> = if self.sources.is_empty() {
            DEFAULT_MERGE_SOURCES.iter().map(|s| s.to_string()).collect()
        } else {
            self.sources.clone()
        };

        Ok(MergePlan {
            sources: sources
                .into_iter()
                .enumerate()
                .map(|(i, path)| MergeSource {
                    path,
                    offset: default_offset(i),
                })
                .collect(),
            output: self.output.clone(),
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for MergeArgs {
    fn validate(&self) -> Result<()> {
        if let Some(config_path) = &self.config {
            validate_path("config", config_path)?;
            if !self.sources.is_empty() {
                return Err(EtlError::ConfigValidationError {
                    field: "sources".to_string(),
                    message: "Positional sources cannot be combined with --config".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// 命令列用法錯誤與執行失敗一樣以退出碼 1 結束；--help / --version 則為 0
#[cfg(feature = "cli")]
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(feature = "cli")]
pub fn parse_or_exit<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(usage_exit_code(&e))
    })
}
