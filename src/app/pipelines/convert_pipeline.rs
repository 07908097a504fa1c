use crate::config::cli::StdinConfirm;
use crate::core::convert::convert_quiz;
use crate::core::validator::validate_quiz;
use crate::core::{Confirm, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{ConversionResult, QuizSource, ValidationPolicy};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

pub const CONTINUE_PROMPT: &str = "Continue with conversion despite errors?";

/// summary 題庫 -> 遊戲 textAnswer 題庫
pub struct ConvertPipeline<S: Storage, C: ConfigProvider, K: Confirm = StdinConfirm> {
    storage: S,
    config: C,
    confirm: K,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_confirm(storage, config, StdinConfirm)
    }
}

impl<S: Storage, C: ConfigProvider, K: Confirm> ConvertPipeline<S, C, K> {
    pub fn with_confirm(storage: S, config: C, confirm: K) -> Self {
        Self {
            storage,
            config,
            confirm,
        }
    }

    /// 依設定決定驗證失敗時是否繼續
    fn gate(&self, errors: &[String]) -> Result<()> {
        if errors.is_empty() {
            println!("Validation passed!");
            return Ok(());
        }

        println!("\nValidation errors found:");
        for error in errors {
            println!("  - {}", error);
            tracing::warn!("{}", error);
        }
        println!("\nTotal errors: {}", errors.len());

        let proceed = match self.config.validation_policy() {
            ValidationPolicy::Continue => true,
            ValidationPolicy::Abort => false,
            ValidationPolicy::Prompt => self.confirm.confirm(CONTINUE_PROMPT),
        };

        if proceed {
            tracing::warn!(
                "⚠️ Continuing despite {} validation error(s)",
                errors.len()
            );
            Ok(())
        } else {
            Err(EtlError::ValidationRejected {
                errors: errors.len(),
            })
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Confirm> Pipeline for ConvertPipeline<S, C, K> {
    type Extracted = QuizSource;
    type Transformed = ConversionResult;

    async fn extract(&self) -> Result<QuizSource> {
        let input_path = self.config.input_path();
        println!("Reading input file: {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        let invalid_json = |e: serde_json::Error| EtlError::InvalidJson {
            path: input_path.to_string(),
            source: e,
        };
        let value: Value = serde_json::from_slice(&bytes).map_err(invalid_json)?;

        // 題庫必須是含 summary 的物件，陣列等其他型別不接受
        if !value.is_object() {
            return Err(EtlError::InvalidSource {
                path: input_path.to_string(),
                reason: "top-level value must be a JSON object with a 'summary' list"
                    .to_string(),
            });
        }
        let source: QuizSource = serde_json::from_value(value).map_err(invalid_json)?;

        tracing::debug!("Loaded {} summary records", source.summary.len());
        Ok(source)
    }

    async fn transform(&self, data: QuizSource) -> Result<ConversionResult> {
        println!("Converting quiz data...");
        let questions = convert_quiz(&data)?;

        println!("Validating converted data...");
        let validation_errors = validate_quiz(&questions)?;
        self.gate(&validation_errors)?;

        Ok(ConversionResult {
            questions,
            validation_errors,
        })
    }

    async fn load(&self, result: ConversionResult) -> Result<String> {
        let output_path = self.config.output_path();
        println!("Writing output file: {}", output_path);

        let json = serde_json::to_string_pretty(&result.questions)?;
        self.storage.write_file(output_path, json.as_bytes()).await?;

        println!("\n✓ Conversion complete!");
        println!("  Questions converted: {}", result.questions.len());
        println!("  Output saved to: {}", output_path);
        if !result.validation_errors.is_empty() {
            println!(
                "  Written with {} validation error(s)",
                result.validation_errors.len()
            );
        }

        Ok(output_path.to_string())
    }
}
