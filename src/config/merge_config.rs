use crate::core::merge::default_offset;
use crate::domain::model::{MergePlan, MergeSource};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_min, validate_non_empty, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 合併計畫
///
/// ```toml
/// [merge]
/// output = "data/ai-engr.json"
///
/// [[sources]]
/// path = "data/ai-engr1-data.json"
///
/// [[sources]]
/// path = "data/ai-engr2-data.json"
/// offset = 50
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    pub merge: MergeSection,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSection {
    pub output: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub path: String,
    /// 省略時為 50 * 來源順序
    pub offset: Option<i64>,
}

impl MergeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => EtlError::FileNotFound {
                path: path.as_ref().display().to_string(),
            },
            _ => EtlError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn to_plan(&self) -> MergePlan {
        MergePlan {
            sources: self
                .sources
                .iter()
                .enumerate()
                .map(|(i, s)| MergeSource {
                    path: s.path.clone(),
                    offset: s.offset.unwrap_or_else(|| default_offset(i)),
                })
                .collect(),
            output: self.merge.output.clone(),
        }
    }
}

impl Validate for MergeConfig {
    fn validate(&self) -> Result<()> {
        self.to_plan().validate()
    }
}

impl Validate for MergePlan {
    fn validate(&self) -> Result<()> {
        validate_path("merge.output", &self.output)?;
        validate_non_empty("sources", &self.sources)?;
        for source in &self.sources {
            validate_path("sources.path", &source.path)?;
            validate_min("sources.offset", source.offset, 0)?;
        }
        Ok(())
    }
}
