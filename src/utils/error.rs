use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid numeric key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid source file '{path}': {reason}")]
    InvalidSource { path: String, reason: String },

    #[error("Question {item}: single-answer question has no correct answer")]
    MissingCorrectAnswer { item: String },

    #[error("Conversion cancelled with {errors} validation error(s)")]
    ValidationRejected { errors: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 對應的程序退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FileNotFound { .. } | EtlError::InvalidJson { .. } => ErrorCategory::Input,
            EtlError::InvalidKey { .. }
            | EtlError::InvalidSource { .. }
            | EtlError::MissingCorrectAnswer { .. } => ErrorCategory::Data,
            EtlError::ValidationRejected { .. } => ErrorCategory::Validation,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        // 任何失敗都以退出碼 1 結束，系統錯誤也不例外
        match self.category() {
            ErrorCategory::Input
            | ErrorCategory::Data
            | ErrorCategory::Validation
            | ErrorCategory::Configuration
            | ErrorCategory::System => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::FileNotFound { .. } => "Check the input path and try again",
            EtlError::InvalidJson { .. } => "Fix the JSON syntax reported above and rerun",
            EtlError::InvalidKey { .. } => "Make sure every key and item-number is an integer",
            EtlError::InvalidSource { .. } => {
                "The file must hold a JSON object (a 'summary' object or a numeric-keyed map)"
            }
            EtlError::MissingCorrectAnswer { .. } => {
                "Add at least one entry to 'correct-answer' for this question"
            }
            EtlError::ValidationRejected { .. } => {
                "Fix the reported questions or rerun with --on-validation-error continue"
            }
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => "Review the command line or merge plan file",
            EtlError::IoError(_) | EtlError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FileNotFound { path } => {
                format!("Error: Input file '{}' does not exist.", path)
            }
            EtlError::InvalidJson { path, source } => {
                format!("Error: Invalid JSON in input file '{}': {}", path, source)
            }
            EtlError::ValidationRejected { .. } => "Conversion cancelled.".to_string(),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
