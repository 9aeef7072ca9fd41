use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response from server: {message}")]
    InvalidResponse { message: String },

    #[error("Server returned errcode {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Category not found: {name}")]
    CategoryNotFound { name: String },

    #[error("Category has no entries: {name}")]
    EmptyCategory { name: String },

    #[error("Cannot derive a subject from an empty title")]
    EmptyTitle,

    #[error("A sort for category '{name}' is already in flight")]
    SortInFlight { name: String },

    #[error("No preset named '{label}'")]
    PresetNotFound { label: String },

    #[error("Clipboard write failed: {message}")]
    ClipboardError { message: String },

    #[error("Collation unavailable: {message}")]
    CollationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Preset file parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TidyError {
    /// 配置/用法錯誤與運行期失敗使用不同的退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            TidyError::ConfigError { .. }
            | TidyError::InvalidConfigValueError { .. }
            | TidyError::TomlError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TidyError>;
