use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    FileNotOpen(String),
    FileOperation(String),
    Config(String),
    Validation(String),
    Serialization(String),
}

impl LoggerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LoggerError::FileNotOpen(_) => "E001",
            LoggerError::FileOperation(_) => "E002",
            LoggerError::Config(_) => "E003",
            LoggerError::Validation(_) => "E004",
            LoggerError::Serialization(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LoggerError::FileNotOpen(_) => "Log File Not Open",
            LoggerError::FileOperation(_) => "File Operation Error",
            LoggerError::Config(_) => "Configuration Error",
            LoggerError::Validation(_) => "Validation Error",
            LoggerError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LoggerError::FileNotOpen(msg) => msg,
            LoggerError::FileOperation(msg) => msg,
            LoggerError::Config(msg) => msg,
            LoggerError::Validation(msg) => msg,
            LoggerError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LoggerError {}

// 便捷的构造函数
impl LoggerError {
    pub fn file_not_open<T: Into<String>>(msg: T) -> Self {
        LoggerError::FileNotOpen(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LoggerError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LoggerError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LoggerError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LoggerError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LoggerError {
    fn from(err: serde_json::Error) -> Self {
        LoggerError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for LoggerError {
    fn from(err: toml::ser::Error) -> Self {
        LoggerError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LoggerError {
    fn from(err: config::ConfigError) -> Self {
        LoggerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoggerError>;
