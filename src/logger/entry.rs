use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::errors::{LoggerError, Result};

/// How an entry is rendered into its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LineFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LineFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(LoggerError::validation(format!(
                "Invalid line format: '{}'. Valid: text, json",
                s
            ))),
        }
    }
}

/// A single message on its way to the log file. Not kept after the write.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub message: &'a str,
}

impl<'a> LogEntry<'a> {
    pub fn new(priority: Priority, message: &'a str) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            priority,
            message,
        }
    }

    pub fn without_timestamp(priority: Priority, message: &'a str) -> Self {
        Self {
            timestamp: None,
            priority,
            message,
        }
    }

    /// Render the entry as one line, without the trailing newline.
    pub fn render(&self, format: LineFormat) -> Result<String> {
        match format {
            LineFormat::Text => Ok(self.render_text()),
            LineFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }

    fn render_text(&self) -> String {
        let message = escape_line_breaks(self.message);
        match self.timestamp {
            Some(ts) => format!(
                "{} [{:<5}] {}",
                ts.format("%Y-%m-%d %H:%M:%S%.3f"),
                self.priority.as_ref(),
                message
            ),
            None => format!("[{:<5}] {}", self.priority.as_ref(), message),
        }
    }
}

// One call, one line.
fn escape_line_breaks(message: &str) -> String {
    message.replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_line_without_timestamp() {
        let entry = LogEntry::without_timestamp(Priority::Warn, "low on memory");
        assert_eq!(
            entry.render(LineFormat::Text).unwrap(),
            "[WARN ] low on memory"
        );
    }

    #[test]
    fn test_text_line_with_timestamp() {
        let entry = LogEntry {
            timestamp: Some(Utc.with_ymd_and_hms(2014, 3, 9, 18, 5, 1).unwrap()),
            priority: Priority::Err,
            message: "shader compile failed",
        };
        assert_eq!(
            entry.render(LineFormat::Text).unwrap(),
            "2014-03-09 18:05:01.000 [ERR  ] shader compile failed"
        );
    }

    #[test]
    fn test_text_line_escapes_newlines() {
        let entry = LogEntry::without_timestamp(Priority::Info, "first\nsecond\r\n");
        let line = entry.render(LineFormat::Text).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(line, "[INFO ] first\\nsecond\\r\\n");
    }

    #[test]
    fn test_json_line() {
        let entry = LogEntry::without_timestamp(Priority::Debug, "say \"hi\"\n");
        let line = entry.render(LineFormat::Json).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["priority"], "debug");
        assert_eq!(value["message"], "say \"hi\"\n");
        assert!(value.get("timestamp").is_none());
    }

    #[test]
    fn test_line_format_parse() {
        assert_eq!("JSON".parse::<LineFormat>().unwrap(), LineFormat::Json);
        assert!("xml".parse::<LineFormat>().is_err());
    }
}
