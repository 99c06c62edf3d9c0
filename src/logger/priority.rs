use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::errors::LoggerError;

/// Log priority levels.
///
/// Setting a threshold only lets that level and higher through. `None` is
/// the lowest level and is never written itself, so a `None` threshold
/// accepts every other level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Priority {
    None = 0,
    #[default]
    Info = 1,
    Trace = 2,
    Debug = 3,
    Warn = 4,
    Err = 5,
}

impl Priority {
    /// Numeric value of the level, `0` for `None` through `5` for `Err`.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::iter().find(|p| p.value() == value)
    }

    /// Whether an entry at this priority is written under `threshold`.
    pub fn passes(self, threshold: Priority) -> bool {
        self != Priority::None && self >= threshold
    }

    /// Comma separated list of the accepted names, for error messages.
    pub fn valid_names() -> String {
        Self::iter()
            .map(|p| p.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for Priority {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, LoggerError> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_value(value).ok_or_else(|| {
                LoggerError::validation(format!(
                    "Invalid priority value: {}. Valid: 0-5",
                    value
                ))
            });
        }

        match trimmed.to_lowercase().as_str() {
            "none" => Ok(Priority::None),
            "info" => Ok(Priority::Info),
            "trace" => Ok(Priority::Trace),
            "debug" => Ok(Priority::Debug),
            "warn" | "warning" => Ok(Priority::Warn),
            "err" | "error" => Ok(Priority::Err),
            _ => Err(LoggerError::validation(format!(
                "Invalid priority: '{}'. Valid: {}",
                s,
                Self::valid_names()
            ))),
        }
    }
}

// Same spellings as `FromStr`, plus bare integers from TOML or
// `try_parsing` env values.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriorityVisitor;

        impl Visitor<'_> for PriorityVisitor {
            type Value = Priority;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a priority name or a number from 0 to 5")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Priority, E> {
                v.parse::<Priority>().map_err(|e| E::custom(e.message()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Priority, E> {
                u8::try_from(v)
                    .ok()
                    .and_then(Priority::from_value)
                    .ok_or_else(|| E::custom(format!("Invalid priority value: {}. Valid: 0-5", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Priority, E> {
                match u64::try_from(v) {
                    Ok(v) => self.visit_u64(v),
                    Err(_) => Err(E::custom(format!(
                        "Invalid priority value: {}. Valid: 0-5",
                        v
                    ))),
                }
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}
