use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScheduleError};
use crate::types::MonthOverflow;

/// default bound on projected entries (ten years of monthly payments)
pub const DEFAULT_MAX_ENTRIES: usize = 120;

/// projection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// hard cap on produced entries, guarantees termination
    pub max_entries: usize,
    pub month_overflow: MonthOverflow,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            month_overflow: MonthOverflow::Carry,
        }
    }
}

impl ScheduleConfig {
    /// end-of-month plans pinned to the last day instead of spilling over
    pub fn clamped() -> Self {
        Self {
            month_overflow: MonthOverflow::Clamp,
            ..Self::default()
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_month_overflow(mut self, month_overflow: MonthOverflow) -> Self {
        self.month_overflow = month_overflow;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(ScheduleError::InvalidConfiguration {
                message: "max_entries must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.max_entries, 120);
        assert_eq!(config.month_overflow, MonthOverflow::Carry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = ScheduleConfig::default().with_max_entries(0);
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config: ScheduleConfig =
            serde_json::from_str(r#"{"max_entries": 24, "month_overflow": "clamp"}"#).unwrap();
        assert_eq!(config, ScheduleConfig::clamped().with_max_entries(24));
    }
}
