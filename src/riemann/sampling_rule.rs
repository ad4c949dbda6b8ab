use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algebra_error::AlgebraError;

/// Which x-position within a sub-interval sets the rectangle's height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SamplingRule {
    Left,
    Right,
    Middle,
}

impl FromStr for SamplingRule {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(SamplingRule::Left),
            "right" => Ok(SamplingRule::Right),
            "middle" | "mid" | "midpoint" => Ok(SamplingRule::Middle),
            _ => Err(AlgebraError::invalid_argument(format!(
                "Unknown sampling rule '{}', expected left, right or middle",
                s
            ))),
        }
    }
}

impl TryFrom<String> for SamplingRule {
    type Error = AlgebraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for SamplingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SamplingRule::Left => "left",
            SamplingRule::Right => "right",
            SamplingRule::Middle => "middle",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_rule_parse() {
        assert_eq!("Left".parse::<SamplingRule>().ok(), Some(SamplingRule::Left));
        assert_eq!(" RIGHT ".parse::<SamplingRule>().ok(), Some(SamplingRule::Right));
        assert_eq!("midpoint".parse::<SamplingRule>().ok(), Some(SamplingRule::Middle));

        let err = "trapezoid".parse::<SamplingRule>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sampling_rule_serde() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&SamplingRule::Middle)?, "\"middle\"");
        let rule: SamplingRule = serde_json::from_str("\"Mid\"")?;
        assert_eq!(rule, SamplingRule::Middle);
        assert!(serde_json::from_str::<SamplingRule>("\"top\"").is_err());
        Ok(())
    }
}
