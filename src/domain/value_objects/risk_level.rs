use serde::{Deserialize, Deserializer, Serialize};

/// Ordinal severity used both for whole reports and for individual issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// Lowercase spelling stored in audit log details.
    pub fn audit_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            "CRITICAL" => Ok(RiskLevel::Critical),
            _ => Err(format!("Invalid risk level: {}", s)),
        }
    }

    /// HIGH and CRITICAL reports are the ones scheduled for re-analysis.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }

    pub fn elevated() -> [RiskLevel; 2] {
        [RiskLevel::High, RiskLevel::Critical]
    }
}

// Model output is not consistent about casing, so parsing goes through from_string.
impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        RiskLevel::from_string(&raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!(RiskLevel::from_string("high").unwrap(), RiskLevel::High);
        assert_eq!(RiskLevel::from_string(" Critical ").unwrap(), RiskLevel::Critical);
        assert!(RiskLevel::from_string("severe").is_err());
    }

    #[test]
    fn test_serde_spelling() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");

        let parsed: RiskLevel = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, RiskLevel::Low);
    }

    #[test]
    fn test_elevated_levels() {
        assert!(RiskLevel::High.is_elevated());
        assert!(RiskLevel::Critical.is_elevated());
        assert!(!RiskLevel::Medium.is_elevated());
        assert!(RiskLevel::Critical > RiskLevel::Low);
        assert_eq!(RiskLevel::High.audit_label(), "high");
    }
}
