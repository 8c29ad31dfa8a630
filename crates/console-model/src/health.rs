//! Cluster component health.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Health of a cache or cache manager as reported by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentHealth {
    Healthy,
    HealthyRebalancing,
    Degraded,
    Failed,
    Unknown,
}

impl ComponentHealth {
    /// Returns the wire representation (e.g. `HEALTHY_REBALANCING`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentHealth::Healthy => "HEALTHY",
            ComponentHealth::HealthyRebalancing => "HEALTHY_REBALANCING",
            ComponentHealth::Degraded => "DEGRADED",
            ComponentHealth::Failed => "FAILED",
            ComponentHealth::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ComponentHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentHealth {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEALTHY" => Ok(ComponentHealth::Healthy),
            "HEALTHY_REBALANCING" => Ok(ComponentHealth::HealthyRebalancing),
            "DEGRADED" => Ok(ComponentHealth::Degraded),
            "FAILED" => Ok(ComponentHealth::Failed),
            "UNKNOWN" => Ok(ComponentHealth::Unknown),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_ignores_case_and_padding() {
        assert_eq!("HEALTHY".parse::<ComponentHealth>(), Ok(ComponentHealth::Healthy));
        assert_eq!(
            "healthy_rebalancing".parse::<ComponentHealth>(),
            Ok(ComponentHealth::HealthyRebalancing)
        );
        assert_eq!(" FAILED ".parse::<ComponentHealth>(), Ok(ComponentHealth::Failed));
        assert_eq!("health".parse::<ComponentHealth>(), Err(()));
        assert_eq!("".parse::<ComponentHealth>(), Err(()));
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&ComponentHealth::HealthyRebalancing).unwrap();
        assert_eq!(json, "\"HEALTHY_REBALANCING\"");

        let parsed: ComponentHealth = serde_json::from_str("\"DEGRADED\"").unwrap();
        assert_eq!(parsed, ComponentHealth::Degraded);
        assert_eq!(parsed.to_string(), "DEGRADED");
    }
}
