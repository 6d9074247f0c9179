use serde::{Deserialize, Serialize};

/// Default address of the analysis service when `ANALYZE_URL` is unset.
pub const DEFAULT_ANALYZE_URL: &str = "http://127.0.0.1:5000/analyze";

/// Settings for the outbound analysis request, read once at server startup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    pub analyze_url: String,
}

impl AnalysisConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // lookup is injected so tests never touch process environment
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let analyze_url =
            lookup("ANALYZE_URL").unwrap_or_else(|| DEFAULT_ANALYZE_URL.to_string());
        Self { analyze_url }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            analyze_url: DEFAULT_ANALYZE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = AnalysisConfig::from_lookup(|_| None);
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.analyze_url, "http://127.0.0.1:5000/analyze");
    }

    #[test]
    fn test_url_override() {
        let config = AnalysisConfig::from_lookup(|key| {
            (key == "ANALYZE_URL").then(|| "http://10.0.0.2:8080/analyze".to_string())
        });
        assert_eq!(config.analyze_url, "http://10.0.0.2:8080/analyze");
    }
}
