use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_PAGE_SIZE: usize = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub token_path: PathBuf,
    pub request_timeout_secs: u64,
    pub page_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_base_url: var("MOODTUNES_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            token_path: var("MOODTUNES_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_token_path),
            request_timeout_secs: var("MOODTUNES_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".into())
                .parse()
                .unwrap_or(30),
            page_size: var("MOODTUNES_PAGE_SIZE")
                .unwrap_or_else(|| DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .ok()
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// `None` when timeouts are disabled (`MOODTUNES_REQUEST_TIMEOUT_SECS=0`).
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

fn default_token_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".moodtunes")
        .join("token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.page_size, 7);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert!(config.token_path.ends_with(".moodtunes/token"));
    }

    #[test]
    fn test_api_url_override_trims_trailing_slash() {
        let config = config_with(&[("MOODTUNES_API_URL", "https://api.example.com/ ")]);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_api_url_falls_back() {
        let config = config_with(&[("MOODTUNES_API_URL", "  ")]);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = config_with(&[("MOODTUNES_REQUEST_TIMEOUT_SECS", "0")]);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = config_with(&[
            ("MOODTUNES_REQUEST_TIMEOUT_SECS", "soon"),
            ("MOODTUNES_PAGE_SIZE", "0"),
        ]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.page_size, 7);
    }

    #[test]
    fn test_token_path_override() {
        let config = config_with(&[("MOODTUNES_TOKEN_PATH", "/tmp/mt/token")]);
        assert_eq!(config.token_path, PathBuf::from("/tmp/mt/token"));
    }
}
