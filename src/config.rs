use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HABITS_URL: &str = "http://127.0.0.1:3000/api/habits";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub habits_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(env::var("PORT").ok(), env::var("HABITS_API_URL").ok())
    }

    fn from_values(port: Option<String>, habits_url: Option<String>) -> Self {
        let port = port
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let habits_url = habits_url
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HABITS_URL.to_string());

        Self { port, habits_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.habits_url, DEFAULT_HABITS_URL);
    }

    #[test]
    fn invalid_or_blank_values_fall_back() {
        let config = Config::from_values(Some("eighty".into()), Some("   ".into()));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.habits_url, DEFAULT_HABITS_URL);
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_values(
            Some("9000".into()),
            Some("http://backend:4000/api/habits ".into()),
        );
        assert_eq!(config.port, 9000);
        assert_eq!(config.habits_url, "http://backend:4000/api/habits");
    }
}
