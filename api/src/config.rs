use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_PATH: &str = "data/clinics.json";
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3005",
    "http://localhost:5173",
    "http://localhost:3000",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds on all interfaces
    pub port: u16,
    /// Location of the `{ "clinics": [...] }` document loaded at startup
    pub data_path: PathBuf,
    /// Origins allowed by CORS; a `*` entry allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.cors_allowed_origins);

        Self {
            port,
            data_path: get("CLINIC_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            cors_allowed_origins,
        }
    }

    /// Check if CORS should allow every origin
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, PathBuf::from("data/clinics.json"));
        assert_eq!(config.cors_allowed_origins.len(), 3);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CLINIC_DATA_PATH", "/srv/clinics.json"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("/srv/clinics.json"));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "eighty")]));

        assert_eq!(config.port, 3000);
    }

    #[test]
    fn wildcard_origin() {
        let config = Config::from_lookup(lookup(&[("CORS_ALLOWED_ORIGINS", "*")]));

        assert!(config.allows_any_origin());
    }
}
