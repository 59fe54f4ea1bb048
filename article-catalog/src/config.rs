use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "ARTICLE_CATALOG_HOST";
    pub const PORT: &str = "ARTICLE_CATALOG_PORT";
    /// Set to "false" or "0" to start with an empty catalog.
    /// Default: true (one sample article is created at boot).
    pub const SEED: &str = "ARTICLE_CATALOG_SEED";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const SEED: bool = true;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_sample_article: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "{}={:?} is not a valid port, using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            seed_sample_article: lookup(env_vars::SEED)
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults::SEED),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
