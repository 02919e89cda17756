use chrono::Duration;

pub const DEFAULT_SECRET: &str = "your_secret_key_here";
pub const DEFAULT_TTL_SECONDS: i64 = 3600;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is invalid ({value:?}): {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_SECRET.to_string(),
            token_ttl: Duration::seconds(DEFAULT_TTL_SECONDS),
            port: DEFAULT_PORT,
            username: "admin".to_string(),
            password: "123".to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let jwt_secret = non_empty("JWT_SECRET", lookup("JWT_SECRET"), defaults.jwt_secret)?;
        let username = non_empty("AUTH_USERNAME", lookup("AUTH_USERNAME"), defaults.username)?;
        let password = non_empty("AUTH_PASSWORD", lookup("AUTH_PASSWORD"), defaults.password)?;

        let token_ttl = match lookup("TOKEN_TTL_SECONDS") {
            None => defaults.token_ttl,
            Some(value) => match value.trim().parse::<i64>() {
                Ok(seconds) if seconds > 0 => Duration::seconds(seconds),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "TOKEN_TTL_SECONDS",
                        value,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
        };

        let port = match lookup("PORT") {
            None => defaults.port,
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: value.clone(),
                reason: "expected a port number",
            })?,
        };

        Ok(Self {
            jwt_secret,
            token_ttl,
            port,
            username,
            password,
        })
    }
}

fn non_empty(
    var: &'static str,
    value: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) if value.is_empty() => Err(ConfigError::Invalid {
            var,
            value,
            reason: "must not be empty",
        }),
        Some(value) => Ok(value),
    }
}
