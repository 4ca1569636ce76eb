use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Access tokens are valid for this many days from issuance. There is
    /// exactly one TTL; everything that issues a token reads it from here.
    pub token_ttl_days: i64,
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let token_ttl_days: i64 = env_or("HIRELINE_TOKEN_TTL_DAYS", "7")
            .parse()
            .map_err(|e| format!("Invalid HIRELINE_TOKEN_TTL_DAYS: {e}"))?;

        let host: IpAddr = env_or("HIRELINE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HIRELINE_HOST: {e}"))?;

        let port: u16 = env_or("HIRELINE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid HIRELINE_PORT: {e}"))?;

        let max_upload_size: usize = env_or("HIRELINE_MAX_UPLOAD_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid HIRELINE_MAX_UPLOAD_SIZE: {e}"))?;

        let log_level = env_or("HIRELINE_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            token_ttl_days,
            host,
            port,
            max_upload_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
