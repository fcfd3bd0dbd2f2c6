/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, DATABASE_URL, JWT_SECRET, CORS 許可など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - 読み込み元は lookup 関数で差し替え可能 (テストでは HashMap を渡す)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // None の場合は in-memory store で起動する (development のみ)
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    pub sqids_min_length: usize,
    pub sqids_alphabet: String,

    pub jwt_secret: String,
    pub jwt_leeway_seconds: u64,
    pub jwt_require_exp: bool,
}

// JWT_SECRET を含むので Debug で値を出さない
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("database_configured", &self.database_url.is_some())
            .field("database_max_connections", &self.database_max_connections)
            .field("sqids_min_length", &self.sqids_min_length)
            .field("jwt_leeway_seconds", &self.jwt_leeway_seconds)
            .field("jwt_require_exp", &self.jwt_require_exp)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        if database_url.is_none() && app_env.is_production() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };

        let sqids_min_length = match lookup("SQIDS_MIN_LENGTH") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n <= u8::MAX as usize)
                .ok_or(ConfigError::Invalid("SQIDS_MIN_LENGTH"))?,
            None => 10,
        };

        let sqids_alphabet = lookup("SQIDS_ALPHABET").unwrap_or_else(|| {
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_string()
        });

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let jwt_leeway_seconds = match lookup("JWT_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("JWT_LEEWAY_SECONDS"))?,
            None => 60,
        };

        let jwt_require_exp = match lookup("JWT_REQUIRE_EXP")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("true") | Some("1") | Some("yes") => true,
            Some("false") | Some("0") | Some("no") => false,
            Some(_) => return Err(ConfigError::Invalid("JWT_REQUIRE_EXP")),
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            database_url,
            database_max_connections,
            sqids_min_length,
            sqids_alphabet,
            jwt_secret,
            jwt_leeway_seconds,
            jwt_require_exp,
        })
    }
}
