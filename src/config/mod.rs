use crate::model::date_validation::parse_valid_date_time;
use crate::util::env::{get_bool_from_env_or, get_env_or, get_size_from_env_or, get_vec_from_env_or, load_dotenv};
use anyhow::{bail, Result};

pub mod db;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Basic app info
    pub app_name: String,
    pub app_version: String,

    pub http: HTTPConfig,
    pub db: DBConfig,
    pub log: LogConfig,
    pub provider_states: ProviderStatesConfig,
}

#[derive(Debug, Clone)]
pub struct HTTPConfig {
    pub ip: String,
    pub port: u16,
    pub max_body_size: u64,
}

#[derive(Debug, Clone)]
pub struct DBConfig {
    pub url: String,
    pub pool_size: u32,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_requests: bool,
}

#[derive(Debug, Clone)]
pub struct ProviderStatesConfig {
    pub enabled: bool,
    // Dates inserted by "There is data" when the request carries none
    pub seed_dates: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    pub provider_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(AppConfig {
            app_name: get_env_or("APP_NAME", "DateVal".to_string())?,
            app_version: get_env_or("APP_VERSION", env!("CARGO_PKG_VERSION").to_string())?,
            http: HTTPConfig::from_env()?,
            db: DBConfig::from_env()?,
            log: LogConfig::from_env()?,
            provider_states: ProviderStatesConfig::from_env()?,
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.db.pool_size == 0 {
            bail!("DATABASE_POOL_SIZE must be greater than 0");
        }
        if self.http.max_body_size == 0 {
            bail!("HTTP_MAX_BODY_SIZE must be greater than 0");
        }
        for date in &self.provider_states.seed_dates {
            if parse_valid_date_time(date).is_err() {
                bail!("PROVIDER_STATES_SEED_DATES contains an invalid date: {:?}", date);
            }
        }
        Ok(())
    }
}

impl HTTPConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(HTTPConfig {
            ip: get_env_or("HTTP_IP", "127.0.0.1".to_string())?,
            port: get_env_or("HTTP_PORT", 9000)?,
            max_body_size: get_size_from_env_or("HTTP_MAX_BODY_SIZE", 64 * 1024)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

impl DBConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(DBConfig {
            url: get_env_or("DATABASE_URL", "sqlite://dates.db?mode=rwc".to_string())?,
            pool_size: get_env_or("DATABASE_POOL_SIZE", 5)?,
            auto_migrate: get_bool_from_env_or("DATABASE_AUTO_MIGRATE", true)?,
        })
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(LogConfig {
            log_requests: get_bool_from_env_or("LOG_REQUESTS", false)?,
        })
    }
}

impl ProviderStatesConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(ProviderStatesConfig {
            enabled: get_bool_from_env_or("PROVIDER_STATES_ENABLED", cfg!(debug_assertions))?,
            seed_dates: get_vec_from_env_or("PROVIDER_STATES_SEED_DATES", vec!["04/05/2018".to_string()])?,
        })
    }
}

impl ConsumerConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(ConsumerConfig {
            provider_url: get_env_or("CONSUMER_PROVIDER_URL", "http://localhost:9000".to_string())?,
        })
    }
}
