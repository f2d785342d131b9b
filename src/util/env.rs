use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

static LOAD_ENV: OnceLock<()> = OnceLock::new();

/// Loads `.env` files once per process.
///
/// Later files only fill in keys that are still unset, so the order is also the precedence:
/// 1. the real process environment
/// 2. `.env`
/// 3. `.env.dev` (debug builds) or `.env.prod` (release builds)
/// 4. `.env.local`
pub fn load_dotenv() {
    LOAD_ENV.get_or_init(|| {
        dotenv().ok();

        let env_file = if cfg!(debug_assertions) { ".env.dev" } else { ".env.prod" };
        if Path::new(env_file).exists() {
            dotenvy::from_filename(env_file).ok();
        }

        if Path::new(".env.local").exists() {
            dotenvy::from_filename(".env.local").ok();
        }
    });
}

/// Reads `key` and parses it into `T`, falling back to `default` when unset.
pub fn get_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    match env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| anyhow!("Failed to parse {} env var: {:?}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Reads a comma separated list. Items are trimmed, empty items are skipped.
pub fn get_vec_from_env_or<T>(key: &str, default: Vec<T>) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    match env::var(key) {
        Ok(val) => val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse()
                    .map_err(Into::into)
                    .context(format!("Failed to parse {} env var", key))
            })
            .collect(),
        Err(_) => Ok(default),
    }
}

/// Reads a byte size such as `64k` or `10M`.
pub fn get_size_from_env_or(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(val) => parse_size(&val).ok_or_else(|| anyhow!("Failed to parse {} env var", key)),
        Err(_) => Ok(default),
    }
}

/// Reads a boolean, accepting `true/false`, `1/0`, `yes/no` and `on/off`.
pub fn get_bool_from_env_or(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Ok(value) => parse_bool(&value)
            .ok_or_else(|| anyhow!("Failed to parse {} env var as `bool`", key)),
        Err(_) => Ok(default),
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses a size with an optional K, M or G suffix (case-insensitive, powers of 1024).
pub fn parse_size(size_str: &str) -> Option<u64> {
    let size_str = size_str.to_lowercase();

    let (num_part, multiplier) = match size_str.chars().last()? {
        'k' => (&size_str[..size_str.len() - 1], 1024u64),
        'm' => (&size_str[..size_str.len() - 1], 1024u64 * 1024),
        'g' => (&size_str[..size_str.len() - 1], 1024u64 * 1024 * 1024),
        _ => (size_str.as_str(), 1),
    };

    num_part.parse::<u64>().ok()?.checked_mul(multiplier)
}
