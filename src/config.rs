use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string())
            .into();

        let content_dir = env::var("CONTENT_DIR")
            .unwrap_or_else(|_| "content".to_string())
            .into();

        Ok(Config {
            port,
            host,
            static_dir,
            content_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Static assets from: {}", self.static_dir.display());
        tracing::info!("  Named resources from: {}", self.content_dir.display());
        tracing::info!("  Service listening on: {}:{}", self.host, self.port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // The test runner is multi-threaded and these tests all mutate the same
    // process environment, so they take a shared lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_and_clear_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("PORT");
            env::remove_var("HOST");
            env::remove_var("STATIC_DIR");
            env::remove_var("CONTENT_DIR");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = lock_and_clear_env();
        unsafe {
            env::set_var("PORT", "8080");
            env::set_var("HOST", "127.0.0.1");
            env::set_var("STATIC_DIR", "assets");
            env::set_var("CONTENT_DIR", "data");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.static_dir, PathBuf::from("assets"));
        assert_eq!(config.content_dir, PathBuf::from("data"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = lock_and_clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_and_clear_env();
        unsafe {
            env::set_var("PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = lock_and_clear_env();
        unsafe {
            env::set_var("PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
