use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::handlers::Operation;

/// Which backend serves kitten data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StoreBackend::DynamoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => anyhow::bail!("expected 'dynamodb' or 'memory', got '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub kitten_table: String,
    pub dynamodb_endpoint: Option<String>,
    pub store_backend: StoreBackend,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let kitten_table = env::var("DYNAMODB_KITTEN_TABLE")
            .context("DYNAMODB_KITTEN_TABLE environment variable is required")?;

        let dynamodb_endpoint = env::var("DYNAMODB_ENDPOINT").ok();

        let store_backend = env::var("KITTEN_STORE")
            .unwrap_or_else(|_| "dynamodb".to_string())
            .parse::<StoreBackend>()
            .context("KITTEN_STORE must be 'dynamodb' or 'memory'")?;

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            kitten_table,
            dynamodb_endpoint,
            store_backend,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        tracing::info!("  Kitten table: {}", self.kitten_table);
        tracing::info!(
            "  DynamoDB endpoint: {}",
            self.dynamodb_endpoint.as_deref().unwrap_or("default (AWS)")
        );
    }
}

/// Operation a Lambda function serves
///
/// `KITTEN_OPERATION` wins; otherwise the runtime's `_HANDLER` setting is used,
/// so a function configured with handler `handler.create` serves create.
pub fn operation_from_env() -> Result<Operation> {
    let raw = env::var("KITTEN_OPERATION")
        .or_else(|_| env::var("_HANDLER"))
        .context("KITTEN_OPERATION or _HANDLER environment variable is required")?;

    raw.parse::<Operation>()
        .with_context(|| format!("Unknown kitten operation: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests in this module share process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DYNAMODB_KITTEN_TABLE");
            env::remove_var("DYNAMODB_ENDPOINT");
            env::remove_var("KITTEN_STORE");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("KITTEN_OPERATION");
            env::remove_var("_HANDLER");
        }
    }

    fn set_required_vars() {
        unsafe {
            env::set_var("DYNAMODB_KITTEN_TABLE", "kittens-test");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        set_required_vars();
        unsafe {
            env::set_var("DYNAMODB_ENDPOINT", "http://localhost:8000");
            env::set_var("KITTEN_STORE", "memory");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.kitten_table, "kittens-test");
        assert_eq!(config.dynamodb_endpoint, Some("http://localhost:8000".to_string()));
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        set_required_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.dynamodb_endpoint, None);
        assert_eq!(config.store_backend, StoreBackend::DynamoDb);
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_missing_table() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("DYNAMODB_KITTEN_TABLE"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        set_required_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_invalid_store_backend() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        set_required_vars();
        unsafe {
            env::set_var("KITTEN_STORE", "postgres");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("KITTEN_STORE"));
    }

    #[test]
    fn test_operation_from_handler_setting() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("_HANDLER", "handler.update");
        }

        assert_eq!(operation_from_env().unwrap(), Operation::Update);

        unsafe {
            env::set_var("KITTEN_OPERATION", "delete");
        }

        assert_eq!(operation_from_env().unwrap(), Operation::Delete);
    }

    #[test]
    fn test_operation_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();

        assert!(operation_from_env().is_err());
    }
}
