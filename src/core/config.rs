use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Blob storage configuration for uploaded documents
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL prepended to served file paths (empty for relative URLs)
    pub public_base_url: String,
}

/// Artificial latency applied by the in-memory repository, in milliseconds.
///
/// Exists only to exercise loading-state UI against realistic delays.
/// A value of 0 disables the delay for that operation.
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub single_ms: u64,
    pub bulk_ms: u64,
    pub global_ms: u64,
    pub delete_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            latency: LatencyConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "SEED_DEMO_DATA must be true or false".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            seed_demo_data,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "SopHub API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for SopHub".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        // Empty base URL keeps file paths host-relative, which is what the
        // embedded viewer expects when the API serves the files itself.
        let public_base_url = env::var("FILE_BASE_URL")
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        Ok(Self { public_base_url })
    }
}

impl LatencyConfig {
    // Defaults mirror the latency profile the interface was tuned against
    const DEFAULT_LIST_MS: u64 = 500;
    const DEFAULT_SINGLE_MS: u64 = 1000;
    const DEFAULT_BULK_MS: u64 = 1500;
    const DEFAULT_GLOBAL_MS: u64 = 2000;
    const DEFAULT_DELETE_MS: u64 = 500;

    pub fn from_env() -> Result<Self, String> {
        let list_ms = Self::parse_env("SIM_LATENCY_LIST_MS", Self::DEFAULT_LIST_MS)?;
        let single_ms = Self::parse_env("SIM_LATENCY_SINGLE_MS", Self::DEFAULT_SINGLE_MS)?;
        let bulk_ms = Self::parse_env("SIM_LATENCY_BULK_MS", Self::DEFAULT_BULK_MS)?;
        let global_ms = Self::parse_env("SIM_LATENCY_GLOBAL_MS", Self::DEFAULT_GLOBAL_MS)?;
        let delete_ms = Self::parse_env("SIM_LATENCY_DELETE_MS", Self::DEFAULT_DELETE_MS)?;

        Ok(Self {
            list_ms,
            single_ms,
            bulk_ms,
            global_ms,
            delete_ms,
        })
    }

    /// All delays disabled; used by tests
    #[allow(dead_code)]
    pub fn none() -> Self {
        Self {
            list_ms: 0,
            single_ms: 0,
            bulk_ms: 0,
            global_ms: 0,
            delete_ms: 0,
        }
    }

    fn parse_env(name: &str, default: u64) -> Result<u64, String> {
        env::var(name)
            .unwrap_or_else(|_| default.to_string())
            .parse::<u64>()
            .map_err(|_| format!("{} must be a valid number", name))
    }
}
