use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;
use crate::grid::DEFAULT_MAX_PAGE_LENGTH;

/// Minimum length of the shared JWT signing secret
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Startup settings read once from the environment
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    jwt_secret: String,
    grid_max_page_length: usize,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables using ConfigSpec
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider>) -> Result<Self, ApplicationError> {
        let database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://masterfile.db?mode=rwc")
            .min_length(1);

        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let jwt_secret_spec = ConfigSpec::new(env_provider.clone())
            .env_override("JWT_SECRET")
            .required(true)
            .min_length(MIN_JWT_SECRET_LENGTH);

        let grid_spec = ConfigSpec::new(env_provider)
            .env_override("GRID_MAX_PAGE_LENGTH")
            .default_value("100")
            .validator(|value| ConfigSpec::validate_integer_range(value, 1, 1000));

        let database_url = database_url_spec.load_setting_with_source()?.value;
        let server_host = host_spec.load_setting_with_source()?.value;
        let port_value = port_spec.load_setting_with_source()?.value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;
        let jwt_secret = jwt_secret_spec.load_setting_with_source()?.value;
        let grid_value = grid_spec.load_setting_with_source()?.value;
        let grid_max_page_length = ConfigSpec::parse_usize(&grid_value, "GRID_MAX_PAGE_LENGTH")?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            jwt_secret,
            grid_max_page_length,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn grid_max_page_length(&self) -> usize {
        self.grid_max_page_length
    }
}

impl Default for BootstrapSettings {
    /// Defaults for everything except the secret, which is left empty
    fn default() -> Self {
        Self {
            database_url: "sqlite://masterfile.db?mode=rwc".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            jwt_secret: String::new(),
            grid_max_page_length: DEFAULT_MAX_PAGE_LENGTH,
        }
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("jwt_secret", &"[REDACTED]")
            .field("grid_max_page_length", &self.grid_max_page_length)
            .finish()
    }
}
