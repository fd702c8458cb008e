use std::fmt;

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_host")]
    pub app_host: String,
    #[serde(default = "Settings::default_port")]
    pub app_port: u16,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

impl Settings {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    const fn default_port() -> u16 {
        8000
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_host", &self.app_host)
            .field("app_port", &self.app_port)
            .field("auth", &self.auth)
            .field("store", &self.store)
            .finish()
    }
}

/// Trust parameters for incoming bearer tokens.
#[derive(Clone, serde::Deserialize)]
pub struct AuthSettings {
    /// HS256 signing secret (from env: SUPABASE_JWT_SECRET)
    #[serde(skip)]
    pub jwt_secret: String,
    /// Expected `iss` claim (from env: SUPABASE_ISSUER)
    #[serde(skip)]
    pub issuer: String,
    /// Clock skew tolerated on `exp`, in seconds
    #[serde(default)]
    pub leeway_secs: u64,
}

impl AuthSettings {
    pub fn load_env(&mut self) -> Result<(), config::ConfigError> {
        self.jwt_secret = require_env("SUPABASE_JWT_SECRET")?;
        self.issuer = require_env("SUPABASE_ISSUER")?;
        Ok(())
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            issuer: String::new(),
            leeway_secs: 0,
        }
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// Connection parameters for the Supabase REST endpoint holding the tracks table.
#[derive(Clone, serde::Deserialize)]
pub struct StoreSettings {
    /// Project URL, e.g. https://xyz.supabase.co (from env: SUPABASE_URL)
    #[serde(skip)]
    pub url: String,
    /// Service API key (from env: SUPABASE_KEY)
    #[serde(skip)]
    pub key: String,
    #[serde(default = "StoreSettings::default_table")]
    pub table: String,
    /// HTTP request timeout in seconds
    #[serde(default = "StoreSettings::default_timeout")]
    pub timeout_secs: u64,
}

impl StoreSettings {
    fn default_table() -> String {
        "tracks".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    pub fn load_env(&mut self) -> Result<(), config::ConfigError> {
        self.url = require_env("SUPABASE_URL")?;
        self.key = require_env("SUPABASE_KEY")?;
        self.validate()
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "store.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            table: Self::default_table(),
            timeout_secs: Self::default_timeout(),
        }
    }
}

impl fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSettings")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("table", &self.table)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// Unset and blank values are treated the same.
fn require_env(name: &str) -> Result<String, config::ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(config::ConfigError::NotFound(name.to_string())),
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Non-secret values may come from an optional `configuration.yaml`
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    config.auth.load_env()?;
    config.store.load_env()?;

    Ok(config)
}
