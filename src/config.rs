//! config
//!
//! Environment-derived configuration defaults.
//!
//! # Overview
//!
//! The engine collaborator defines three environment variables that supply
//! defaults for values otherwise passed as flags or prompted for:
//!
//! - [`URL_ENV_KEY`] - MMP server URL
//! - [`MSISDN_ENV_KEY`] - user phone number
//! - [`PWD_ENV_KEY`] - password obtained during registration
//!
//! Configuration is loaded once at process start and never mutated. Empty
//! variable values are treated as unset so that `FOO=` in a shell profile
//! does not shadow an interactive prompt.

/// Environment variable holding the default MMP server URL.
pub const URL_ENV_KEY: &str = "MMP_URL";

/// Environment variable holding the default user MSISDN (phone number).
pub const MSISDN_ENV_KEY: &str = "MMP_MSISDN";

/// Environment variable holding the default password.
pub const PWD_ENV_KEY: &str = "MMP_PWD";

/// Read-only defaults sourced from the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    url: Option<String>,
    msisdn: Option<String>,
    password: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    ///
    /// This is the testable seam behind [`from_env`]: tests supply a closure
    /// over a fixed map instead of mutating the process environment.
    ///
    /// [`from_env`]: Config::from_env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            url: get(URL_ENV_KEY),
            msisdn: get(MSISDN_ENV_KEY),
            password: get(PWD_ENV_KEY),
        }
    }

    /// Build a configuration from explicit values (test helper).
    pub fn new(
        url: Option<String>,
        msisdn: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            url,
            msisdn,
            password,
        }
    }

    /// Default MMP server URL, if configured.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Default user MSISDN, if configured.
    pub fn msisdn(&self) -> Option<&str> {
        self.msisdn.as_deref()
    }

    /// Default password, if configured.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
