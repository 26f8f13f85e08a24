//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BOOKS_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence. The boolean
//! switches are read from the environment and files only, because a clap
//! `SetTrue` flag always reports `false` and would mask both.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_PASSWORD_COST: u32 = 10;

/// Configuration values for the HTTP server and its in-memory store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Expose internal error text in 500 bodies.
    #[ortho_config(default = false, skip_cli)]
    pub development: bool,
    /// Load the seed books and users at startup.
    #[ortho_config(skip_cli)]
    pub seed_data: Option<bool>,
    /// bcrypt work factor used when hashing seeded passwords.
    pub password_cost: Option<u32>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 4000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether seed records are loaded; on unless disabled.
    pub fn seed_data(&self) -> bool {
        self.seed_data.unwrap_or(true)
    }

    /// Configured bcrypt cost, falling back to 10.
    pub fn password_cost(&self) -> u32 {
        self.password_cost.unwrap_or(DEFAULT_PASSWORD_COST)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "BOOKS_HOST",
        "BOOKS_PORT",
        "BOOKS_DEVELOPMENT",
        "BOOKS_SEED_DATA",
        "BOOKS_PASSWORD_COST",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("in-n-out-books")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 4000);
        assert!(!settings.development);
        assert!(settings.seed_data());
        assert_eq!(settings.password_cost(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BOOKS_HOST", Some("127.0.0.1".to_owned())),
            ("BOOKS_PORT", Some("3000".to_owned())),
            ("BOOKS_DEVELOPMENT", Some("true".to_owned())),
            ("BOOKS_SEED_DATA", Some("false".to_owned())),
            ("BOOKS_PASSWORD_COST", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 3000);
        assert!(settings.development);
        assert!(!settings.seed_data());
        assert_eq!(settings.password_cost(), 4);
    }

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    #[case(None, true)]
    fn seed_data_follows_the_environment(#[case] raw: Option<&str>, #[case] expected: bool) {
        let _guard = lock_env([
            ("BOOKS_HOST", None),
            ("BOOKS_PORT", None),
            ("BOOKS_DEVELOPMENT", Some("true".to_owned())),
            ("BOOKS_SEED_DATA", raw.map(str::to_owned)),
            ("BOOKS_PASSWORD_COST", None),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.development);
        assert_eq!(settings.seed_data(), expected);
    }
}
