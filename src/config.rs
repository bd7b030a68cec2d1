use crate::error::ShippingError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, resolved once at startup and handed explicitly to
/// the pool factory instead of being re-read from the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub db_host: String,
    pub db_password: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: "mysql".to_string(),
            db_password: "secret".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Overlay `DB_HOST`, `DB_PASSWORD` and `LOGLEVEL` from the process
    /// environment on top of the bundled defaults. Unset variables keep
    /// their defaults; set values are taken as-is, without validation.
    pub fn load() -> Result<Self, ShippingError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["db_host", "db_password", "loglevel"]))
            .extract()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DB_HOST", "db.internal");
            jail.set_env("DB_PASSWORD", "hunter2");

            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.db_host, "db.internal");
            assert_eq!(cfg.db_password, "hunter2");
            Ok(())
        });
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        figment::Jail::expect_with(|_jail| {
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.db_host, "mysql");
            assert_eq!(cfg.db_password, "secret");
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }

    #[test]
    fn partial_environment_only_overrides_what_is_set() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DB_HOST", "mysql.prod.svc");

            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.db_host, "mysql.prod.svc");
            assert_eq!(cfg.db_password, "secret");
            Ok(())
        });
    }
}
