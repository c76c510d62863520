use serde::Deserialize;
use skybook_shared::Masked;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub credentials: CredentialsConfig,
    pub admin: AdminConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: Masked<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    pub id_prefix: String,
    pub id_range: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load: built-in defaults, then `default`, `{RUN_MODE}` and `local`
    /// files under `dir` (all optional), then `SKYBOOK__*` environment variables.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let source = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .set_default("credentials.path", "users.jsonl")?
            .set_default("admin.username", "admin")?
            .set_default("admin.password", "admin@123")?
            .set_default("ledger.id_prefix", "TKT")?
            .set_default("ledger.id_range", 9999_i64)?
            .set_default("logging.filter", "warn")?
            .add_source(source("default"))
            .add_source(source(run_mode.as_str()))
            // Not checked in to git
            .add_source(source("local"))
            // Eg. `SKYBOOK__ADMIN__PASSWORD=...` sets `admin.password`
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.credentials.path, PathBuf::from("users.jsonl"));
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password.expose(), "admin@123");
        assert_eq!(config.ledger.id_prefix, "TKT");
        assert_eq!(config.ledger.id_range, 9999);
    }

    #[test]
    fn test_default_file_overrides_builtins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[credentials]\npath = \"data/users.jsonl\"\n\n[admin]\nusername = \"ops\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.credentials.path, PathBuf::from("data/users.jsonl"));
        assert_eq!(config.admin.username, "ops");
        assert_eq!(config.admin.password.expose(), "admin@123");
    }
}
