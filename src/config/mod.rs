use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Environment override for the shared QR secret.
/// Takes precedence over the `qr_secret` field of the config file.
pub const SECRET_ENV_VAR: &str = "QRCLOCK_SECRET";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub employee: String,
    /// Shared secret for the rotating QR token. There is deliberately
    /// no built-in default: token operations fail until one is set.
    #[serde(default)]
    pub qr_secret: Option<String>,
    #[serde(default = "default_period_hours")]
    pub qr_period_hours: i64,
    #[serde(default = "default_skew")]
    pub qr_skew: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_period_hours() -> i64 {
    48
}
fn default_skew() -> i64 {
    1
}
fn default_separator_char() -> String {
    " · ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            employee: default_employee(),
            qr_secret: None,
            qr_period_hours: default_period_hours(),
            qr_skew: default_skew(),
            separator_char: default_separator_char(),
        }
    }
}

/// Default subject: the OS user running the CLI.
fn default_employee() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "employee".to_string())
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("qrclock")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".qrclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qrclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("qrclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Resolve the shared QR secret: env var first, then config file.
    /// Absence is a configuration error, never silently defaulted.
    pub fn qr_secret(&self) -> AppResult<String> {
        if let Ok(s) = env::var(SECRET_ENV_VAR)
            && !s.trim().is_empty()
        {
            return Ok(s);
        }

        match &self.qr_secret {
            Some(s) if !s.trim().is_empty() => Ok(s.clone()),
            _ => Err(AppError::MissingSecret),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
