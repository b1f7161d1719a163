use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Role assumed when --role is omitted.
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Tick period for `sweep --watch`, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
    /// Separator drawn between the table header and its rows.
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// When true, `list` appends the acting user's unread notification count.
    #[serde(default = "default_show_notifications")]
    pub show_notifications_on_list: bool,
}

fn default_role() -> String {
    "lecturer".to_string()
}
fn default_sweep_interval() -> u64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_notifications() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_role: default_role(),
            sweep_interval_secs: default_sweep_interval(),
            separator_char: default_separator_char(),
            show_notifications_on_list: default_show_notifications(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("invigil")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".invigil")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("invigil.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("invigil.sqlite")
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

    /// Report config fields that fall back to their defaults in the file on
    /// disk. Used by `config --check`.
    pub fn check() -> Vec<&'static str> {
        let path = Self::config_file();
        let mut missing = Vec::new();

        let Ok(content) = fs::read_to_string(&path) else {
            return vec!["<config file missing>"];
        };
        let Ok(raw) = serde_yaml::from_str::<serde_yaml::Value>(&content) else {
            return vec!["<config file unreadable>"];
        };

        for field in [
            "database",
            "default_role",
            "sweep_interval_secs",
            "separator_char",
            "show_notifications_on_list",
        ] {
            if raw.get(field).is_none() {
                missing.push(field);
            }
        }
        missing
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            if crate::utils::path::is_absolute(&name) {
                PathBuf::from(&name)
            } else {
                dir.join(&name)
            }
        } else {
            dir.join("invigil.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            default_role: default_role(),
            sweep_interval_secs: default_sweep_interval(),
            separator_char: default_separator_char(),
            show_notifications_on_list: default_show_notifications(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
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
