use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Optional YAML settings. Environment variables take precedence.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct ConfigFile {
    pub table_name: Option<String>,
    pub region: Option<String>,
    pub partition_key: Option<String>,
    pub key_attribute: Option<String>,
    pub partition_key_attribute: Option<String>,
    pub port: Option<u16>,
}

impl ConfigFile {
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        path.map(read_config).unwrap_or_default()
    }
}

fn read_config<P: AsRef<Path>>(path: P) -> ConfigFile {
    _read_config(path).unwrap_or_else(|err| {
        warn!("{err}");
        warn!("Skip reading config file.");
        ConfigFile::default()
    })
}

fn _read_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile, String> {
    let content = fs::read_to_string(&path)
        .map_err(|err| format!("Failed to read: {}. {err}", path.as_ref().to_string_lossy()))?;
    serde_yaml::from_str(&content)
        .map_err(|err| format!("Failed to deserialize config file: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_loads_config() {
        let result = _read_config("src/config/test/valid.yml");
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(
            config,
            ConfigFile {
                table_name: Some("PDC-Inventory".into()),
                region: Some("eu-west-1".into()),
                partition_key: Some("store-1".into()),
                key_attribute: Some("ItemId".into()),
                partition_key_attribute: None,
                port: Some(9090),
            }
        );
    }

    #[test]
    fn it_returns_err_if_the_file_does_not_exist() {
        let result = _read_config("src/config/test/non-exist.yml");
        assert!(result.is_err());

        let message = result.unwrap_err();
        assert_eq!(
            message,
            "Failed to read: src/config/test/non-exist.yml. No such file or directory (os error 2)"
        );
    }

    #[test]
    fn it_returns_err_if_the_file_is_invalid() {
        let result = _read_config("src/config/test/invalid.yml");
        assert!(result.is_err());

        let message = result.unwrap_err();
        assert!(message.starts_with("Failed to deserialize config file: port: invalid"));
    }

    #[test]
    fn it_falls_back_to_defaults_on_unreadable_file() {
        let config = ConfigFile::new(Some("src/config/test/non-exist.yml"));
        assert_eq!(config, ConfigFile::default());
    }
}
