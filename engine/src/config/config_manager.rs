use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. Missing content falls back to `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: RefCell::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        depth: u32,
        label: String,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                depth: 9,
                label: "default".to_string(),
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.depth > 9 {
                return Err(format!("depth must be at most 9, got {}", self.depth));
            }
            Ok(())
        }
    }

    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<usize>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager_with(content: Option<&str>) -> ConfigManager<MemoryContentProvider, SampleConfig> {
        let provider = MemoryContentProvider {
            content: RefCell::new(content.map(str::to_string)),
            reads: RefCell::new(0),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = manager_with(None);
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let manager = manager_with(Some("depth: 3\nlabel: quick\n"));
        let first = manager.get_config().unwrap();
        let second = manager.get_config().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.depth, 3);
        assert_eq!(*manager.config_content_provider.reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = manager_with(Some("depth: 12\nlabel: deep\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_malformed_content_is_rejected() {
        let manager = manager_with(Some("depth: [unclosed"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_round_trips_through_provider() {
        let manager = manager_with(None);
        let config = SampleConfig {
            depth: 4,
            label: "saved".to_string(),
        };
        manager.set_config(&config).unwrap();

        let reloaded = manager_with(manager.config_content_provider.content.borrow().as_deref());
        assert_eq!(reloaded.get_config().unwrap(), config);
    }

    #[test]
    fn test_set_config_refuses_invalid() {
        let manager = manager_with(None);
        let config = SampleConfig {
            depth: 10,
            label: "bad".to_string(),
        };
        assert!(manager.set_config(&config).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());
    }
}
