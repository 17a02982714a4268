#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use walt::libs::config::{Config, MonitorConfig, StorageConfig};
    use walt::libs::filter::TitleFilter;

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the defaults.
        let config = Config::read().unwrap();
        assert!(config.monitor.is_none());
        assert!(config.storage.is_none());
        assert!(config.ignore_patterns.is_empty());
        assert_eq!(config.poll_interval(), 30);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            monitor: Some(MonitorConfig { poll_interval: 5 }),
            storage: Some(StorageConfig {
                database_path: Some(PathBuf::from("/tmp/elsewhere.db")),
            }),
            ignore_patterns: vec!["^Secret".to_string(), "Incognito$".to_string()],
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.poll_interval(), 5);
        assert_eq!(read_config.database_path().unwrap(), PathBuf::from("/tmp/elsewhere.db"));
        assert_eq!(read_config.ignore_patterns, config.ignore_patterns);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_database_path(_ctx: &mut ConfigTestContext) {
        let path = Config::default().database_path().unwrap();
        assert!(path.ends_with("walt.db"));
        assert!(path.to_string_lossy().contains("walt"));
    }

    #[test]
    fn test_filter_accepts_and_rejects() {
        let filter = TitleFilter::new(&["^Secret".to_string(), "Bank".to_string()]).unwrap();
        assert!(filter.accepts("Editor - main.rs"));
        assert!(filter.accepts("")); // empty titles are logged
        assert!(!filter.accepts("Secret Chat"));
        assert!(!filter.accepts("My Bank - Login"));
    }

    #[test]
    fn test_filter_rejects_invalid_pattern() {
        assert!(TitleFilter::new(&["[unclosed".to_string()]).is_err());
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = TitleFilter::new(&[]).unwrap();
        assert!(filter.accepts("anything at all"));
    }
}
