#[cfg(test)]
mod tests {
    use devtrack::libs::config::{Config, DatabaseConfig, OutputConfig, CONFIG_FILE_NAME};
    use devtrack::libs::data_storage::DataStorage;
    use devtrack::libs::view::OutputFormat;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home for the test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // Everything touching the config file runs in one test: HOME is process-wide.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::delete().unwrap());

        let config = Config {
            database: Some(DatabaseConfig {
                connection: "/srv/activity.db".to_string(),
            }),
            output: Some(OutputConfig {
                format: OutputFormat::Json,
                column_width: 16,
                top_languages: 3,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.connection(Some("cli.db")), "cli.db");
        assert_eq!(loaded.output().format, OutputFormat::Json);

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());

        assert!(Config::delete().unwrap());
        assert!(!path.exists());
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
