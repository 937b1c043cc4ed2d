#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;
    use taskdesk::libs::config::{Config, DatabaseConfig, CONFIG_FILE_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives every test its own directory for config files.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_database_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.uri, "mongodb://localhost:27017/");
        assert_eq!(config.database, "gerenciador_tarefas_db");
        assert_eq!(config.collection, "tarefas");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_env_overrides() {
        let config = DatabaseConfig::default().apply_vars(vars(&[
            ("MONGODB_URI", "mongodb://db.internal:27018/"),
            ("MONGODB_DATABASE", "tasks_db"),
            ("MONGODB_COLLECTION", "tasks"),
            ("MONGODB_TIMEOUT_MS", "1500"),
        ]));

        assert_eq!(config.uri, "mongodb://db.internal:27018/");
        assert_eq!(config.database, "tasks_db");
        assert_eq!(config.collection, "tasks");
        assert_eq!(config.timeout_ms, 1500);
    }

    #[test]
    fn test_env_ignores_empty_and_invalid_values() {
        let config = DatabaseConfig::default().apply_vars(vars(&[
            ("MONGODB_URI", ""),
            ("MONGODB_DATABASE", "   "),
            ("MONGODB_TIMEOUT_MS", "five seconds"),
        ]));

        assert_eq!(config, DatabaseConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: DatabaseConfig {
                uri: "mongodb://example:27017/".to_string(),
                database: "db".to_string(),
                collection: "col".to_string(),
                timeout_ms: 250,
            },
        };
        config.save_to(&ctx.config_path()).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{ "database": { "uri": "mongodb://remote:27017/" } }"#).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded.database.uri, "mongodb://remote:27017/");
        assert_eq!(loaded.database.database, "gerenciador_tarefas_db");
        assert_eq!(loaded.database.timeout_ms, 5000);

        std::fs::write(ctx.config_path(), "{}").unwrap();
        assert_eq!(Config::read_from(&ctx.config_path()).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }
}
