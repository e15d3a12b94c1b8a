//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [client]
            base_url = "https://api.example.com/v1/"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("https://api.example.com/v1/")
        );
        assert!(config.client.timeout.is_none());
        assert!(config.client.headers.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [client]
            base_url = "https://api.example.com/v1/"
            timeout = 15

            [client.headers]
            Accept = "application/json"
            X-Api-Key = "key"

            [auth]
            username = "alice"
            password = "secret"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.client.timeout, Some(15));
        assert_eq!(config.client.headers.len(), 2);
        assert_eq!(
            config.client.headers.get("X-Api-Key").map(String::as_str),
            Some("key")
        );
        assert_eq!(config.auth.username.as_deref(), Some("alice"));
        assert_eq!(config.auth.password.as_deref(), Some("secret"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.client.base_url.is_none());
        assert!(config.auth.username.is_none());
    }

    #[test]
    fn auth_section_may_be_partial() {
        let toml = r#"
            [auth]
            username = "bob"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.auth.username.as_deref(), Some("bob"));
        assert!(config.auth.password.is_none());
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [client]
            base_url = "https://api.example.com/"
            retries = 3
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let toml = r#"
            [server]
            port = 8080
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let toml = r#"
            [client]
            timeout = "sixty"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfig::load(&dir.path().join("absent.toml"));

        assert!(matches!(result, Err(super::super::ConfigError::Read { .. })));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.client.base_url.is_none());
        assert!(config.client.timeout.is_none());
    }

    #[test]
    fn default_template_documents_sections() {
        let template = default_config_template();

        assert!(template.contains("[client]"));
        assert!(template.contains("[auth]"));
        assert!(template.contains("base_url"));
    }
}
