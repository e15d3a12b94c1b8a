//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command, Verb};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter(["omi-http", "get", "users/1"]);

        assert_eq!(cli.verb, Some(Verb::Get));
        assert_eq!(cli.path.as_deref(), Some("users/1"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_all_verbs() {
        let cases = [
            ("head", Verb::Head),
            ("get", Verb::Get),
            ("put", Verb::Put),
            ("post", Verb::Post),
            ("delete", Verb::Delete),
            ("send", Verb::Send),
        ];

        for (arg, expected) in cases {
            let cli = Cli::parse_from_iter(["omi-http", arg, "x"]);
            assert_eq!(cli.verb, Some(expected), "verb {arg}");
        }
    }

    #[test]
    fn parse_request_options() {
        let cli = Cli::parse_from_iter([
            "omi-http",
            "post",
            "items",
            "--base-url",
            "https://api.example.com/v1/",
            "--data",
            r#"{"name":"widget"}"#,
            "--header",
            "X-Api-Key=secret",
            "--header",
            "Accept: application/json",
            "--timeout",
            "5",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("https://api.example.com/v1/"));
        assert_eq!(cli.data.as_deref(), Some(r#"{"name":"widget"}"#));
        assert_eq!(cli.headers, ["X-Api-Key=secret", "Accept: application/json"]);
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn parse_auth_options() {
        let cli = Cli::parse_from_iter([
            "omi-http",
            "get",
            "me",
            "-u",
            "alice",
            "--password",
            "secret",
        ]);

        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
    }

    #[test]
    fn parse_config_and_verbose() {
        let cli = Cli::parse_from_iter(["omi-http", "-c", "my.toml", "-v", "head", "/"]);

        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn defaults_are_unset() {
        let cli = Cli::parse_from_iter(["omi-http"]);

        assert!(cli.verb.is_none());
        assert!(cli.path.is_none());
        assert!(cli.base_url.is_none());
        assert!(cli.timeout.is_none());
        assert!(cli.headers.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn unknown_verb_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["omi-http", "patch", "x"]);
        assert!(result.is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["omi-http", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, PathBuf::from("omi-http.toml")),
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["omi-http", "init", "-o", "custom.toml"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, PathBuf::from("custom.toml")),
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn request_is_not_init() {
        let cli = Cli::parse_from_iter(["omi-http", "get", "x"]);
        assert!(!cli.is_init());
    }
}

mod verb {
    use super::*;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Verb::Head.to_string(), "HEAD");
        assert_eq!(Verb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn body_carrying_verbs() {
        assert!(!Verb::Head.has_body());
        assert!(!Verb::Get.has_body());
        assert!(Verb::Put.has_body());
        assert!(Verb::Post.has_body());
        assert!(Verb::Delete.has_body());
    }
}
