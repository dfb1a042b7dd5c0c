use figment::Jail;
use loan_config::{CollisionPolicy, LoanConfig};

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LOANTRACK_UPLOADS__DIR", "/srv/loan-docs");
        jail.set_env("LOANTRACK_MAIL__PORT", "2525");
        jail.set_env("LOANTRACK_UPLOADS__COLLISION", "overwrite");

        let config = LoanConfig::load().expect("config loads");
        assert_eq!(config.uploads.dir.to_str(), Some("/srv/loan-docs"));
        assert_eq!(config.mail.port, 2525);
        assert_eq!(config.uploads.collision, CollisionPolicy::Overwrite);
        Ok(())
    });
}

#[test]
fn project_file_overrides_defaults_but_loses_to_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "loantrack.toml",
            r#"
                [storage]
                database_path = "from-file.db"

                [mail]
                host = "relay.internal"
                username = "loans"
            "#,
        )?;
        jail.set_env("LOANTRACK_STORAGE__DATABASE_PATH", "from-env.db");

        let config = LoanConfig::load().expect("config loads");
        assert_eq!(config.storage.database_path, "from-env.db");
        assert_eq!(config.mail.host, "relay.internal");
        assert!(config.mail.is_configured());
        Ok(())
    });
}

#[test]
fn explicit_file_sits_above_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("loantrack.toml", "[server]\nbind = \"127.0.0.1:7000\"\n")?;
        jail.create_file("override.toml", "[server]\nbind = \"0.0.0.0:8080\"\n")?;

        let config = LoanConfig::load_from(Some(std::path::Path::new("override.toml")))
            .expect("config loads");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        Ok(())
    });
}

#[test]
fn invalid_bind_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LOANTRACK_SERVER__BIND", "not-an-address");
        assert!(LoanConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_config_and_process_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "LOANTRACK_UPLOADS__MAX_BYTES=2048\nLOANTRACK_DOTENV_MARKER_LOG=debug\n",
        )?;

        let config = LoanConfig::load_with_dotenv(None).expect("config loads");
        assert_eq!(config.uploads.max_bytes, 2048);
        assert_eq!(
            std::env::var("LOANTRACK_DOTENV_MARKER_LOG").as_deref(),
            Ok("debug")
        );
        Ok(())
    });
}
