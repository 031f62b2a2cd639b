//! Environment overrides live in their own test binary so the variables set
//! here cannot leak into the file-based config tests.

use slack_notifier::cli::Cli;
use slack_notifier::config::Config;

#[test]
fn test_env_overrides_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "notifier.toml",
            r#"
            send_enabled = true
            [[channels]]
            reference = "alerts"
            endpoint_url = "https://hooks.slack.com/alerts"
        "#,
        )?;
        jail.set_env("SLACK_NOTIFIER_SEND_ENABLED", "false");

        let cli = Cli {
            config: Some("notifier.toml".into()),
            ..Default::default()
        };
        let config = Config::load(&cli).map_err(|e| e.to_string())?;

        assert!(!config.service.send_enabled);
        assert_eq!(config.service.channels.len(), 1);
        Ok(())
    });
}

#[test]
fn test_env_booleans_are_spelled_true_or_false() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("SLACK_NOTIFIER_VERBOSE", "true");
        let config = Config::load(&Cli::default()).map_err(|e| e.to_string())?;
        assert!(config.service.verbose);

        jail.set_env("SLACK_NOTIFIER_VERBOSE", "1");
        assert!(Config::load(&Cli::default()).is_err());
        Ok(())
    });
}
