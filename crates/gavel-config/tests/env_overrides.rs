use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use gavel_config::GavelConfig;

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("GAVEL_SCRAPER__CLIENT", "seattle");
        jail.set_env("GAVEL_SCRAPER__TIMEZONE_OFFSET_MINUTES", "-420");
        jail.set_env("GAVEL_PATTERNS__VOTE_APPROVE", "aye");

        let config: GavelConfig = Figment::from(Serialized::defaults(GavelConfig::default()))
            .merge(Env::prefixed("GAVEL_").split("__"))
            .extract()?;

        assert_eq!(config.scraper.client, "seattle");
        assert_eq!(config.scraper.timezone_offset_minutes, -420);
        assert_eq!(config.patterns.vote_approve.as_deref(), Some("aye"));
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
/// The value stays at its default because figment doesn't know "clientt"
/// should be "client".
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("GAVEL_SCRAPER__CLIENTT", "seattle");

        let config: GavelConfig = Figment::from(Serialized::defaults(GavelConfig::default()))
            .merge(Env::prefixed("GAVEL_").split("__"))
            .extract()?;

        assert!(
            config.scraper.client.is_empty(),
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}
