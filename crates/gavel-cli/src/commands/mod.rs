pub mod check;
pub mod scrape;

use gavel_config::GavelConfig;

/// The municipality to scrape: CLI override first, then configuration.
pub(crate) fn client_name(
    override_name: Option<&str>,
    config: &GavelConfig,
) -> anyhow::Result<String> {
    match override_name {
        Some(name) => Ok(name.to_string()),
        None => Ok(config.require_scraper()?.client.clone()),
    }
}

#[cfg(test)]
mod tests {
    use gavel_config::{GavelConfig, ScraperSection};
    use pretty_assertions::assert_eq;

    use super::client_name;

    fn configured(client: &str) -> GavelConfig {
        GavelConfig {
            scraper: ScraperSection {
                client: client.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn cli_override_beats_configuration() {
        let name = client_name(Some("tacoma"), &configured("seattle")).unwrap();
        assert_eq!(name, "tacoma");
    }

    #[test]
    fn configuration_fills_in_when_no_override() {
        let name = client_name(None, &configured("seattle")).unwrap();
        assert_eq!(name, "seattle");
    }

    #[test]
    fn no_client_anywhere_is_an_error() {
        assert!(client_name(None, &GavelConfig::default()).is_err());
    }
}
