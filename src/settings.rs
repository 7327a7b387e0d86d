use crate::api::Error;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const API_URL: &str = "https://monitoringapi.solaredge.com";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
const ENV_PREFIX: &str = "SE";

/// Site credentials, read from a JSON file of the form
/// `{"SiteId": "...", "APIKey": "..."}`. `SE_`-prefixed environment variables override the file.
#[derive(Clone, Debug)]
pub struct SolarEdgeConfig {
    pub api_url: String,
    pub site_id: String,
    pub api_key: String,
}

/// Keys of one source. File and environment are read separately so that the same setting
/// never appears twice under different spellings.
#[derive(Debug, Default, Deserialize)]
struct Source {
    #[serde(alias = "SiteId", alias = "siteid", alias = "SITEID")]
    site_id: Option<String>,
    #[serde(alias = "APIKey", alias = "apikey", alias = "APIKEY")]
    api_key: Option<String>,
    #[serde(alias = "API_URL")]
    api_url: Option<String>,
}

fn file_source(path: &str) -> Result<Source, Error> {
    let mut settings = Config::default();
    settings.merge(File::new(path, FileFormat::Json))?;
    Ok(settings.try_into()?)
}

fn env_source(prefix: &str) -> Result<Source, Error> {
    let mut settings = Config::default();
    settings.merge(Environment::with_prefix(prefix))?;
    Ok(settings.try_into()?)
}

fn required(value: Option<String>, key: &str) -> Result<String, Error> {
    value.ok_or_else(|| Error::ConfigError(ConfigError::NotFound(key.to_string())))
}

fn load(path: &str, env_prefix: &str) -> Result<SolarEdgeConfig, Error> {
    let file = file_source(path)?;
    let env = env_source(env_prefix)?;

    let config = SolarEdgeConfig {
        api_url: env
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| API_URL.to_string()),
        site_id: required(env.site_id.or(file.site_id), "SiteId")?,
        api_key: required(env.api_key.or(file.api_key), "APIKey")?,
    };
    log::debug!("loaded settings from {} for site {}", path, config.site_id);

    Ok(config)
}

pub fn read_settings(path: &str) -> Result<SolarEdgeConfig, Error> {
    load(path, ENV_PREFIX)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    /* prefixes that never collide with a real environment */
    const NO_ENV: &str = "SE_TEST_UNSET";

    fn resource(filename: &str) -> String {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push(format!("resources/test/{}", filename));
        d.to_string_lossy().into_owned()
    }

    #[test]
    fn read_config_file() {
        let config = load(&resource("config.json"), NO_ENV).unwrap();
        assert_eq!("123456", config.site_id);
        assert_eq!("L4QLVQ1LOKCQX2193VSEICXW61NP6B1O", config.api_key);
        assert_eq!(API_URL, config.api_url);
    }

    #[test]
    fn environment_overrides_file() {
        env::set_var("SE_TEST_OVERRIDE_APIKEY", "FROMENV");
        env::set_var("SE_TEST_OVERRIDE_API_URL", "http://localhost:8080");
        let config = load(&resource("config.json"), "SE_TEST_OVERRIDE").unwrap();
        env::remove_var("SE_TEST_OVERRIDE_APIKEY");
        env::remove_var("SE_TEST_OVERRIDE_API_URL");

        assert_eq!("FROMENV", config.api_key);
        assert_eq!("123456", config.site_id);
        assert_eq!("http://localhost:8080", config.api_url);
    }

    #[test]
    fn environment_completes_file() {
        env::set_var("SE_TEST_COMPLETE_APIKEY", "FROMENV");
        let config = load(&resource("config_missing_key.json"), "SE_TEST_COMPLETE").unwrap();
        env::remove_var("SE_TEST_COMPLETE_APIKEY");

        assert_eq!("FROMENV", config.api_key);
        assert_eq!("123456", config.site_id);
    }

    #[test]
    fn missing_file() {
        let err = load(&resource("no_such_config.json"), NO_ENV).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn missing_key() {
        let err = load(&resource("config_missing_key.json"), NO_ENV).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().contains("APIKey"));
    }

    #[test]
    fn invalid_json() {
        let err = load(&resource("invalid_json.json"), NO_ENV).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
