// Configuration module entry point
// Loads the handler configuration from an optional file and the environment

mod types;

pub use types::HandlerConfig;

/// Environment variable prefix, e.g. `STATIC_ROOT=/srv/www`
pub const ENV_PREFIX: &str = "STATIC";

impl HandlerConfig {
    /// Load configuration from specified file path (extension optional)
    ///
    /// The file may be absent. Environment variables override file values,
    /// and built-in defaults fill whatever neither provides.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document, over the built-in defaults
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("root", defaults.root)?
            .set_default("confine_to_root", defaults.confine_to_root)?
            .set_default("expose_error_codes", defaults.expose_error_codes)?
            .set_default("access_log", defaults.access_log)?
            .set_default("access_log_format", defaults.access_log_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = HandlerConfig::new("/www");
        assert_eq!(cfg.root, "/www");
        assert!(cfg.confine_to_root);
        assert!(cfg.expose_error_codes);
        assert!(!cfg.access_log);
        assert_eq!(cfg.access_log_format, "common");
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let cfg = HandlerConfig::from_toml_str(
            r#"
            root = "/srv/site"
            expose_error_codes = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.root, "/srv/site");
        assert!(!cfg.expose_error_codes);
        assert!(cfg.confine_to_root);
        assert_eq!(cfg.access_log_format, "common");
    }

    #[test]
    fn test_from_toml_empty_document() {
        let cfg = HandlerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, HandlerConfig::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let cfg = HandlerConfig::load_from("definitely-not-a-config-file-7f3a").unwrap();
        assert!(cfg.confine_to_root);
    }
}
