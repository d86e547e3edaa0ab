use crate::error::Error;

#[derive(Debug)]
pub struct Config {
    pub mongo_uri: String,
    pub app_name: String,
}

impl Config {
    /// Read configuration from the environment. The binary loads `.env` first,
    /// so this sees both file-provided and real environment variables.
    pub fn from_env() -> Result<Self, Error> {
        use std::env;
        Ok(Self {
            mongo_uri: env::var("MONGO_URI")
                .map_err(|_| Error::Configuration("MONGO_URI is not set".to_string()))?,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "mongo_check".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_uri_is_a_configuration_error() {
        temp_env::with_var("MONGO_URI", None::<&str>, || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
        });
    }

    #[test]
    fn uri_and_default_app_name_are_picked_up() {
        temp_env::with_vars(
            [
                ("MONGO_URI", Some("mongodb://localhost:27017")),
                ("APP_NAME", None::<&str>),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
                assert_eq!(config.app_name, "mongo_check");
            },
        );
    }
}
