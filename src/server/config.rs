use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub email_from: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = std::env::var("APP_URL")
            .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?;
        url::Url::parse(&app_url).map_err(|source| ConfigError::InvalidUrl {
            var: "APP_URL".to_string(),
            source,
        })?;

        let email_api_url = std::env::var("EMAIL_API_URL").ok();
        if let Some(ref value) = email_api_url {
            url::Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
                var: "EMAIL_API_URL".to_string(),
                source,
            })?;
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url,
            email_api_url,
            email_api_key: std::env::var("EMAIL_API_KEY").ok(),
            email_from: std::env::var("EMAIL_FROM").ok(),
        })
    }
}
