use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but does not hold a valid URL.
    ///
    /// Raised for `APP_URL` and `EMAIL_API_URL` when the value cannot be parsed.
    #[error("Environment variable {var} is not a valid URL: {source}")]
    InvalidUrl {
        /// The environment variable holding the bad value
        var: String,
        /// The underlying URL parse error
        #[source]
        source: url::ParseError,
    },
}
