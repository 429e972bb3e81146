#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "API_KEY is required. Set it in your environment or .env file.\n\
         Copy .env.template to .env and add your API key."
    )]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
