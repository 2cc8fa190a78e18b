use crate::server::error::{config::ConfigError, AppError};

const MOLLIE_API_URL: &str = "https://api.mollie.com/v2";
const FACEBOOK_GRAPH_URL: &str = "https://graph.facebook.com/v19.0";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub listen_addr: String,

    pub stripe_webhook_secret: String,
    pub mollie_api_key: String,

    pub facebook_access_token: String,
    pub facebook_ad_account_id: String,

    pub email_api_url: String,
    pub email_api_key: String,
    pub email_from: String,

    pub mollie_api_url: String,
    pub facebook_graph_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            app_url: require_env("APP_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            stripe_webhook_secret: require_env("STRIPE_WEBHOOK_SECRET")?,
            mollie_api_key: require_env("MOLLIE_API_KEY")?,
            facebook_access_token: require_env("FACEBOOK_ACCESS_TOKEN")?,
            facebook_ad_account_id: require_env("FACEBOOK_AD_ACCOUNT_ID")?,
            email_api_url: require_env("EMAIL_API_URL")?,
            email_api_key: require_env("EMAIL_API_KEY")?,
            email_from: require_env("EMAIL_FROM")?,
            mollie_api_url: MOLLIE_API_URL.to_string(),
            facebook_graph_url: FACEBOOK_GRAPH_URL.to_string(),
        })
    }
}

fn require_env(name: &'static str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
