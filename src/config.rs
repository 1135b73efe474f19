use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    /// Static bearer key the UI backend and the reminder cron authenticate with.
    pub service_key: String,
    pub mail: MailConfig,
    pub push: PushConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub sender: String,
}

#[derive(Clone, Debug)]
pub struct PushConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            service_key: Self::get_env("SERVICE_KEY"),
            mail: MailConfig {
                api_key: Self::get_env("MAIL_API_KEY"),
                endpoint: env::var("MAIL_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                sender: env::var("MAIL_SENDER")
                    .unwrap_or_else(|_| "avaliacoes@example.com".to_string()),
            },
            push: PushConfig {
                api_key: Self::get_env("PUSH_API_KEY"),
                endpoint: Self::get_env("PUSH_ENDPOINT"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
