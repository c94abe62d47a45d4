use std::env;

const SANDBOX_API_BASE: &str = "https://api-m.sandbox.paypal.com";
const PRODUCTION_API_BASE: &str = "https://api-m.paypal.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub client_id: String,
    pub app_secret: String,
    pub client_id_2: Option<String>,
    pub app_secret_2: Option<String>,
    pub api_base: String,
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            client_id: env::var("PAYPAL_CLIENT_ID")
                .unwrap_or_else(|_| "test".to_string()),
            app_secret: env::var("PAYPAL_APP_SECRET")
                .unwrap_or_else(|_| "test".to_string()),
            client_id_2: env::var("PAYPAL_CLIENT_ID_2").ok(),
            app_secret_2: env::var("PAYPAL_APP_SECRET_2").ok(),
            api_base: env::var("PAYPAL_API_BASE").unwrap_or_else(|_| {
                match env::var("APP_ENV").as_deref() {
                    Ok("production") => PRODUCTION_API_BASE.to_string(),
                    _ => SANDBOX_API_BASE.to_string(),
                }
            }),
            public_base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }

    // Redirect URI registered in the PayPal app settings; the token
    // exchange must send it byte-identical to the authorize request.
    pub fn oauth_redirect_uri(&self) -> String {
        format!("{}/api/payouts/oauth/callback", self.public_base_url)
    }
}
