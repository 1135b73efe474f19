use crate::config::config;
use crate::types::mail::SendEmail;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::info;

/// Best-effort email delivery. Callers decide whether a failure matters;
/// the dispatcher logs it and moves on.
pub async fn send_email(email: SendEmail) -> Result<(), String> {
    let mail = &config().mail;

    let client: Client = ClientBuilder::new()
        .user_agent("avaliacao-api/1.0 (+reqwest)")
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let res = client
        .post(&mail.endpoint)
        .bearer_auth(&mail.api_key)
        .json(&email)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    if status.is_success() {
        info!("mail delivered, status {status}");
        Ok(())
    } else {
        let body = res.text().await.unwrap_or_default();
        Err(format!("mail API error: HTTP {status}: {body}"))
    }
}
