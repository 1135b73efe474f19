use crate::config::config;
use reqwest::ClientBuilder;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

#[derive(Serialize)]
struct PushPayload<'a> {
    user_id: Uuid,
    title: &'a str,
    body: &'a str,
}

/// Best-effort push via the configured webhook. Only called for users that
/// opted in; failures are the caller's to log, never to propagate.
pub async fn send_push(user_id: Uuid, title: &str, body: &str) -> Result<(), String> {
    let push = &config().push;

    let client = ClientBuilder::new()
        .user_agent("avaliacao-api/1.0 (+reqwest)")
        .timeout(Duration::from_secs(5))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let res = client
        .post(&push.endpoint)
        .bearer_auth(&push.api_key)
        .json(&PushPayload {
            user_id,
            title,
            body,
        })
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(format!("push API error: HTTP {status}"))
    }
}
