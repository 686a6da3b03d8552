// src/core/net.rs

// Blocking HTTPS GET. No retries and no timeout of our own: one attempt,
// whatever the client default is.

use crate::config::consts::USER_AGENT;
use crate::error::{FetchError, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        loge!("Net: {} → {}", url, status);
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp.text()?;
    logd!("Net: {} → {} ({} bytes)", url, status, body.len());
    Ok(body)
}
