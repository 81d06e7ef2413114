use reqwest::StatusCode;
use text_completion::{Prompt, UpstreamError};
use tracing::*;

use crate::{ChatCompletionRequest, ChatCompletionResponse, OpenAIHandler};

/// Sends `prompt` to `{base_url}/chat/completions` and returns the content of
/// the first choice, untouched. One attempt, no retry.
pub async fn chat_completion(
    handler: &OpenAIHandler,
    prompt: &Prompt,
) -> Result<String, UpstreamError> {
    trace!("chat_completion prompt={}", prompt.user());

    let url = format!("{}/chat/completions", handler.config.base_url);
    let resp = handler
        .client
        .post(&url)
        .bearer_auth(&handler.config.api_key)
        .json(&ChatCompletionRequest {
            model: &handler.config.model,
            messages: prompt,
        })
        .send()
        .await
        .map_err(|e| UpstreamError::Network(e.to_string()))?;

    let status = resp.status();
    trace!("POST {} {:?}", url, status);

    if !status.is_success() {
        let err_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("POST {} failed status={} body={}", url, status, err_text);
        return Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                UpstreamError::Unauthorized(err_text)
            }
            StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited(err_text),
            _ => UpstreamError::Status {
                status: status.as_u16(),
                body: err_text,
            },
        });
    }

    let body = resp
        .text()
        .await
        .map_err(|e| UpstreamError::Network(e.to_string()))?;
    trace!("POST {} body={}", url, body);

    let data: ChatCompletionResponse = serde_json::from_str(&body)
        .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;
    let content = data
        .into_first_content()
        .ok_or_else(|| UpstreamError::MalformedResponse("No message content found".to_string()))?;

    debug!("chat_completion result={}", content);
    Ok(content)
}
