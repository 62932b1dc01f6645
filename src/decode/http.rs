use crate::decode::{DecodeError, DecodePolicy, WireModel, decode, decode_list};
use crate::responses::SimpleResponse;
use reqwest::Response;
use tracing::{debug, instrument, warn};

/// Decodes the body of an already received response into `T`.
///
/// Error statuses fail with [`DecodeError::Api`], carrying the service's error envelope.
#[instrument(skip(response, policy), fields(status = %response.status(), url = %response.url()))]
pub async fn read_json<T: WireModel>(response: Response, policy: &DecodePolicy) -> Result<T, DecodeError> {
    let body = read_body(response).await?;
    decode(&body, policy)
}

#[instrument(skip(response, policy), fields(status = %response.status(), url = %response.url()))]
pub async fn read_json_list<T: WireModel>(response: Response, policy: &DecodePolicy) -> Result<Vec<T>, DecodeError> {
    let body = read_body(response).await?;
    decode_list(&body, policy)
}

async fn read_body(response: Response) -> Result<Vec<u8>, DecodeError> {
    let status = response.status();
    let body = response.bytes().await?;
    debug!("Read {} bytes", body.len());

    if status.is_success() {
        return Ok(body.to_vec());
    }

    let response = serde_json::from_slice::<SimpleResponse>(&body).unwrap_or_else(|_| SimpleResponse {
        ok: false,
        error: Some(String::from_utf8_lossy(&body).into_owned()),
    });
    warn!(%status, "Service returned an error: {}", response);
    Err(DecodeError::Api { status, response })
}
