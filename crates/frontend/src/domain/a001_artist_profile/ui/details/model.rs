use crate::shared::api_utils::{api_url, profile_path, with_auth};
use contracts::domain::a001_artist_profile::aggregate::{ArtistProfile, ArtistProfileUpdate};
use contracts::system::auth::Session;
use gloo_net::http::{Request, Response};
use serde::Deserialize;

pub const NOT_FOUND: &str = "Profile not found";

pub async fn fetch_profile(id: &str, session: &Session) -> Result<ArtistProfile, String> {
    let response = with_auth(Request::get(&api_url(&profile_path(id))), session)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err(NOT_FOUND.to_string());
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    ArtistProfile::from_response(&text).map_err(|e| e.to_string())
}

/// Returns the record echoed by the server, when the body carries one
pub async fn update_profile(
    id: &str,
    session: &Session,
    payload: &ArtistProfileUpdate,
) -> Result<Option<ArtistProfile>, String> {
    let response = with_auth(Request::put(&api_url(&profile_path(id))), session)
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let text = response.text().await.unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    match ArtistProfile::from_response(&text) {
        Ok(profile) => Ok(Some(profile)),
        Err(e) => {
            log::debug!("update response is not a profile: {}", e);
            Ok(None)
        }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    url: Option<String>,
    name: Option<String>,
}

/// Upload a file and return the stored reference (URL, else name)
pub async fn upload_file(session: &Session, file: web_sys::File) -> Result<String, String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let response = with_auth(Request::post(&api_url("/api/uploads")), session)
        .body(form_data)
        .map_err(|e| format!("Failed to build upload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send upload: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: UploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse upload response: {}", e))?;
    data.url
        .or(data.name)
        .filter(|reference| !reference.is_empty())
        .ok_or_else(|| "Upload response carried no reference".to_string())
}

/// Prefer the server's `{ "error": "..." }` body over the bare status
async fn error_message(response: Response) -> String {
    #[derive(Deserialize)]
    struct ErrorResponse {
        error: Option<String>,
        message: Option<String>,
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse { error: Some(e), .. }) | Ok(ErrorResponse { message: Some(e), .. }) => e,
        _ => format!("HTTP {}", status),
    }
}
