//! Same-origin fetch of the profile document, wrapping `gloo-net`.

use folio_app::ports::ProfileSource;
use folio_domain::error::{FolioError, SourceError};
use folio_domain::profile::ProfileDocument;
use gloo_net::http::Request;

fn request_error(err: gloo_net::Error) -> FolioError {
    SourceError::Request(err.to_string()).into()
}

/// GETs the document once per call; no caching, no retry.
#[derive(Debug, Clone)]
pub struct FetchProfileSource {
    url: String,
}

impl FetchProfileSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ProfileSource for FetchProfileSource {
    async fn fetch(&self) -> Result<ProfileDocument, FolioError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(request_error)?;
        if !response.ok() {
            return Err(SourceError::Status(response.status()).into());
        }
        let text = response.text().await.map_err(request_error)?;
        ProfileDocument::from_json(&text)
    }
}
