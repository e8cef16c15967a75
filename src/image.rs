//! Card image URLs: absolutizing upstream paths, relaying through a resize
//! service, and fetching the raw bytes for proxying.

use std::io::Read;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config;
use crate::error::{CatalogError, Result};

/// `Cache-Control` value for proxied images.
pub const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Returns `true` if `url` carries an `http` or `https` scheme.
pub fn is_absolute_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Turn an upstream image reference into an absolute URL.
///
/// Absolute URLs are returned unchanged, protocol-relative ones (`//host/..`)
/// get `https:`, and anything else is treated as a path on `base_url`.
pub fn absolutize(image: &str, base_url: &str) -> String {
    if is_absolute_url(image) {
        image.to_string()
    } else if image.starts_with("//") {
        format!("https:{image}")
    } else {
        config::join_url(base_url, image)
    }
}

/// Build a URL that routes `image_url` through the resize/transcode relay,
/// optionally scaled to `width` pixels.
pub fn relay_url(image_url: &str, width: Option<u32>) -> Result<String> {
    if !is_absolute_url(image_url) {
        return Err(CatalogError::InvalidArgument(format!(
            "Image URL must be absolute: {image_url}"
        )));
    }

    let mut params = vec![("url", image_url.to_string())];
    if let Some(w) = width {
        params.push(("w", w.to_string()));
    }
    params.push(("output", "webp".to_string()));

    let url = reqwest::Url::parse_with_params(config::IMAGE_RELAY_BASE, &params)
        .map_err(|e| CatalogError::InvalidArgument(format!("Bad relay URL: {e}")))?;
    Ok(url.to_string())
}

/// Guess an image content type from the URL's file extension.
pub fn guess_content_type(url: &str) -> &'static str {
    let path = url.split(&['?', '#'][..]).next().unwrap_or(url);
    let ext = path
        .rsplit('/')
        .next()
        .and_then(|file| file.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

// ---------------------------------------------------------------------------
// ImageMode
// ---------------------------------------------------------------------------

/// How the HTTP layer serves card images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageMode {
    /// Fetch the bytes and stream them back.
    #[default]
    Proxy,
    /// Redirect to the resize/transcode relay.
    Relay,
}

impl FromStr for ImageMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proxy" => Ok(ImageMode::Proxy),
            "relay" => Ok(ImageMode::Relay),
            other => Err(CatalogError::InvalidArgument(format!(
                "Unknown image mode '{other}' (expected 'proxy' or 'relay')"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ImageFetcher
// ---------------------------------------------------------------------------

/// Raw image bytes plus the content type to serve them with.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Read a response body, refusing anything over `limit` bytes.
///
/// A declared length over the limit fails before any byte is read; a body
/// without a declared length is read until it passes the limit.
pub fn read_capped<R: Read>(reader: R, declared: Option<u64>, limit: u64) -> Result<Vec<u8>> {
    if let Some(size) = declared.filter(|&size| size > limit) {
        return Err(CatalogError::ImageTooLarge { size, limit });
    }

    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)?;
    let size = bytes.len() as u64;
    if size > limit {
        return Err(CatalogError::ImageTooLarge { size, limit });
    }
    Ok(bytes)
}

/// Downloads images from their original host.
pub struct ImageFetcher {
    timeout: Duration,
    max_bytes: u64,
    client: OnceLock<Client>,
}

impl ImageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            max_bytes: config::MAX_IMAGE_BYTES,
            client: OnceLock::new(),
        }
    }

    /// Cap on the size of a fetched image.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }

    /// Download `url` and return its bytes.
    ///
    /// The upstream `Content-Type` is used when it names an image type,
    /// otherwise the type is inferred from the file extension. Bodies over
    /// [`max_bytes`](Self::max_bytes) fail with
    /// [`CatalogError::ImageTooLarge`].
    pub fn fetch(&self, url: &str) -> Result<ImageData> {
        if !is_absolute_url(url) {
            return Err(CatalogError::InvalidArgument(format!(
                "Image URL must be absolute: {url}"
            )));
        }

        debug!(%url, "fetching image");
        let resp = self.client()?.get(url).send()?.error_for_status()?;
        let header = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let declared = resp.content_length();
        let bytes = read_capped(resp, declared, self.max_bytes)?;

        let content_type = header
            .filter(|ct| ct.starts_with("image/"))
            .unwrap_or_else(|| guess_content_type(url).to_string());

        Ok(ImageData {
            content_type,
            bytes,
        })
    }
}
