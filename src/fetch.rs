//! HTTP fetch collaborator.
//!
//! Downloads a page with a bounded body size and hands back UTF-8 HTML.
//! Timeouts, redirects and gzip are delegated to `reqwest`; cancellation is
//! by dropping the future.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{redirect, Client, Response, StatusCode};

use crate::encoding;
use crate::error::{Error, ErrorKind, Result};
use crate::options::Options;
use crate::patterns::CONTENT_TYPE_CHARSET;

const OP: &str = "fetch";

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Async page downloader configured from [`Options`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_content_length: usize,
}

impl Fetcher {
    /// Builds the HTTP client: timeout, user agent, redirect cap, gzip and
    /// browser-like default headers.
    pub fn new(options: &Options) -> Result<Self> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE));

        let client = Client::builder()
            .timeout(options.http_timeout)
            .user_agent(options.user_agent.as_str())
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::new(OP, None, ErrorKind::Fetch(e.to_string())))?;

        Ok(Self {
            client,
            max_content_length: options.max_content_length,
        })
    }

    /// Fetches `url` and returns its body decoded to UTF-8.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        self.fetch_with_headers(url, HeaderMap::new()).await
    }

    /// Like [`Fetcher::fetch`], with `headers` overriding the defaults.
    pub async fn fetch_with_headers(&self, url: &str, headers: HeaderMap) -> Result<String> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        log::debug!("{url} -> {status}");
        if status != StatusCode::OK {
            return Err(Error::new(OP, Some(url), ErrorKind::HttpStatus(status.as_u16())));
        }

        let charset = header_charset(&response);
        let body = self.read_body(url, response).await?;
        Ok(encoding::decode_with_charset(&body, charset.as_deref()))
    }

    /// Reads the body chunk by chunk, failing as soon as it exceeds the cap.
    async fn read_body(&self, url: &str, mut response: Response) -> Result<Vec<u8>> {
        let too_large = || Error::new(OP, Some(url), ErrorKind::ContentTooLarge);

        if let Some(declared) = response.content_length() {
            if usize::try_from(declared).unwrap_or(usize::MAX) > self.max_content_length {
                return Err(too_large());
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| transport_error(url, &e))? {
            if body.len() + chunk.len() > self.max_content_length {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn header_charset(response: &Response) -> Option<String> {
    let content_type = response.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    CONTENT_TYPE_CHARSET
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn transport_error(url: &str, err: &reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        ErrorKind::Timeout
    } else {
        ErrorKind::Fetch(err.to_string())
    };
    Error::new(OP, Some(url), kind)
}
