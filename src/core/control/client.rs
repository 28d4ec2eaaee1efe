//! One-shot client for the control endpoint.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::client::conn::http1;
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::UnixStream;
use tokio::time::timeout;

use crate::error::{Result, StatusError};

pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(100);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
pub const RESPONSE_HEADER_TIMEOUT: Duration = Duration::from_secs(1);

/// Sends override messages to a running daemon. No retries.
#[derive(Debug, Clone)]
pub struct ControlClient {
    socket_path: PathBuf,
    connect_timeout: Duration,
    request_timeout: Duration,
    response_header_timeout: Duration,
}

impl ControlClient {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            response_header_timeout: RESPONSE_HEADER_TIMEOUT,
        }
    }

    /// POST `message` as the new override. An empty message clears it.
    ///
    /// Anything but `200 OK` is an error carrying the status and body.
    pub async fn send(&self, message: &str) -> Result<()> {
        timeout(self.request_timeout, self.post(message))
            .await
            .map_err(|_| StatusError::Timeout("sending the control request"))?
    }

    async fn post(&self, message: &str) -> Result<()> {
        let stream = timeout(self.connect_timeout, UnixStream::connect(&self.socket_path))
            .await
            .map_err(|_| StatusError::Timeout("connecting to the control socket"))?
            .map_err(|e| {
                StatusError::client(format!(
                    "cannot connect to {}: {}",
                    self.socket_path.display(),
                    e
                ))
            })?;

        let (mut sender, connection) = http1::handshake(TokioIo::new(stream)).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::debug!("Control client connection error: {}", e);
            }
        });

        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(HOST, "status")
            .header(CONTENT_TYPE, "text/plain")
            .body(Full::new(Bytes::from(message.to_owned())))
            .map_err(|e| StatusError::client(e.to_string()))?;

        let response = timeout(self.response_header_timeout, sender.send_request(request))
            .await
            .map_err(|_| StatusError::Timeout("waiting for the control response"))??;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map(|collected| String::from_utf8_lossy(&collected.to_bytes()).trim().to_string())
            .unwrap_or_default();

        Err(StatusError::client(if body.is_empty() {
            status.to_string()
        } else {
            format!("{}: {}", status, body)
        }))
    }
}
