//! HTTP control endpoint bound to a unix socket.
//!
//! `POST` with any path replaces the override message with the request
//! body. Every other method gets `405 Use POST`.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::UnixListener;

use crate::core::status::OverrideStore;
use crate::error::{Result, StatusError};

/// Removes the socket file when dropped so the next daemon can bind.
#[derive(Debug)]
pub struct SocketGuard {
    path: PathBuf,
}

impl Drop for SocketGuard {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => log::info!("Removed control socket {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "Could not remove control socket {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Bind the control socket, replacing a stale one left by a previous run.
pub fn bind(path: &Path) -> Result<(UnixListener, SocketGuard)> {
    let bind_error = |source| StatusError::Bind {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(bind_error)?;
    }

    match fs::remove_file(path) {
        Ok(()) => log::debug!("Removed stale socket {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(bind_error(e)),
    }

    let listener = UnixListener::bind(path).map_err(bind_error)?;
    let guard = SocketGuard {
        path: path.to_path_buf(),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            log::warn!("Could not restrict {}: {}", path.display(), e);
        }
    }

    log::info!("Control endpoint listening on {}", path.display());
    Ok((listener, guard))
}

/// Pause after a failed accept, e.g. while out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections forever, one task per connection.
pub async fn serve(listener: UnixListener, store: OverrideStore) -> Result<()> {
    loop {
        let stream = match listener.accept().await {
            Ok((stream, _addr)) => stream,
            Err(e) => {
                log::warn!("Control accept error: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };

        let store = store.clone();
        tokio::spawn(async move {
            let service = service_fn(move |request| {
                let store = store.clone();
                async move { Ok::<_, Infallible>(handle(request, &store).await) }
            });

            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                log::debug!("Control connection error: {}", e);
            }
        });
    }
}

async fn handle(request: Request<Incoming>, store: &OverrideStore) -> Response<Full<Bytes>> {
    if request.method() != Method::POST {
        return reply(StatusCode::METHOD_NOT_ALLOWED, "Use POST".to_string());
    }

    let body = request
        .into_body()
        .collect()
        .await
        .map(|collected| collected.to_bytes());
    apply_body(body, store)
}

/// Applies a POST body to the store and builds the reply.
///
/// An unreadable body is answered with `200` and the error text, leaving
/// the current message untouched.
fn apply_body<E: Display>(
    body: std::result::Result<Bytes, E>,
    store: &OverrideStore,
) -> Response<Full<Bytes>> {
    match body {
        Ok(bytes) => {
            store.set(String::from_utf8_lossy(&bytes).into_owned());
            reply(StatusCode::OK, String::new())
        }
        Err(e) => {
            log::debug!("Unreadable control request body: {}", e);
            reply(StatusCode::OK, e.to_string())
        }
    }
}

fn reply(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
}
