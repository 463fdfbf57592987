//! HTTP transfer plumbing: shared client construction, retrying byte
//! downloads, and streaming archive downloads with a progress bar.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use modkit_util::errors::ModkitError;
use modkit_util::progress;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for GitHub requests.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("modkit/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            ModkitError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Download raw bytes from a URL, with retries on transient failures.
///
/// Returns `Ok(None)` for 404 so callers can distinguish "not published"
/// from a transport failure.
pub async fn download_bytes(client: &Client, url: &str) -> miette::Result<Option<Vec<u8>>> {
    let mut last_err = String::new();

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            tokio::time::sleep(RETRY_DELAY * attempt).await;
        }

        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(ModkitError::Network {
                        message: format!("HTTP {status} fetching {url}"),
                    }
                    .into());
                }

                let bytes = resp.bytes().await.map_err(|e| ModkitError::Network {
                    message: format!("Failed to read response from {url}: {e}"),
                })?;
                return Ok(Some(bytes.to_vec()));
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(ModkitError::Network {
                    message: format!("Request to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(ModkitError::Network {
        message: format!("Failed after {MAX_RETRIES} retries for {url}: {last_err}"),
    }
    .into())
}

/// Stream a release archive to `dest`, showing a progress bar for large
/// transfers.
///
/// Returns `Ok(false)` for 404 without creating the destination file.
pub async fn download_to_path(
    client: &Client,
    url: &str,
    dest: &Path,
    label: &str,
) -> miette::Result<bool> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| ModkitError::Network {
            message: format!("Request to {url} failed: {e}"),
        })?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(false);
    }
    if !resp.status().is_success() {
        return Err(ModkitError::Network {
            message: format!("HTTP {} fetching {url}", resp.status()),
        }
        .into());
    }

    let total = resp.content_length().unwrap_or(0);
    let pb = (total > 100_000).then(|| progress::download_bar(total, label));

    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(ModkitError::Io)?;

    let mut stream = resp.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ModkitError::Network {
            message: format!("Failed to read {url}: {e}"),
        })?;
        file.write_all(&chunk).await.map_err(ModkitError::Io)?;
        written += chunk.len() as u64;
        if let Some(pb) = &pb {
            pb.set_position(written);
        }
    }
    file.flush().await.map_err(ModkitError::Io)?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(true)
}
