// SPDX-License-Identifier: MPL-2.0
//! Background preloading of remote slide images.
//!
//! Every remote slide is requested as soon as its carousel is constructed, so
//! images are already decoded by the time they scroll into view. Local files
//! need no preloading; the renderer reads them on first draw.

use crate::error::{FetchError, Result};
use iced::widget::image::Handle;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// Upper bound for one image download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads a remote image and wraps it in a renderer handle.
pub async fn fetch_image(url: String) -> Result<Handle> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()).into());
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(FetchError::Transport(format!("empty body from {url}")).into());
    }

    Ok(Handle::from_bytes(bytes.to_vec()))
}
