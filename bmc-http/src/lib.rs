// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! HTTP transport for [`rackscan_core::Bmc`].
//!
//! [`HttpBmc`] binds an [`HttpClient`] to one controller endpoint and its
//! credentials. Every GET goes through a bounded [`RetryPolicy`]: errors the
//! client reports as transient (see [`RetryableError`]) are retried with
//! exponential backoff, everything else is returned on the first attempt.

#[cfg(feature = "reqwest")]
pub mod reqwest;

use maybe_backoff::MaybeBackoff;
use rackscan_core::Bmc;
use rackscan_core::ODataId;
use serde::de::DeserializeOwned;
use std::{error::Error as StdError, future::Future};
use tracing::debug;
use url::Url;

#[doc(inline)]
pub use rackscan_core::BmcCredentials;

pub trait HttpClient: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Perform an authenticated HTTP GET request and decode the JSON body.
    fn get<T>(
        &self,
        url: Url,
        credentials: &BmcCredentials,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        T: DeserializeOwned + Send;
}

/// Trait for errors that can tell whether repeating the request may
/// succeed.
pub trait RetryableError {
    /// Returns true for failures that are expected to clear up on their
    /// own: connection problems, timeouts, 5xx responses.
    fn is_transient(&self) -> bool;
}

/// Bounded retry policy applied to every GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 2 }
    }
}

impl RetryPolicy {
    /// Retry transient failures up to `max_retries` times.
    #[must_use]
    pub const fn with_max_retries(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Single attempt per request.
    #[must_use]
    pub const fn none() -> Self {
        Self { max_retries: 0 }
    }

    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// HTTP-based BMC implementation that wraps an [`HttpClient`].
///
/// This struct combines an HTTP client with BMC endpoint information and credentials
/// to provide a Redfish client implementation. It implements the [`Bmc`] trait
/// to provide standardized access to Redfish services.
///
/// # Type Parameters
///
/// * `C` - The HTTP client implementation to use
///
/// # Examples
///
/// ```rust,no_run
/// use rackscan_bmc_http::HttpBmc;
/// use rackscan_bmc_http::BmcCredentials;
/// use rackscan_bmc_http::RetryPolicy;
/// use rackscan_bmc_http::reqwest::Client;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = BmcCredentials::new("admin".to_string(), "password".to_string());
/// let http_client = Client::new()?;
/// let endpoint = Url::parse("https://192.168.1.100")?;
///
/// let bmc = HttpBmc::new(http_client, endpoint, credentials, RetryPolicy::default());
/// # Ok(())
/// # }
/// ```
pub struct HttpBmc<C: HttpClient> {
    client: C,
    redfish_endpoint: RedfishEndpoint,
    credentials: BmcCredentials,
    retry: RetryPolicy,
}

impl<C: HttpClient> HttpBmc<C> {
    /// Create a new HTTP-based BMC client.
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client implementation to use for requests
    /// * `redfish_endpoint` - The base URL of the Redfish service (e.g., `https://192.168.1.100`)
    /// * `credentials` - Authentication credentials for the BMC
    /// * `retry` - Retry policy for transient failures
    pub fn new(
        client: C,
        redfish_endpoint: Url,
        credentials: BmcCredentials,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            client,
            redfish_endpoint: RedfishEndpoint::from(redfish_endpoint),
            credentials,
            retry,
        }
    }

    /// Endpoint this client talks to.
    pub const fn endpoint(&self) -> &RedfishEndpoint {
        &self.redfish_endpoint
    }
}

/// Base URL of a Redfish service.
///
/// Provides conversion from `ODataId` paths to full request URLs.
#[derive(Debug, Clone)]
pub struct RedfishEndpoint {
    base_url: Url,
}

impl RedfishEndpoint {
    /// Create a new `RedfishEndpoint` from a base URL
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Convert a path to a full Redfish endpoint URL
    #[must_use]
    pub fn with_path(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

impl From<Url> for RedfishEndpoint {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl From<&RedfishEndpoint> for Url {
    fn from(endpoint: &RedfishEndpoint) -> Self {
        endpoint.base_url.clone()
    }
}

impl<C: HttpClient> HttpBmc<C>
where
    C::Error: RetryableError,
{
    /// Perform a GET request honoring the retry policy.
    ///
    /// The first attempt is sent immediately; each retry waits for the
    /// next backoff interval.
    async fn get_with_retry<T: DeserializeOwned + Send>(
        &self,
        endpoint_url: Url,
        id: &ODataId,
    ) -> Result<T, C::Error> {
        let mut backoff = MaybeBackoff::default();
        let mut attempt = 0;
        loop {
            backoff.sleep().await;
            match self
                .client
                .get::<T>(endpoint_url.clone(), &self.credentials)
                .await
            {
                Ok(response) => return Ok(response),
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    backoff.arm();
                    debug!(%id, attempt, error = %err, "transient BMC error, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl<C: HttpClient> Bmc for HttpBmc<C>
where
    C::Error: RetryableError,
{
    type Error = C::Error;

    async fn get<T: DeserializeOwned + Send + 'static>(
        &self,
        id: &ODataId,
    ) -> Result<T, Self::Error> {
        let endpoint_url = self.redfish_endpoint.with_path(id.as_str());
        self.get_with_retry(endpoint_url, id).await
    }
}
