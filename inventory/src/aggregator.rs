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


//! Aggregation of all inventory sections of one endpoint.
//!
//! Every extractor of a run is spawned as its own task and the run joins
//! all of them before assembling the report. Extractors never fail; a
//! task that does not complete is an orchestration fault and turns the
//! whole run into an [`ErrorDocument`].

use crate::hardware;
use crate::paths;
#[cfg(feature = "bmc-http")]
use crate::resolve::ip_literal;
use crate::resolve::Resolver;
use crate::storage;
use crate::system;
use crate::thermal;
use crate::warranty;
use crate::Error;
use crate::ErrorDocument;
use crate::Fetcher;
use crate::HardwareInventory;
use crate::HostInventory;
use crate::Inventory;
use crate::InventoryReport;
use crate::StorageInventory;
use crate::SystemInfo;
use crate::ThermalsAndPower;
use crate::Warranty;
use crate::DEFAULT_MAX_CONCURRENT_FETCHES;
use futures_util::stream;
use futures_util::StreamExt as _;
use rackscan_core::Bmc;
use rackscan_core::BmcCredentials;
use rackscan_core::Document;
use std::net::IpAddr;
#[cfg(feature = "bmc-http")]
use std::net::SocketAddr;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::task::JoinSet;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

#[cfg(feature = "bmc-http")]
use rackscan_bmc_http::reqwest::Client;
#[cfg(feature = "bmc-http")]
use rackscan_bmc_http::reqwest::ClientParams;
#[cfg(feature = "bmc-http")]
use rackscan_bmc_http::HttpBmc;
#[cfg(feature = "bmc-http")]
use rackscan_bmc_http::RetryPolicy;
#[cfg(feature = "bmc-http")]
use url::Url;

/// Default number of endpoints aggregated at once by
/// [`aggregate_many`].
pub const DEFAULT_MAX_CONCURRENT_ENDPOINTS: usize = 4;

/// Management endpoint of one server.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Host name or IP literal of the management controller.
    pub host: String,
    pub credentials: BmcCredentials,
    /// Verify the TLS certificate of the controller.
    pub verify_tls: bool,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, credentials: BmcCredentials) -> Self {
        Self {
            host: host.into(),
            credentials,
            verify_tls: true,
        }
    }

    #[must_use]
    pub const fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }
}

/// Settings shared by all aggregations of a process.
#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    /// Parameters of the HTTP client. `accept_invalid_certs` is
    /// overridden per endpoint by [`Endpoint::verify_tls`].
    #[cfg(feature = "bmc-http")]
    pub client: ClientParams,
    #[cfg(feature = "bmc-http")]
    pub retry: RetryPolicy,
    pub max_concurrent_fetches: usize,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            #[cfg(feature = "bmc-http")]
            client: ClientParams::default(),
            #[cfg(feature = "bmc-http")]
            retry: RetryPolicy::default(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

/// Inventory aggregator bound to one resolved endpoint.
pub struct Aggregator<B: Bmc> {
    fetcher: Fetcher<B>,
    address: String,
}

enum Section {
    System(Option<SystemInfo>),
    Hardware(HardwareInventory),
    Storage(StorageInventory),
    Thermal(ThermalsAndPower),
    Firmware(Option<Document>),
    Warranty(Warranty),
}

impl<B: Bmc + 'static> Aggregator<B> {
    /// Create aggregator for `bmc` at already resolved `address`.
    pub fn new(bmc: Arc<B>, address: impl Into<String>, settings: &AggregatorSettings) -> Self {
        let address = address.into();
        let fetcher = Fetcher::new(bmc, address.clone())
            .with_max_concurrent_fetches(settings.max_concurrent_fetches);
        Self { fetcher, address }
    }

    /// Resolve `host` and create aggregator for the BMC built by
    /// `build` from the resolved address. `build` is not called if
    /// resolution fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] if `host` cannot be resolved, or the
    /// error returned by `build`.
    pub async fn connect_with<R, F>(
        host: &str,
        resolver: &R,
        settings: &AggregatorSettings,
        build: F,
    ) -> Result<Self, Error>
    where
        R: Resolver,
        F: FnOnce(IpAddr) -> Result<B, Error>,
    {
        let ip = resolver.resolve(host).await?;
        debug!(host, address = %ip, "resolved endpoint");
        let bmc = build(ip)?;
        Ok(Self::new(Arc::new(bmc), ip.to_string(), settings))
    }

    /// Address the aggregator talks to.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub const fn fetcher(&self) -> &Fetcher<B> {
        &self.fetcher
    }

    /// Collect the inventory. Never fails: an orchestration fault
    /// is reported as an error document.
    #[tracing::instrument(skip_all, fields(endpoint = %self.address))]
    pub async fn aggregate(&self) -> Inventory {
        info!("collecting inventory");
        match self.try_aggregate().await {
            Ok(report) => {
                info!("inventory collected");
                report.into()
            }
            Err(err) => {
                error!(error = %err, "inventory collection failed");
                ErrorDocument::new(err.to_string()).into()
            }
        }
    }

    async fn try_aggregate(&self) -> Result<InventoryReport, Error> {
        let mut tasks = JoinSet::new();
        let f = self.fetcher.clone();
        tasks.spawn(async move { Section::System(system::extract(&f).await) });
        let f = self.fetcher.clone();
        tasks.spawn(async move { Section::Hardware(hardware::extract(&f).await) });
        let f = self.fetcher.clone();
        tasks.spawn(async move { Section::Storage(storage::extract(&f).await) });
        let f = self.fetcher.clone();
        tasks.spawn(async move { Section::Thermal(thermal::extract(&f).await) });
        let f = self.fetcher.clone();
        tasks.spawn(async move { Section::Firmware(f.fetch(paths::FIRMWARE_INVENTORY).await) });
        let f = self.fetcher.clone();
        tasks.spawn(async move { Section::Warranty(warranty::extract(&f).await) });

        let mut system = None;
        let mut hardware = HardwareInventory::default();
        let mut storage = StorageInventory::default();
        let mut thermals_and_power = ThermalsAndPower::default();
        let mut firmware = None;
        let mut warranty = None;
        while let Some(section) = tasks.join_next().await {
            match section? {
                Section::System(v) => system = v,
                Section::Hardware(v) => hardware = v,
                Section::Storage(v) => storage = v,
                Section::Thermal(v) => thermals_and_power = v,
                Section::Firmware(v) => firmware = v,
                Section::Warranty(v) => warranty = Some(v),
            }
        }

        Ok(InventoryReport {
            endpoint_address: self.address.clone(),
            generated_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            system,
            hardware,
            storage,
            thermals_and_power,
            firmware,
            warranty: warranty
                .unwrap_or_else(|| Warranty::not_available(warranty::NOT_FOUND)),
        })
    }
}

#[cfg(feature = "bmc-http")]
impl Aggregator<HttpBmc<Client>> {
    /// Resolve the endpoint and create aggregator talking HTTPS to the
    /// resolved address. The request URL keeps the host name so the
    /// certificate is verified against it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] if the host cannot be resolved, or
    /// an error if the HTTP client cannot be created.
    pub async fn connect<R: Resolver>(
        endpoint: &Endpoint,
        resolver: &R,
        settings: &AggregatorSettings,
    ) -> Result<Self, Error> {
        Self::connect_with(&endpoint.host, resolver, settings, |ip| {
            http_bmc(service_url(&endpoint.host, ip)?, Some(ip), endpoint, settings)
        })
        .await
    }

    /// Create aggregator talking to the service at `url` without
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_url(
        url: Url,
        endpoint: &Endpoint,
        settings: &AggregatorSettings,
    ) -> Result<Self, Error> {
        let address = url.host_str().unwrap_or_default().to_owned();
        let bmc = http_bmc(url, None, endpoint, settings)?;
        Ok(Self::new(Arc::new(bmc), address, settings))
    }
}

/// Service URL of `host`. Host names are kept; IP literals are replaced
/// by the resolved address.
#[cfg(feature = "bmc-http")]
fn service_url(host: &str, ip: IpAddr) -> Result<Url, Error> {
    let url = match ip {
        _ if ip_literal(host).is_none() => format!("https://{host}"),
        IpAddr::V4(ip) => format!("https://{ip}"),
        IpAddr::V6(ip) => format!("https://[{ip}]"),
    };
    Ok(Url::parse(&url)?)
}

/// Client parameters for `url`. A host name in `url` is pinned to
/// `address` so the client does not look it up again.
#[cfg(feature = "bmc-http")]
fn client_params(
    url: &Url,
    address: Option<IpAddr>,
    endpoint: &Endpoint,
    settings: &AggregatorSettings,
) -> ClientParams {
    let params = settings
        .client
        .clone()
        .accept_invalid_certs(!endpoint.verify_tls);
    match (url.domain(), address) {
        (Some(host), Some(ip)) => {
            let port = url.port_or_known_default().unwrap_or(443);
            params.resolve(host, SocketAddr::new(ip, port))
        }
        _ => params,
    }
}

#[cfg(feature = "bmc-http")]
fn http_bmc(
    url: Url,
    address: Option<IpAddr>,
    endpoint: &Endpoint,
    settings: &AggregatorSettings,
) -> Result<HttpBmc<Client>, Error> {
    let params = client_params(&url, address, endpoint, settings);
    let client = Client::with_params(params).map_err(Error::HttpClient)?;
    Ok(HttpBmc::new(
        client,
        url,
        endpoint.credentials.clone(),
        settings.retry,
    ))
}

/// Aggregate every endpoint, at most `concurrency` at once. Each endpoint
/// is isolated: a failure to connect to one becomes an error document
/// for that endpoint only. Results keep the order of `endpoints`.
#[cfg(feature = "bmc-http")]
pub async fn aggregate_many<R: Resolver>(
    endpoints: &[Endpoint],
    resolver: &R,
    settings: &AggregatorSettings,
    concurrency: usize,
) -> Vec<HostInventory> {
    aggregate_many_with(endpoints, resolver, settings, concurrency, |ip, endpoint| {
        http_bmc(service_url(&endpoint.host, ip)?, Some(ip), endpoint, settings)
    })
    .await
}

/// [`aggregate_many`] with BMCs built by `build`.
pub async fn aggregate_many_with<B, R, F>(
    endpoints: &[Endpoint],
    resolver: &R,
    settings: &AggregatorSettings,
    concurrency: usize,
    build: F,
) -> Vec<HostInventory>
where
    B: Bmc + 'static,
    R: Resolver,
    F: Fn(IpAddr, &Endpoint) -> Result<B, Error>,
{
    let build = &build;
    let runs = endpoints.iter().map(|endpoint| async move {
        let connected = Aggregator::connect_with(&endpoint.host, resolver, settings, |ip| {
            build(ip, endpoint)
        })
        .await;
        let result = match connected {
            Ok(aggregator) => aggregator.aggregate().await,
            Err(err) => {
                warn!(host = %endpoint.host, error = %err, "skipping endpoint");
                ErrorDocument::new(err.to_string()).into()
            }
        };
        HostInventory {
            host: endpoint.host.clone(),
            result,
        }
    });
    stream::iter(runs)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
