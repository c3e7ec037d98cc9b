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


//! Resolution of host names to management addresses.
//!
//! Aggregation resolves the host exactly once, before any connection to
//! the controller exists. IP literals are accepted as-is and never reach
//! the name service.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::net::IpAddr;

/// Port used for lookups. Only the address part of the answer is used.
const HTTPS_PORT: u16 = 443;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("failed to resolve {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("no address found for {host}")]
    NoAddress { host: String },
}

impl ResolveError {
    pub fn host(&self) -> &str {
        match self {
            Self::Lookup { host, .. } | Self::NoAddress { host } => host,
        }
    }
}

/// Host name resolution.
pub trait Resolver: Send + Sync {
    fn resolve(&self, host: &str) -> impl Future<Output = Result<IpAddr, ResolveError>> + Send;
}

/// Resolver backed by the system name service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl Resolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
        if let Some(ip) = ip_literal(host) {
            return Ok(ip);
        }
        let mut addrs = tokio::net::lookup_host((host, HTTPS_PORT))
            .await
            .map_err(|source| ResolveError::Lookup {
                host: host.to_owned(),
                source,
            })?;
        addrs
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| ResolveError::NoAddress {
                host: host.to_owned(),
            })
    }
}

/// Resolver with a fixed table of names.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, IpAddr>,
}

impl StaticResolver {
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>, ip: IpAddr) -> Self {
        self.insert(host, ip);
        self
    }

    pub fn insert(&mut self, host: impl Into<String>, ip: IpAddr) {
        self.hosts.insert(host.into(), ip);
    }
}

impl Resolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
        ip_literal(host)
            .or_else(|| self.hosts.get(host).copied())
            .ok_or_else(|| ResolveError::NoAddress {
                host: host.to_owned(),
            })
    }
}

/// Parse `host` as an IP literal. IPv6 may be bracketed.
pub(crate) fn ip_literal(host: &str) -> Option<IpAddr> {
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .ok()
}
