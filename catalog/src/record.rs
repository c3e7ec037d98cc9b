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


//! Catalog records.

use rackscan::Resolver;
use serde::Deserialize;
use serde::Serialize;
use std::net::IpAddr;
use time::OffsetDateTime;
use tracing::warn;

/// Physical placement of one server, keyed by hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub hostname: String,
    pub rack: String,
    pub cabinet: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_tag: Option<String>,
    /// Address the hostname resolved to when the record was added.
    #[serde(default)]
    pub management_address: Option<IpAddr>,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
}

/// Record to be added to a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub hostname: String,
    pub rack: String,
    pub cabinet: String,
    pub position: String,
    pub model: Option<String>,
    pub service_tag: Option<String>,
    /// Address the hostname resolved to, if known.
    pub management_address: Option<IpAddr>,
}

impl NewRecord {
    pub fn new(
        hostname: impl Into<String>,
        rack: impl Into<String>,
        cabinet: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            rack: rack.into(),
            cabinet: cabinet.into(),
            position: position.into(),
            model: None,
            service_tag: None,
            management_address: None,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_service_tag(mut self, service_tag: impl Into<String>) -> Self {
        self.service_tag = Some(service_tag.into());
        self
    }

    #[must_use]
    pub fn with_management_address(mut self, address: IpAddr) -> Self {
        self.management_address = Some(address);
        self
    }

    /// Set the address the hostname resolves to. A resolution failure
    /// leaves the address empty.
    pub async fn resolve<R: Resolver>(mut self, resolver: &R) -> Self {
        self.management_address = match resolver.resolve(&self.hostname).await {
            Ok(ip) => Some(ip),
            Err(err) => {
                warn!(hostname = %self.hostname, error = %err, "adding record without address");
                None
            }
        };
        self
    }

    /// Complete the record, added now.
    pub(crate) fn into_record(self) -> CatalogRecord {
        CatalogRecord {
            hostname: self.hostname,
            rack: self.rack,
            cabinet: self.cabinet,
            position: self.position,
            model: self.model,
            service_tag: self.service_tag,
            management_address: self.management_address,
            added_at: OffsetDateTime::now_utc(),
        }
    }
}
