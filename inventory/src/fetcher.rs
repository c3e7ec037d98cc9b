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


//! Resource fetcher.
//!
//! [`Fetcher`] turns every failure of the underlying [`Bmc`] (transport,
//! HTTP status, JSON decoding) into `None` after logging it. Callers see a
//! typed "unavailable" outcome and never an error.

use rackscan_core::Bmc;
use rackscan_core::Document;
use rackscan_core::ODataId;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use tracing::warn;

/// Default number of member fetches a single walk keeps in flight.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;

/// Fetches resources of one management endpoint.
pub struct Fetcher<B: Bmc> {
    bmc: Arc<B>,
    endpoint: Arc<str>,
    max_concurrent_fetches: usize,
}

impl<B: Bmc> Fetcher<B> {
    /// Create fetcher for `bmc` reachable at `endpoint`. The endpoint is
    /// only used in diagnostics.
    pub fn new(bmc: Arc<B>, endpoint: impl Into<String>) -> Self {
        Self {
            bmc,
            endpoint: endpoint.into().into(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Limit member fetches in flight per walk. Zero is treated as one.
    #[must_use]
    pub fn with_max_concurrent_fetches(mut self, limit: usize) -> Self {
        self.max_concurrent_fetches = limit.max(1);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    pub fn bmc(&self) -> &B {
        self.bmc.as_ref()
    }

    /// Fetch the document at `path`. `path` is relative to the service
    /// root or absolute.
    pub async fn fetch(&self, path: &str) -> Option<Document> {
        self.fetch_as(path).await
    }

    /// Fetch and decode the resource at `path` as `T`.
    pub async fn fetch_as<T: DeserializeOwned + Send + 'static>(&self, path: &str) -> Option<T> {
        self.fetch_id(&ODataId::resolve(path)).await
    }

    pub(crate) async fn fetch_id<T: DeserializeOwned + Send + 'static>(
        &self,
        id: &ODataId,
    ) -> Option<T> {
        match self.bmc.get::<T>(id).await {
            Ok(v) => {
                debug!(endpoint = %self.endpoint, path = %id, "fetched resource");
                Some(v)
            }
            Err(err) => {
                warn!(
                    endpoint = %self.endpoint,
                    path = %id,
                    error = %err,
                    "resource unavailable"
                );
                None
            }
        }
    }
}

impl<B: Bmc> Clone for Fetcher<B> {
    fn clone(&self) -> Self {
        Self {
            bmc: self.bmc.clone(),
            endpoint: self.endpoint.clone(),
            max_concurrent_fetches: self.max_concurrent_fetches,
        }
    }
}
