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


//! Collection walker.
//!
//! A collection resource lists its members as references under
//! `Members`. Walking fetches every member and keeps the ones that could
//! be fetched, in listed order. Up to
//! [`Fetcher::max_concurrent_fetches`] member fetches run at once.

use crate::Fetcher;
use futures_util::future;
use futures_util::stream;
use futures_util::StreamExt as _;
use rackscan_core::Bmc;
use rackscan_core::Document;
use rackscan_core::ODataId;
use rackscan_core::Reference;

impl<B: Bmc> Fetcher<B> {
    /// Walk collection at `collection_path`. An unavailable collection
    /// yields no members.
    pub async fn walk(&self, collection_path: &str) -> Vec<Document> {
        match self.fetch(collection_path).await {
            Some(collection) => self.fetch_all(Reference::members(&collection)).await,
            None => Vec::new(),
        }
    }

    /// Fetch every referenced resource, dropping unavailable ones.
    pub async fn fetch_all(&self, refs: Vec<Reference>) -> Vec<Document> {
        let fetches = refs.into_iter().map(|r| {
            let this = self.clone();
            async move {
                let id = ODataId::resolve(r.id().as_str());
                this.fetch_id::<Document>(&id).await
            }
        });
        stream::iter(fetches)
            .buffered(self.max_concurrent_fetches())
            .filter_map(future::ready)
            .collect()
            .await
    }
}
