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


//! Storage controllers and their drives.
//!
//! Two-level walk: the storage collection lists one resource per
//! controller, and every controller resource references its drives
//! under `Drives`. An unavailable controller resource hides its drives
//! too; an unavailable drive only hides itself.

use crate::oem::dell::DellController;
use crate::oem::dell::DellPhysicalDisk;
use crate::oem::merge;
use crate::oem::merge_from;
use crate::paths;
use crate::Fetcher;
use futures_util::future::join_all;
use rackscan_core::Bmc;
use rackscan_core::Document;
use rackscan_core::Reference;
use serde::Serialize;
use serde_json::Value as JsonValue;

const STORAGE_CONTROLLERS: &str = "StorageControllers";
const DRIVES: &str = "Drives";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StorageInventory {
    pub controllers: Vec<Document>,
    pub drives: Vec<Document>,
}

pub async fn extract<B: Bmc>(fetcher: &Fetcher<B>) -> StorageInventory {
    let storages = fetcher.walk(paths::STORAGE).await;

    let drive_refs = storages
        .iter()
        .map(|storage| Reference::collect(storage, DRIVES))
        .collect::<Vec<_>>();
    let drive_lists = join_all(drive_refs.into_iter().map(|refs| fetcher.fetch_all(refs))).await;

    let controllers = storages.iter().map(controller).collect();
    let drives = drive_lists
        .into_iter()
        .flatten()
        .map(merge::<DellPhysicalDisk>)
        .collect();

    StorageInventory {
        controllers,
        drives,
    }
}

/// First controller descriptor of a storage resource with the
/// resource's controller extension overlaid. A first entry that is not
/// an object counts as an empty descriptor.
fn controller(storage: &Document) -> Document {
    let descriptor = storage
        .get(STORAGE_CONTROLLERS)
        .and_then(JsonValue::as_array)
        .and_then(|descriptors| descriptors.first())
        .and_then(JsonValue::as_object)
        .cloned()
        .unwrap_or_default();
    merge_from::<DellController>(descriptor, storage)
}
