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


//! System information of the computer system resource.

use crate::document::string_at;
use crate::oem::dell::DellSystem;
use crate::oem::OemExtension;
use crate::paths;
use crate::Fetcher;
use rackscan_core::Bmc;
use rackscan_core::Document;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value as JsonValue;

/// Normalized system information.
///
/// Serializes as a flat document: the normalized fields followed by the
/// vendor system attributes, which win on key collision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemInfo {
    pub hostname: Option<String>,
    pub model: Option<String>,
    pub service_tag: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub health: Option<String>,
    pub power_state: Option<String>,
    pub bios_version: Option<String>,
    /// Vendor system attributes (`Oem.Dell.DellSystem`).
    pub vendor: Document,
}

impl SystemInfo {
    /// Extract system information from a computer system document.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        Self {
            hostname: string_at(doc, &["HostName"]),
            model: string_at(doc, &["Model"]),
            service_tag: string_at(doc, &["SKU"]),
            serial_number: string_at(doc, &["SerialNumber"]),
            manufacturer: string_at(doc, &["Manufacturer"]),
            health: string_at(doc, &["Status", "Health"]),
            power_state: string_at(doc, &["PowerState"]),
            bios_version: string_at(doc, &["BiosVersion"]),
            vendor: DellSystem::locate(doc).cloned().unwrap_or_default(),
        }
    }

    /// Flattened document form.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let fields = [
            ("hostname", &self.hostname),
            ("model", &self.model),
            ("service_tag", &self.service_tag),
            ("serial_number", &self.serial_number),
            ("manufacturer", &self.manufacturer),
            ("health", &self.health),
            ("power_state", &self.power_state),
            ("bios_version", &self.bios_version),
        ];
        let mut doc = fields
            .into_iter()
            .map(|(key, value)| {
                let value = value.clone().map_or(JsonValue::Null, JsonValue::String);
                (key.to_owned(), value)
            })
            .collect::<Document>();
        doc.extend(self.vendor.clone());
        doc
    }
}

impl Serialize for SystemInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

/// Fetch the computer system. `None` if it is unavailable.
pub async fn extract<B: Bmc>(fetcher: &Fetcher<B>) -> Option<SystemInfo> {
    fetcher
        .fetch(paths::SYSTEM)
        .await
        .map(|doc| SystemInfo::from_document(&doc))
}
