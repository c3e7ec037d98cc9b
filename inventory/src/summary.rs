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


//! Flat per-server summary derived from an inventory report.

use crate::InventoryReport;
use serde::Serialize;

/// Health status used when the system reports none.
pub const UNKNOWN_HEALTH: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub hostname: Option<String>,
    pub model: Option<String>,
    pub service_tag: Option<String>,
    /// Warranty end date, if warranty data is available.
    pub warranty_expiry: Option<String>,
    /// BIOS version of the system.
    pub firmware_version: Option<String>,
    /// Lower-cased health of the system.
    pub health_status: String,
    pub last_checked: String,
}

impl From<&InventoryReport> for InventorySummary {
    fn from(report: &InventoryReport) -> Self {
        let system = report.system.as_ref();
        Self {
            hostname: system.and_then(|s| s.hostname.clone()),
            model: system.and_then(|s| s.model.clone()),
            service_tag: system.and_then(|s| s.service_tag.clone()),
            warranty_expiry: report
                .warranty
                .info()
                .and_then(|w| w.end_date.as_ref()?.as_str())
                .map(ToOwned::to_owned),
            firmware_version: system.and_then(|s| s.bios_version.clone()),
            health_status: system
                .and_then(|s| s.health.as_deref())
                .map_or_else(|| UNKNOWN_HEALTH.to_owned(), str::to_lowercase),
            last_checked: report.generated_at.clone(),
        }
    }
}
