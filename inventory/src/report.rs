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


//! Aggregation results.

use crate::HardwareInventory;
use crate::StorageInventory;
use crate::SystemInfo;
use crate::ThermalsAndPower;
use crate::Warranty;
use rackscan_core::Document;
use serde::Serialize;
use serde::Serializer;

/// Inventory of one server, assembled from every extractor.
///
/// Every section is populated independently. An unavailable system
/// resource serializes as an empty object, an unavailable firmware
/// inventory as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    pub endpoint_address: String,
    /// RFC 3339 UTC timestamp of report assembly.
    pub generated_at: String,
    #[serde(serialize_with = "system_or_empty")]
    pub system: Option<SystemInfo>,
    pub hardware: HardwareInventory,
    pub storage: StorageInventory,
    pub thermals_and_power: ThermalsAndPower,
    pub firmware: Option<Document>,
    pub warranty: Warranty,
}

fn system_or_empty<S: Serializer>(
    system: &Option<SystemInfo>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match system {
        Some(system) => system.serialize(serializer),
        None => Document::new().serialize(serializer),
    }
}

/// Whole-run failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    status: &'static str,
    pub message: String,
}

impl ErrorDocument {
    pub const STATUS: &'static str = "error";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Self::STATUS,
            message: message.into(),
        }
    }

    pub const fn status(&self) -> &'static str {
        self.status
    }
}

/// Outcome of one aggregation run: a full or partial report, or a
/// tagged error document. Serializes as the inner document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Inventory {
    Report(Box<InventoryReport>),
    Failed(ErrorDocument),
}

impl Inventory {
    pub fn report(&self) -> Option<&InventoryReport> {
        match self {
            Self::Report(report) => Some(&**report),
            Self::Failed(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&ErrorDocument> {
        match self {
            Self::Report(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    pub const fn is_report(&self) -> bool {
        matches!(self, Self::Report(_))
    }
}

impl From<InventoryReport> for Inventory {
    fn from(report: InventoryReport) -> Self {
        Self::Report(Box::new(report))
    }
}

impl From<ErrorDocument> for Inventory {
    fn from(err: ErrorDocument) -> Self {
        Self::Failed(err)
    }
}

/// Inventory outcome of one host of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostInventory {
    pub host: String,
    pub result: Inventory,
}
