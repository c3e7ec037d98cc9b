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


//! Warranty information from the vendor warranty resource.

use crate::paths;
use crate::Fetcher;
use rackscan_core::Bmc;
use rackscan_core::Document;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Reason reported when the warranty resource is unavailable or holds
/// no data.
pub const NOT_FOUND: &str = "Warranty data not found";
/// Reason reported when the warranty resource is not a document.
pub const NOT_SUPPORTED: &str = "Warranty API not supported on this iDRAC";

/// Warranty dates and status as reported by the controller. Values are
/// kept as reported, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarrantyInfo {
    pub start_date: Option<JsonValue>,
    pub end_date: Option<JsonValue>,
    pub status: Option<JsonValue>,
}

/// Warranty section of the report: warranty data or the "not available"
/// marker with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Warranty {
    Available(WarrantyInfo),
    NotAvailable { message: String },
}

impl Warranty {
    pub fn not_available(message: impl Into<String>) -> Self {
        Self::NotAvailable {
            message: message.into(),
        }
    }

    pub const fn info(&self) -> Option<&WarrantyInfo> {
        match self {
            Self::Available(info) => Some(info),
            Self::NotAvailable { .. } => None,
        }
    }

    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Interpret the warranty resource. `None` means the resource was
    /// unavailable.
    pub fn from_resource(resource: Option<JsonValue>) -> Self {
        match resource {
            None => Self::not_available(NOT_FOUND),
            Some(JsonValue::Object(doc)) if doc.is_empty() => Self::not_available(NOT_FOUND),
            Some(JsonValue::Object(doc)) => Self::Available(WarrantyInfo::from_document(&doc)),
            Some(_) => Self::not_available(NOT_SUPPORTED),
        }
    }
}

impl WarrantyInfo {
    fn from_document(doc: &Document) -> Self {
        let field = |key: &str| doc.get(key).cloned();
        Self {
            start_date: field("WarrantyStartDate"),
            end_date: field("WarrantyEndDate"),
            status: field("WarrantyStatus"),
        }
    }
}

pub async fn extract<B: Bmc>(fetcher: &Fetcher<B>) -> Warranty {
    Warranty::from_resource(fetcher.fetch_as::<JsonValue>(paths::WARRANTY).await)
}
