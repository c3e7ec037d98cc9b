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


//! Navigation property references
//!
//! Redfish links one resource to another with a reference object that
//! only carries `@odata.id`:
//!
//! - Reference form: `{ "@odata.id": "/redfish/v1/Chassis/1/Thermal" }`
//!
//! Collections list their members as an array of such references under
//! `Members`, and some resources (a storage controller's `Drives`) carry
//! arrays of references under other keys. Controllers in the field are
//! not always well formed, so [`Reference::collect`] reads these arrays
//! leniently: entries that are not objects or lack a string `@odata.id`
//! are skipped instead of failing the whole document.

use crate::Document;
use crate::ODataId;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Key of the identifier inside a reference object.
pub const ODATA_ID: &str = "@odata.id";

/// Key of the member list in a collection resource.
pub const MEMBERS: &str = "Members";

/// Reference variant of the navigation property (only `@odata.id`
/// property is relevant).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "@odata.id")]
    odata_id: ODataId,
}

impl Reference {
    /// Create a reference to `odata_id`.
    #[must_use]
    pub const fn new(odata_id: ODataId) -> Self {
        Self { odata_id }
    }

    /// Identifier the reference points to.
    #[must_use]
    pub const fn id(&self) -> &ODataId {
        &self.odata_id
    }

    /// Parse a single reference object.
    #[must_use]
    pub fn from_json(v: &JsonValue) -> Option<Self> {
        v.get(ODATA_ID)
            .and_then(JsonValue::as_str)
            .map(|id| Self::new(ODataId::from(id)))
    }

    /// Collect references stored as an array under `key` of `doc`, in
    /// listed order.
    #[must_use]
    pub fn collect(doc: &Document, key: &str) -> Vec<Self> {
        doc.get(key)
            .and_then(JsonValue::as_array)
            .map(|items| items.iter().filter_map(Self::from_json).collect())
            .unwrap_or_default()
    }

    /// Member references of a collection resource.
    #[must_use]
    pub fn members(collection: &Document) -> Vec<Self> {
        Self::collect(collection, MEMBERS)
    }
}

impl From<Reference> for ODataId {
    fn from(v: Reference) -> Self {
        v.odata_id
    }
}
