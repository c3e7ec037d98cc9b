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


//! OData identifiers
//!
//! [`ODataId`] is the value of `@odata.id`, the canonical resource path.
//! Controllers return absolute paths (`/redfish/v1/Systems/1`) in links while
//! callers usually address resources relative to the service root
//! (`/Systems/1`). [`ODataId::resolve`] accepts both forms.
//!
//! Example
//! ```rust
//! use rackscan_core::ODataId;
//!
//! let root = ODataId::service_root();
//! assert_eq!(root.to_string(), "/redfish/v1");
//! assert_eq!(ODataId::resolve("/Systems/1").to_string(), "/redfish/v1/Systems/1");
//! assert_eq!(
//!     ODataId::resolve("/redfish/v1/Systems/1").to_string(),
//!     "/redfish/v1/Systems/1"
//! );
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;

const SERVICE_ROOT: &str = "/redfish/v1";

/// Type for `@odata.id` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// Redfish service root id.
    #[must_use]
    pub fn service_root() -> Self {
        Self(SERVICE_ROOT.into())
    }

    /// Resolve `path` against the service root. Paths that already start
    /// with the service root are taken as is.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        if path == SERVICE_ROOT || path.starts_with("/redfish/v1/") {
            return Self(path.into());
        }
        if path.is_empty() {
            return Self::service_root();
        }
        if path.starts_with('/') {
            Self(format!("{SERVICE_ROOT}{path}"))
        } else {
            Self(format!("{SERVICE_ROOT}/{path}"))
        }
    }

    /// Raw path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ODataId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}
