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


//! Baseboard Management Controller (BMC) client abstraction
//!
//! This module defines the transport-agnostic [`Bmc`] trait: the read-only
//! interface inventory collection needs from a Redfish service.
//!
//! Key concepts:
//! - Entity identity: every resource is identified by an `@odata.id` ([`crate::ODataId`]).
//! - Owned results: `get` returns the decoded value by value; callers merge
//!   and reshape documents, so there is nothing to share.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures so a single
//!   controller handle can serve concurrent fetches of one aggregation run.
//! - Retries, timeouts and TLS policy are implementation details hidden
//!   behind the trait.
//! - Errors should implement `std::error::Error` and be safely transferable
//!   across threads.

use serde::de::DeserializeOwned;

use crate::ODataId;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

/// BMC trait defines read access to a Baseboard Management Controller
/// using the Redfish protocol.
pub trait Bmc: Send + Sync {
    /// BMC Error.
    type Error: StdError + Send + Sync + 'static;

    /// Get data of the resource identified by `id`.
    ///
    /// `T` is structure that is used for return type.
    fn get<T: DeserializeOwned + Send + 'static>(
        &self,
        id: &ODataId,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send;
}

/// Credentials used to access the BMC.
///
/// Security notes:
/// - `Debug`/`Display` redact the password.
/// - Prefer short-lived instances and avoid logging credentials.
#[derive(Clone)]
pub struct BmcCredentials {
    /// Username to access BMC.
    pub username: String,
    password: String,
}

impl BmcCredentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Get password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BmcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BmcCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for BmcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BmcCredentials(username: {}, password: [REDACTED])",
            self.username
        )
    }
}
