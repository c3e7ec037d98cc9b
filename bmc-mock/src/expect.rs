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


//! Expectations for Bmc Mock.

use rackscan_core::ODataId;
use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;

pub type Response<E> = Result<JsonValue, E>;

/// Request expected by BMC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedRequest {
    /// Expected Get.
    Get { id: ODataId },
}

impl ExpectedRequest {
    pub const fn id(&self) -> &ODataId {
        match self {
            Self::Get { id } => id,
        }
    }
}

/// Expectation for the tests.
#[derive(Debug)]
pub struct Expect<E> {
    pub request: ExpectedRequest,
    pub response: Response<E>,
}

impl<E> Expect<E> {
    /// Respond to GET of `uri` with `response` (JSON text or value).
    pub fn get(uri: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                id: uri.to_string().into(),
            },
            response: Ok(from_str(&response.to_string()).expect("invalid json")),
        }
    }

    /// Fail GET of `uri` with `err`.
    pub fn get_error(uri: impl Display, err: E) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                id: uri.to_string().into(),
            },
            response: Err(err),
        }
    }
}
