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


use crate::resolve::ResolveError;
use tokio::task::JoinError;

/// Errors of aggregator construction and orchestration.
///
/// Resource fetch failures are not errors: they are reported as
/// unavailable sections of the inventory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Endpoint is unreachable by name.
    #[error("endpoint unreachable by name: {0}")]
    Resolution(#[from] ResolveError),
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[cfg(feature = "bmc-http")]
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Extraction task failed to complete.
    #[error("orchestration fault: {0}")]
    Orchestration(#[from] JoinError),
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}
