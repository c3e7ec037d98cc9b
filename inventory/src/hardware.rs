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


//! Processors, memory modules and network interfaces.

use crate::paths;
use crate::Fetcher;
use futures_util::join;
use rackscan_core::Bmc;
use rackscan_core::Document;
use serde::Serialize;

/// Hardware inventory. Member documents are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HardwareInventory {
    pub processors: Vec<Document>,
    pub memory_modules: Vec<Document>,
    pub nics: Vec<Document>,
}

/// Walk the three hardware collections of the system. The walks are
/// independent of each other.
pub async fn extract<B: Bmc>(fetcher: &Fetcher<B>) -> HardwareInventory {
    let (processors, memory_modules, nics) = join!(
        fetcher.walk(paths::PROCESSORS),
        fetcher.walk(paths::MEMORY),
        fetcher.walk(paths::ETHERNET_INTERFACES),
    );
    HardwareInventory {
        processors,
        memory_modules,
        nics,
    }
}
