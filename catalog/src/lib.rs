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


//! Placement catalog of servers and the plain server list.
//!
//! The catalog keeps one [`CatalogRecord`] per hostname with the rack,
//! cabinet and position of the server and the management address the
//! hostname resolved to when the record was added.

pub mod catalog;
pub mod record;
pub mod servers;

mod error;

#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use catalog::FileCatalog;
#[doc(inline)]
pub use catalog::MemoryCatalog;
pub use error::CatalogError;
#[doc(inline)]
pub use record::CatalogRecord;
#[doc(inline)]
pub use record::NewRecord;
#[doc(inline)]
pub use servers::ServerList;
pub use servers::ServerListStatus;
