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


//! Server inventory aggregation over Redfish.
//!
//! [`Aggregator`] collects the inventory of one management controller:
//! system information, hardware, storage, thermal and power, firmware
//! and warranty. A resource that cannot be fetched leaves its own
//! section empty or marked unavailable and the rest of the inventory is
//! still collected.
//!
//! ```rust,no_run
//! use rackscan::Aggregator;
//! use rackscan::AggregatorSettings;
//! use rackscan::DnsResolver;
//! use rackscan::Endpoint;
//! use rackscan_core::BmcCredentials;
//!
//! # async fn example() -> Result<(), rackscan::Error> {
//! let credentials = BmcCredentials::new("root".to_string(), "password".to_string());
//! let endpoint = Endpoint::new("srv01-idrac.example.com", credentials);
//! let settings = AggregatorSettings::default();
//! let aggregator = Aggregator::connect(&endpoint, &DnsResolver, &settings).await?;
//! let inventory = aggregator.aggregate().await;
//! # Ok(())
//! # }
//! ```

/// Aggregation of one endpoint and batches of endpoints.
pub mod aggregator;
/// Lenient lookups in documents.
pub mod document;
/// Vendor extensions.
pub mod oem;
/// Resource paths of the controller.
pub mod paths;
/// Host name resolution.
pub mod resolve;

pub mod hardware;
pub mod report;
pub mod storage;
pub mod summary;
pub mod system;
pub mod thermal;
pub mod warranty;

mod collection;
mod error;
mod fetcher;

#[doc(inline)]
pub use aggregator::Aggregator;
#[doc(inline)]
pub use aggregator::AggregatorSettings;
#[doc(inline)]
pub use aggregator::Endpoint;
#[doc(inline)]
pub use aggregator::aggregate_many_with;
#[cfg(feature = "bmc-http")]
#[doc(inline)]
pub use aggregator::aggregate_many;
pub use error::Error;
pub use fetcher::Fetcher;
pub use fetcher::DEFAULT_MAX_CONCURRENT_FETCHES;
pub use hardware::HardwareInventory;
pub use report::ErrorDocument;
pub use report::HostInventory;
pub use report::Inventory;
pub use report::InventoryReport;
pub use resolve::DnsResolver;
pub use resolve::ResolveError;
pub use resolve::Resolver;
pub use resolve::StaticResolver;
pub use storage::StorageInventory;
pub use summary::InventorySummary;
pub use system::SystemInfo;
pub use thermal::ThermalsAndPower;
pub use warranty::Warranty;
pub use warranty::WarrantyInfo;

#[cfg(feature = "bmc-http")]
pub use rackscan_bmc_http as bmc_http;
