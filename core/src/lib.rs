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


//! Core types shared by the rackscan crates.
//!
//! - [`ODataId`]: canonical resource path of a Redfish resource.
//! - [`Reference`]: `{ "@odata.id": ... }` link found in collections and
//!   navigation properties.
//! - [`Bmc`]: transport-agnostic read access to a management controller.
//! - [`Document`]: decoded JSON object returned by the controller.

/// BMC access trait and credentials.
pub mod bmc;
/// Navigation properties and collection member references.
pub mod nav_property;
/// `@odata.id` identifier.
pub mod odata;

#[doc(inline)]
pub use bmc::Bmc;
#[doc(inline)]
pub use bmc::BmcCredentials;
#[doc(inline)]
pub use nav_property::Reference;
#[doc(inline)]
pub use odata::ODataId;

/// Decoded JSON object. No schema is assumed beyond what each reader
/// looks up.
pub type Document = serde_json::Map<String, serde_json::Value>;
