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


//! Dell iDRAC extension shapes.

use super::OemExtension;

const DELL: &str = "Dell";

/// `Oem.Dell.DellSystem` of a computer system.
#[doc(hidden)]
pub enum DellSystem {}

impl OemExtension for DellSystem {
    const VENDOR: &'static str = DELL;
    const SHAPE: &'static str = "DellSystem";
}

/// `Oem.Dell.DellPowerSupply` of a `PowerSupplies` entry.
#[doc(hidden)]
pub enum DellPowerSupply {}

impl OemExtension for DellPowerSupply {
    const VENDOR: &'static str = DELL;
    const SHAPE: &'static str = "DellPowerSupply";
}

/// `Oem.Dell.DellController` of a storage resource.
#[doc(hidden)]
pub enum DellController {}

impl OemExtension for DellController {
    const VENDOR: &'static str = DELL;
    const SHAPE: &'static str = "DellController";
}

/// `Oem.Dell.DellPhysicalDisk` of a drive.
#[doc(hidden)]
pub enum DellPhysicalDisk {}

impl OemExtension for DellPhysicalDisk {
    const VENDOR: &'static str = DELL;
    const SHAPE: &'static str = "DellPhysicalDisk";
}
