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


//! Resource paths of the iDRAC resource tree, relative to the service
//! root.

pub const SYSTEM: &str = "/Systems/System.Embedded.1";
pub const PROCESSORS: &str = "/Systems/System.Embedded.1/Processors";
pub const MEMORY: &str = "/Systems/System.Embedded.1/Memory";
pub const ETHERNET_INTERFACES: &str = "/Systems/System.Embedded.1/EthernetInterfaces";
pub const STORAGE: &str = "/Systems/System.Embedded.1/Storage";
pub const THERMAL: &str = "/Chassis/System.Embedded.1/Thermal";
pub const POWER: &str = "/Chassis/System.Embedded.1/Power";
pub const FIRMWARE_INVENTORY: &str = "/UpdateService/FirmwareInventory";
pub const WARRANTY: &str = "/Managers/iDRAC.Embedded.1/Oem/Dell/DellWarranty";
