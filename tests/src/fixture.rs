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


//! Resource trees served by test controllers.
//!
//! [`ResourceTree::dell_server`] is an iDRAC-like tree where every
//! resource the inventory reads is present. Tests remove or replace
//! resources to model failures, then serve the tree from the mock BMC
//! or from a `wiremock` server.

use crate::Bmc;
use crate::Expect;
use crate::ODATA_ID;
use serde_json::json;
use serde_json::Value;
use std::collections::BTreeMap;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

pub const SYSTEM: &str = "/redfish/v1/Systems/System.Embedded.1";
pub const PROCESSORS: &str = "/redfish/v1/Systems/System.Embedded.1/Processors";
pub const MEMORY: &str = "/redfish/v1/Systems/System.Embedded.1/Memory";
pub const ETHERNET_INTERFACES: &str = "/redfish/v1/Systems/System.Embedded.1/EthernetInterfaces";
pub const STORAGE: &str = "/redfish/v1/Systems/System.Embedded.1/Storage";
pub const THERMAL: &str = "/redfish/v1/Chassis/System.Embedded.1/Thermal";
pub const POWER: &str = "/redfish/v1/Chassis/System.Embedded.1/Power";
pub const FIRMWARE_INVENTORY: &str = "/redfish/v1/UpdateService/FirmwareInventory";
pub const WARRANTY: &str = "/redfish/v1/Managers/iDRAC.Embedded.1/Oem/Dell/DellWarranty";

pub const PROCESSOR_IDS: [&str; 2] = ["CPU.Socket.1", "CPU.Socket.2"];
pub const MEMORY_IDS: [&str; 4] = [
    "DIMM.Socket.A1",
    "DIMM.Socket.A2",
    "DIMM.Socket.B1",
    "DIMM.Socket.B2",
];
pub const NIC_IDS: [&str; 2] = ["NIC.Integrated.1-1-1", "NIC.Integrated.1-2-1"];
pub const CONTROLLER_ID: &str = "RAID.Integrated.1-1";
pub const DRIVE_IDS: [&str; 2] = ["Disk.Bay.0", "Disk.Bay.1"];

/// Resources keyed by path.
#[derive(Debug, Clone, Default)]
pub struct ResourceTree {
    resources: BTreeMap<String, Value>,
}

/// Path of the storage resource of controller `id`.
#[must_use]
pub fn controller_path(id: &str) -> String {
    format!("{STORAGE}/{id}")
}

/// Path of drive `id` of controller `controller`.
#[must_use]
pub fn drive_path(controller: &str, id: &str) -> String {
    format!("{STORAGE}/{controller}/Drives/{id}")
}

impl ResourceTree {
    /// Fully populated Dell server.
    #[must_use]
    pub fn dell_server() -> Self {
        let mut tree = Self::default();
        tree.insert(SYSTEM, system("srv01", "PowerEdge R640"));
        tree.collection_with_members(PROCESSORS, &PROCESSOR_IDS, |id| {
            json!({ "Id": id, "Model": "Intel(R) Xeon(R) Gold 6130", "TotalCores": 16 })
        });
        tree.collection_with_members(MEMORY, &MEMORY_IDS, |id| {
            json!({ "Id": id, "CapacityMiB": 32768, "MemoryDeviceType": "DDR4" })
        });
        tree.collection_with_members(ETHERNET_INTERFACES, &NIC_IDS, |id| {
            json!({ "Id": id, "SpeedMbps": 10000, "Status": { "Health": "OK" } })
        });

        tree.collection(STORAGE, &[controller_path(CONTROLLER_ID)]);
        tree.insert(
            controller_path(CONTROLLER_ID),
            json!({
                "Id": CONTROLLER_ID,
                "StorageControllers": [{
                    "Name": "PERC H730P Mini",
                    "FirmwareVersion": "25.5.9.0001",
                    "Status": { "Health": "OK" }
                }],
                "Drives": DRIVE_IDS
                    .iter()
                    .map(|d| json!({ ODATA_ID: drive_path(CONTROLLER_ID, d) }))
                    .collect::<Vec<_>>(),
                "Oem": { "Dell": { "DellController": {
                    "CacheSizeInMB": 2048,
                    "SecurityStatus": "EncryptionNotCapable"
                } } }
            }),
        );
        for (n, id) in DRIVE_IDS.iter().enumerate() {
            tree.insert(
                drive_path(CONTROLLER_ID, id),
                json!({
                    "Id": id,
                    "MediaType": "HDD",
                    "CapacityBytes": 1_200_000_000_000_u64,
                    "Oem": { "Dell": { "DellPhysicalDisk": {
                        "RaidStatus": "Online",
                        "Slot": n
                    } } }
                }),
            );
        }

        tree.insert(
            THERMAL,
            json!({
                "Fans": [
                    { "Name": "System Board Fan1A", "Reading": 5880 },
                    { "Name": "System Board Fan1B", "Reading": 5520 },
                    { "Name": "System Board Fan2A", "Reading": 5880 }
                ],
                "Temperatures": [
                    { "Name": "CPU1 Temp", "ReadingCelsius": 41 },
                    { "Name": "System Board Inlet Temp", "ReadingCelsius": 22 }
                ]
            }),
        );
        tree.insert(
            POWER,
            json!({
                "PowerSupplies": [
                    {
                        "Name": "PS1 Status",
                        "PowerCapacityWatts": 750,
                        "Oem": { "Dell": { "DellPowerSupply": { "IsSwitchingSupply": true } } }
                    },
                    {
                        "Name": "PS2 Status",
                        "PowerCapacityWatts": 750,
                        "Oem": { "Dell": { "DellPowerSupply": { "IsSwitchingSupply": false } } }
                    }
                ]
            }),
        );
        tree.collection(
            FIRMWARE_INVENTORY,
            &[
                format!("{FIRMWARE_INVENTORY}/Installed-159-2.19.1"),
                format!("{FIRMWARE_INVENTORY}/Installed-25227-6.10.30.00"),
            ],
        );
        tree.insert(
            WARRANTY,
            json!({
                "WarrantyStartDate": "2021-03-01T00:00:00-06:00",
                "WarrantyEndDate": "2026-03-01T23:59:59-06:00",
                "WarrantyStatus": "Active"
            }),
        );
        tree
    }

    /// Server with the given system resource where every collection and
    /// every other resource is empty.
    #[must_use]
    pub fn bare_server(system: Value) -> Self {
        let mut tree = Self::default();
        tree.insert(SYSTEM, system);
        for collection in [PROCESSORS, MEMORY, ETHERNET_INTERFACES, STORAGE] {
            tree.collection(collection, &[]);
        }
        for resource in [THERMAL, POWER, WARRANTY] {
            tree.insert(resource, json!({}));
        }
        tree
    }

    pub fn insert(&mut self, path: impl Into<String>, value: Value) {
        self.resources.insert(path.into(), value);
    }

    pub fn remove(&mut self, path: &str) -> Option<Value> {
        self.resources.remove(path)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.resources.get(path)
    }

    /// Insert collection at `path` referencing `members`.
    pub fn collection(&mut self, path: &str, members: &[String]) {
        let refs = members
            .iter()
            .map(|m| json!({ ODATA_ID: m }))
            .collect::<Vec<_>>();
        self.insert(
            path,
            json!({
                ODATA_ID: path,
                "Members": refs,
                "Members@odata.count": members.len()
            }),
        );
    }

    fn collection_with_members(&mut self, path: &str, ids: &[&str], member: impl Fn(&str) -> Value) {
        let members = ids.iter().map(|id| format!("{path}/{id}")).collect::<Vec<_>>();
        self.collection(path, &members);
        for (id, member_path) in ids.iter().zip(members) {
            self.insert(member_path, member(id));
        }
    }

    /// Mock BMC serving the tree. Paths outside the tree fail.
    #[must_use]
    pub fn mock(&self) -> Bmc {
        let bmc = Bmc::default();
        for (path, value) in &self.resources {
            bmc.expect(Expect::get(path, value));
        }
        bmc
    }

    /// Serve the tree from `server`. Paths outside the tree get 404.
    pub async fn mount(&self, server: &MockServer) {
        for (resource, value) in &self.resources {
            Mock::given(method("GET"))
                .and(path(resource.as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(value))
                .mount(server)
                .await;
        }
    }
}

/// Computer system resource.
#[must_use]
pub fn system(hostname: &str, model: &str) -> Value {
    json!({
        ODATA_ID: SYSTEM,
        "Id": "System.Embedded.1",
        "HostName": hostname,
        "Model": model,
        "SKU": "ABC1234",
        "SerialNumber": "CN747517150043",
        "Manufacturer": "Dell Inc.",
        "PowerState": "On",
        "BiosVersion": "2.19.1",
        "Status": { "Health": "OK", "State": "Enabled" },
        "Oem": { "Dell": { "DellSystem": {
            "CurrentRollupStatus": "OK",
            "MaxDIMMSlots": 24,
            "Manufacturer": "Dell Inc."
        } } }
    })
}
