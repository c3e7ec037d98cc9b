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


//! Fans, temperature sensors and power supplies of the chassis.

use crate::document::array;
use crate::document::objects;
use crate::oem::dell::DellPowerSupply;
use crate::oem::merge;
use crate::paths;
use crate::Fetcher;
use futures_util::join;
use rackscan_core::Bmc;
use rackscan_core::Document;
use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThermalsAndPower {
    /// `Fans` entries as reported.
    pub fans: Vec<JsonValue>,
    /// `Temperatures` entries as reported.
    pub temperature_sensors: Vec<JsonValue>,
    pub power_supplies: Vec<Document>,
}

/// Fetch the legacy `Thermal` and `Power` resources of the chassis. An
/// unavailable resource leaves only its own lists empty.
pub async fn extract<B: Bmc>(fetcher: &Fetcher<B>) -> ThermalsAndPower {
    let (thermal, power) = join!(fetcher.fetch(paths::THERMAL), fetcher.fetch(paths::POWER));

    let (fans, temperature_sensors) = thermal
        .map(|thermal| (array(&thermal, "Fans"), array(&thermal, "Temperatures")))
        .unwrap_or_default();
    let power_supplies = power
        .map(|power| power_supplies(&power))
        .unwrap_or_default();

    ThermalsAndPower {
        fans,
        temperature_sensors,
        power_supplies,
    }
}

fn power_supplies(power: &Document) -> Vec<Document> {
    objects(power, "PowerSupplies")
        .into_iter()
        .map(merge::<DellPowerSupply>)
        .collect()
}
