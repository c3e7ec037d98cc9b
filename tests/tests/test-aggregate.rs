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


//! Aggregation against the mock BMC.

use rackscan::warranty::NOT_FOUND;
use rackscan::warranty::NOT_SUPPORTED;
use rackscan::Aggregator;
use rackscan::AggregatorSettings;
use rackscan::Error;
use rackscan::InventoryReport;
use rackscan::StaticResolver;
use rackscan::Warranty;
use rackscan_tests::fixture::controller_path;
use rackscan_tests::fixture::drive_path;
use rackscan_tests::fixture::system;
use rackscan_tests::fixture::CONTROLLER_ID;
use rackscan_tests::fixture::DRIVE_IDS;
use rackscan_tests::fixture::MEMORY;
use rackscan_tests::fixture::MEMORY_IDS;
use rackscan_tests::fixture::NIC_IDS;
use rackscan_tests::fixture::PROCESSOR_IDS;
use rackscan_tests::fixture::WARRANTY;
use rackscan_tests::Bmc;
use rackscan_tests::Expect;
use rackscan_tests::ResourceTree;
use rackscan_tests::TestError;
use serde_json::json;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::test;

async fn aggregate(bmc: Bmc) -> InventoryReport {
    let aggregator = Aggregator::new(Arc::new(bmc), "10.0.0.5", &AggregatorSettings::default());
    let inventory = aggregator.aggregate().await;
    inventory.report().expect("report").clone()
}

fn ids(docs: &[serde_json::Map<String, serde_json::Value>]) -> Vec<&str> {
    docs.iter().filter_map(|d| d["Id"].as_str()).collect()
}

#[test]
async fn full_inventory() {
    let report = aggregate(ResourceTree::dell_server().mock()).await;

    let system = report.system.as_ref().expect("system");
    assert_eq!(system.hostname.as_deref(), Some("srv01"));
    assert_eq!(system.service_tag.as_deref(), Some("ABC1234"));
    assert_eq!(system.bios_version.as_deref(), Some("2.19.1"));
    assert_eq!(system.vendor["MaxDIMMSlots"], 24);

    assert_eq!(ids(&report.hardware.processors), PROCESSOR_IDS);
    assert_eq!(ids(&report.hardware.memory_modules), MEMORY_IDS);
    assert_eq!(ids(&report.hardware.nics), NIC_IDS);

    assert_eq!(report.storage.controllers.len(), 1);
    let controller = &report.storage.controllers[0];
    assert_eq!(controller["Name"], "PERC H730P Mini");
    assert_eq!(controller["CacheSizeInMB"], 2048);
    assert_eq!(ids(&report.storage.drives), DRIVE_IDS);
    assert!(report
        .storage
        .drives
        .iter()
        .all(|d| d["RaidStatus"] == "Online"));

    assert_eq!(report.thermals_and_power.fans.len(), 3);
    assert_eq!(report.thermals_and_power.temperature_sensors.len(), 2);
    let supplies = &report.thermals_and_power.power_supplies;
    assert_eq!(supplies.len(), 2);
    assert_eq!(supplies[0]["IsSwitchingSupply"], true);
    assert_eq!(supplies[1]["IsSwitchingSupply"], false);

    let firmware = report.firmware.as_ref().expect("firmware");
    assert_eq!(firmware["Members@odata.count"], 2);

    let warranty = report.warranty.info().expect("warranty");
    assert_eq!(warranty.status, Some(json!("Active")));
    assert_eq!(warranty.end_date, Some(json!("2026-03-01T23:59:59-06:00")));
}

#[test]
async fn bare_server() {
    let tree = ResourceTree::bare_server(json!({
        "HostName": "srv01",
        "Model": "PowerEdge R640",
        "Status": { "Health": "OK" }
    }));
    let report = aggregate(tree.mock()).await;

    let system = report.system.as_ref().expect("system");
    assert_eq!(system.hostname.as_deref(), Some("srv01"));
    assert_eq!(system.model.as_deref(), Some("PowerEdge R640"));
    assert_eq!(system.health.as_deref(), Some("OK"));
    assert_eq!(system.service_tag, None);
    assert!(report.hardware.processors.is_empty());
    assert!(report.hardware.memory_modules.is_empty());
    assert!(report.hardware.nics.is_empty());
    assert!(report.storage.controllers.is_empty());
    assert!(report.storage.drives.is_empty());
    assert!(report.thermals_and_power.fans.is_empty());
    assert!(report.thermals_and_power.power_supplies.is_empty());
    assert_eq!(report.warranty, Warranty::not_available(NOT_FOUND));

    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["system"]["hostname"], "srv01");
    assert_eq!(json["system"]["service_tag"], serde_json::Value::Null);
    assert_eq!(json["hardware"]["processors"], json!([]));
    assert_eq!(json["storage"]["controllers"], json!([]));
}

#[test]
async fn warranty_unavailable() {
    let mut tree = ResourceTree::dell_server();
    tree.remove(WARRANTY);
    let bmc = tree.mock();
    bmc.expect(Expect::get_error(WARRANTY, TestError::Timeout));
    let report = aggregate(bmc).await;

    assert_eq!(report.warranty, Warranty::not_available(NOT_FOUND));
    assert_eq!(
        serde_json::to_value(&report.warranty).expect("json"),
        json!({ "message": NOT_FOUND })
    );

    let full = aggregate(ResourceTree::dell_server().mock()).await;
    assert_eq!(report.system, full.system);
    assert_eq!(report.hardware, full.hardware);
    assert_eq!(report.storage, full.storage);
    assert_eq!(report.thermals_and_power, full.thermals_and_power);
    assert_eq!(report.firmware, full.firmware);
}

#[test]
async fn warranty_not_a_document() {
    let mut tree = ResourceTree::dell_server();
    tree.insert(WARRANTY, json!(["WarrantyStartDate", "WarrantyEndDate"]));
    let report = aggregate(tree.mock()).await;

    assert_eq!(report.warranty, Warranty::not_available(NOT_SUPPORTED));
    assert!(report.system.is_some());
}

#[test]
async fn failed_drive_is_skipped() {
    let mut tree = ResourceTree::dell_server();
    let failed = drive_path(CONTROLLER_ID, DRIVE_IDS[1]);
    tree.remove(&failed);
    let bmc = tree.mock();
    bmc.expect(Expect::get_error(&failed, TestError::ConnectionReset));
    let report = aggregate(bmc).await;

    assert_eq!(report.storage.drives.len(), 1);
    let drive = &report.storage.drives[0];
    assert_eq!(drive["Id"], DRIVE_IDS[0]);
    assert_eq!(drive["RaidStatus"], "Online");
    assert_eq!(report.storage.controllers.len(), 1);
}

#[test]
async fn failed_controller_hides_its_drives() {
    let mut tree = ResourceTree::dell_server();
    tree.remove(&controller_path(CONTROLLER_ID));
    let bmc = tree.mock();
    let report = aggregate(bmc).await;

    assert!(report.storage.controllers.is_empty());
    assert!(report.storage.drives.is_empty());
    assert_eq!(report.hardware.processors.len(), PROCESSOR_IDS.len());
}

#[test]
async fn failed_member_keeps_order() {
    let mut tree = ResourceTree::dell_server();
    let failed = format!("{MEMORY}/{}", MEMORY_IDS[1]);
    tree.remove(&failed);
    let bmc = tree.mock();
    bmc.expect(Expect::get_error(&failed, TestError::ConnectionReset));
    let report = aggregate(bmc).await;

    assert_eq!(
        ids(&report.hardware.memory_modules),
        [MEMORY_IDS[0], MEMORY_IDS[2], MEMORY_IDS[3]]
    );
}

#[test]
async fn every_resource_is_fetched_once() {
    let tree = ResourceTree::dell_server();
    let bmc = Arc::new(tree.mock());
    let aggregator = Aggregator::new(bmc.clone(), "10.0.0.5", &AggregatorSettings::default());
    assert!(aggregator.aggregate().await.is_report());

    let requests = bmc.requests();
    // Firmware inventory members are not walked.
    assert_eq!(requests.len(), 20);
    for request in &requests {
        assert_eq!(bmc.get_count(request.id().clone()), 1, "{}", request.id());
    }
}

#[test]
async fn unresolvable_host_is_not_contacted() {
    let mut built = false;
    let resolver = StaticResolver::default()
        .with_host("srv01-idrac", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)));
    let result = Aggregator::<Bmc>::connect_with(
        "unreachable-host",
        &resolver,
        &AggregatorSettings::default(),
        |_| {
            built = true;
            Ok(Bmc::default())
        },
    )
    .await;

    match result {
        Err(Error::Resolution(err)) => assert_eq!(err.host(), "unreachable-host"),
        Err(err) => panic!("unexpected error: {err}"),
        Ok(_) => panic!("resolution must fail"),
    }
    assert!(!built);
}

#[test]
async fn resolved_host_is_report_address() {
    let resolver = StaticResolver::default()
        .with_host("srv01-idrac", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)));
    let tree = ResourceTree::bare_server(system("srv01", "PowerEdge R640"));
    let aggregator = Aggregator::connect_with(
        "srv01-idrac",
        &resolver,
        &AggregatorSettings::default(),
        |_| Ok(tree.mock()),
    )
    .await
    .expect("connected");
    assert_eq!(aggregator.address(), "10.0.0.5");
    let inventory = aggregator.aggregate().await;
    assert_eq!(
        inventory.report().map(|r| r.endpoint_address.as_str()),
        Some("10.0.0.5")
    );
}
