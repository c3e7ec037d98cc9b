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


//! End-to-end aggregation over HTTP.

use rackscan::bmc_http::RetryPolicy;
use rackscan::Aggregator;
use rackscan::AggregatorSettings;
use rackscan::Endpoint;
use rackscan::InventorySummary;
use rackscan_core::BmcCredentials;
use rackscan_tests::fixture::PROCESSOR_IDS;
use rackscan_tests::fixture::THERMAL;
use rackscan_tests::fixture::WARRANTY;
use rackscan_tests::ResourceTree;
use serde_json::json;
use tokio::test;
use url::Url;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

const BASIC_ROOT_CALVIN: &str = "Basic cm9vdDpjYWx2aW4=";

fn endpoint(server: &MockServer) -> (Url, Endpoint) {
    let url = Url::parse(&server.uri()).expect("url");
    let credentials = BmcCredentials::new("root".to_string(), "calvin".to_string());
    let endpoint = Endpoint::new(url.host_str().unwrap_or_default(), credentials);
    (url, endpoint)
}

#[test]
async fn inventory_over_http() {
    let server = MockServer::start().await;
    let mut tree = ResourceTree::dell_server();
    tree.remove(THERMAL);
    tree.mount(&server).await;
    Mock::given(method("GET"))
        .and(path(THERMAL))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let settings = AggregatorSettings {
        retry: RetryPolicy::none(),
        ..AggregatorSettings::default()
    };
    let (url, endpoint) = endpoint(&server);
    let aggregator = Aggregator::from_url(url, &endpoint, &settings).expect("aggregator");
    let inventory = aggregator.aggregate().await;

    let value = serde_json::to_value(&inventory).expect("json");
    assert_eq!(value["endpoint_address"], "127.0.0.1");
    assert_eq!(value["system"]["hostname"], "srv01");
    assert_eq!(value["system"]["MaxDIMMSlots"], 24);
    assert_eq!(
        value["hardware"]["processors"]
            .as_array()
            .map(Vec::len),
        Some(PROCESSOR_IDS.len())
    );
    assert_eq!(value["thermals_and_power"]["fans"], json!([]));
    assert_eq!(
        value["thermals_and_power"]["power_supplies"][0]["IsSwitchingSupply"],
        true
    );
    assert_eq!(value["warranty"]["status"], "Active");

    let report = inventory.report().expect("report");
    let summary = InventorySummary::from(report);
    assert_eq!(summary.health_status, "ok");
    assert_eq!(summary.warranty_expiry.as_deref(), Some("2026-03-01T23:59:59-06:00"));
}

#[test]
async fn requests_are_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WARRANTY))
        .and(header("authorization", BASIC_ROOT_CALVIN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "WarrantyStatus": "Expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (url, endpoint) = endpoint(&server);
    let aggregator =
        Aggregator::from_url(url, &endpoint, &AggregatorSettings::default()).expect("aggregator");
    let inventory = aggregator.aggregate().await;

    let report = inventory.report().expect("report");
    assert_eq!(
        report.warranty.info().and_then(|w| w.status.as_ref()),
        Some(&json!("Expired"))
    );
    assert_eq!(report.system, None);
}

#[test]
async fn transient_failure_is_retried() {
    let server = MockServer::start().await;
    let tree = ResourceTree::dell_server();
    Mock::given(method("GET"))
        .and(path(WARRANTY))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    tree.mount(&server).await;

    let (url, endpoint) = endpoint(&server);
    let aggregator =
        Aggregator::from_url(url, &endpoint, &AggregatorSettings::default()).expect("aggregator");
    let inventory = aggregator.aggregate().await;

    let report = inventory.report().expect("report");
    assert!(report.warranty.is_available());
}
