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


//! Defensive lookups on decoded documents. A missing key, or a value of
//! the wrong kind, is absence and never an error.

use rackscan_core::Document;
use serde_json::Value as JsonValue;

/// Follow `path` through nested objects.
pub fn lookup<'a>(doc: &'a Document, path: &[&str]) -> Option<&'a JsonValue> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(doc.get(*first)?, |value, key| value.get(*key))
}

/// String at `path`.
pub fn string_at(doc: &Document, path: &[&str]) -> Option<String> {
    lookup(doc, path)
        .and_then(JsonValue::as_str)
        .map(ToOwned::to_owned)
}

/// Entries of the array stored under `key`, as reported.
pub fn array(doc: &Document, key: &str) -> Vec<JsonValue> {
    doc.get(key)
        .and_then(JsonValue::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Objects of the array stored under `key`. Non-object entries are
/// skipped.
pub fn objects(doc: &Document, key: &str) -> Vec<Document> {
    doc.get(key)
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(JsonValue::as_object)
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) fn object(v: JsonValue) -> Document {
    match v {
        JsonValue::Object(map) => map,
        other => panic!("object expected, got {other}"),
    }
}
