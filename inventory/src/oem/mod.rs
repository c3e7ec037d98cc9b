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


//! OEM-specific support.
//!
//! Vendors extend standard resources with fields nested under
//! `Oem.<Vendor>.<Shape>`. Every shape that inventory flattens is a type
//! implementing [`OemExtension`]; merging is done per shape with
//! [`merge`] (extension stored in the document itself) or
//! [`merge_from`] (extension stored in a parent document).
//!
//! Merging overlays the top-level fields of the extension onto the base
//! document; extension values win on key collision. Merging is a pure
//! function and idempotent.

/// Support of Dell.
pub mod dell;

use crate::document::lookup;
use rackscan_core::Document;
use serde_json::Value as JsonValue;

/// Key under which standard resources carry vendor extensions.
pub const OEM: &str = "Oem";

/// One vendor-extension shape.
pub trait OemExtension {
    /// Vendor key under `Oem`, e.g. `Dell`.
    const VENDOR: &'static str;
    /// Shape key under the vendor, e.g. `DellSystem`.
    const SHAPE: &'static str;

    /// Locate the extension inside `doc`.
    fn locate(doc: &Document) -> Option<&Document> {
        lookup(doc, &[OEM, Self::VENDOR, Self::SHAPE]).and_then(JsonValue::as_object)
    }
}

/// Overlay the `E` extension found in `base` onto `base`.
#[must_use]
pub fn merge<E: OemExtension>(base: Document) -> Document {
    match E::locate(&base).cloned() {
        Some(extension) => overlay(base, extension),
        None => base,
    }
}

/// Overlay the `E` extension found in `source` onto `base`.
#[must_use]
pub fn merge_from<E: OemExtension>(base: Document, source: &Document) -> Document {
    match E::locate(source) {
        Some(extension) => overlay(base, extension.clone()),
        None => base,
    }
}

fn overlay(mut base: Document, extension: Document) -> Document {
    base.extend(extension);
    base
}
