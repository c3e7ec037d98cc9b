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


//! This is tests support lib.

/// Errors used in tests.
pub mod error;
/// Resource trees of test servers.
pub mod fixture;

#[doc(inline)]
pub use error::TestError;
#[doc(inline)]
pub use fixture::ResourceTree;

/// Used in tests for `@odata.id` fields.
pub const ODATA_ID: &str = "@odata.id";

use rackscan_bmc_mock::Bmc as MockBmc;
use rackscan_bmc_mock::Expect as MockExpect;

pub type Bmc = MockBmc<TestError>;
pub type Expect = MockExpect<TestError>;
