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


//! Expectation-driven [`rackscan_core::Bmc`] for tests.
//!
//! Expectations are keyed by resource path rather than queued, so the
//! mock serves concurrent fetches in any order. Every request is logged
//! and can be inspected with [`Bmc::requests`].

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;

use rackscan_core::Bmc as RackscanBmc;
use rackscan_core::ODataId;
use serde::de::DeserializeOwned;
use serde_json::from_value;
use serde_json::Error as JsonError;
use std::collections::HashMap;
use std::error::Error as StdError;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("response: {0}")]
    ErrorResponse(Arc<dyn StdError + Send + Sync>),
    #[error("lock error: {0}")]
    MutexLock(String),
    #[error("bad json response: {0}")]
    BadResponseJson(JsonError),
    #[error("unexpected get: {0}")]
    UnexpectedGet(ODataId),
}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }
}

enum Stored {
    Json(serde_json::Value),
    Failure(Arc<dyn StdError + Send + Sync>),
}

pub struct Bmc<E> {
    expect: Mutex<HashMap<ODataId, Stored>>,
    requests: Mutex<Vec<ExpectedRequest>>,
    _error: std::marker::PhantomData<fn() -> E>,
}

impl<E> Default for Bmc<E> {
    fn default() -> Self {
        Self {
            expect: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            _error: std::marker::PhantomData,
        }
    }
}

impl<E> Bmc<E>
where
    E: StdError + Send + Sync + 'static,
{
    /// Register expectation. A later expectation for the same resource
    /// replaces the earlier one.
    pub fn expect(&self, exp: Expect<E>) {
        let stored = match exp.response {
            Ok(v) => Stored::Json(v),
            Err(err) => Stored::Failure(Arc::new(err)),
        };
        self.expect
            .lock()
            .expect("not poisoned")
            .insert(exp.request.id().clone(), stored);
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<ExpectedRequest> {
        self.requests.lock().expect("not poisoned").clone()
    }

    /// Number of GET requests received for `id`.
    pub fn get_count(&self, id: impl Into<ODataId>) -> usize {
        let id = id.into();
        self.requests
            .lock()
            .expect("not poisoned")
            .iter()
            .filter(|r| *r.id() == id)
            .count()
    }

    pub fn debug_expect(&self) {
        let expect = self.expect.lock().expect("not poisoned");
        println!("Expectations (total: {})", expect.len());
        for id in expect.keys() {
            println!("{id}");
        }
    }
}

impl<E> RackscanBmc for Bmc<E>
where
    E: StdError + Send + Sync + 'static,
{
    type Error = Error;

    async fn get<T: DeserializeOwned + Send + 'static>(
        &self,
        in_id: &ODataId,
    ) -> Result<T, Self::Error> {
        self.requests
            .lock()
            .map_err(Error::mutex_lock)?
            .push(ExpectedRequest::Get { id: in_id.clone() });
        let response = {
            let expect = self.expect.lock().map_err(Error::mutex_lock)?;
            match expect.get(in_id) {
                Some(Stored::Json(v)) => Ok(v.clone()),
                Some(Stored::Failure(err)) => Err(Error::ErrorResponse(err.clone())),
                None => Err(Error::UnexpectedGet(in_id.clone())),
            }
        }?;
        from_value(response).map_err(Error::BadResponseJson)
    }
}
