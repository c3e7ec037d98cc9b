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


//! Catalog storage.

use crate::CatalogError;
use crate::CatalogRecord;
use crate::NewRecord;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::ErrorKind;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;

/// Store of catalog records, unique by hostname.
pub trait Catalog {
    /// Add `record`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateHostname`] if a record with the
    /// same hostname exists, or a storage error.
    fn add(&mut self, record: NewRecord) -> Result<CatalogRecord, CatalogError>;

    /// All records ordered by hostname.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    fn list(&self) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Record of `hostname`.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    fn get(&self, hostname: &str) -> Result<Option<CatalogRecord>, CatalogError>;
}

/// Catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    records: BTreeMap<String, CatalogRecord>,
}

impl MemoryCatalog {
    fn insert(&mut self, record: CatalogRecord) -> Result<CatalogRecord, CatalogError> {
        if record.hostname.trim().is_empty() {
            return Err(CatalogError::EmptyHostname);
        }
        if self.records.contains_key(&record.hostname) {
            return Err(CatalogError::DuplicateHostname(record.hostname));
        }
        self.records.insert(record.hostname.clone(), record.clone());
        Ok(record)
    }
}

impl Catalog for MemoryCatalog {
    fn add(&mut self, record: NewRecord) -> Result<CatalogRecord, CatalogError> {
        self.insert(record.into_record())
    }

    fn list(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self.records.values().cloned().collect())
    }

    fn get(&self, hostname: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        Ok(self.records.get(hostname).cloned())
    }
}

#[derive(Serialize, Deserialize, Default)]
struct CatalogFile {
    records: Vec<CatalogRecord>,
}

/// Catalog stored as a JSON document. The whole document is rewritten
/// on every change: written to a temporary file next to it, synced and
/// renamed over the old one.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    memory: MemoryCatalog,
}

impl FileCatalog {
    /// Open catalog at `path`. A missing file is an empty catalog; it is
    /// created on first add.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let mut memory = MemoryCatalog::default();
        match fs::read(&path) {
            Ok(bytes) => {
                let file: CatalogFile =
                    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
                        path: path.clone(),
                        source,
                    })?;
                for record in file.records {
                    memory.insert(record)?;
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "catalog file not found, starting empty");
            }
            Err(err) => return Err(CatalogError::io(&path)(err)),
        }
        Ok(Self { path, memory })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), CatalogError> {
        let file = CatalogFile {
            records: self.memory.list()?,
        };
        let bytes = serde_json::to_vec_pretty(&file).map_err(CatalogError::Encode)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        write_and_sync(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path).map_err(CatalogError::io(&self.path))
    }
}

impl Catalog for FileCatalog {
    fn add(&mut self, record: NewRecord) -> Result<CatalogRecord, CatalogError> {
        let record = self.memory.insert(record.into_record())?;
        if let Err(err) = self.persist() {
            self.memory.records.remove(&record.hostname);
            return Err(err);
        }
        debug!(hostname = %record.hostname, path = %self.path.display(), "catalog record added");
        Ok(record)
    }

    fn list(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.memory.list()
    }

    fn get(&self, hostname: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        self.memory.get(hostname)
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), CatalogError> {
    let mut f = File::create(path).map_err(CatalogError::io(path))?;
    f.write_all(bytes).map_err(CatalogError::io(path))?;
    f.sync_all().map_err(CatalogError::io(path))
}
