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


//! Plain server list: one management address per line.

use crate::CatalogError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

/// Default file name of the server list.
pub const DEFAULT_SERVERS_FILE: &str = "servers.txt";

/// Servers listed in a server list file, in file order. Surrounding
/// whitespace is trimmed and blank lines are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerList {
    servers: Vec<String>,
}

/// State of a server list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerListStatus {
    Missing { path: PathBuf },
    Empty { path: PathBuf },
    Loaded { path: PathBuf, servers: ServerList },
}

impl ServerList {
    pub fn parse(text: &str) -> Self {
        Self {
            servers: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    /// Load the list at `path`. A missing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Ok(read(path.as_ref())?.map(|text| Self::parse(&text)).unwrap_or_default())
    }

    /// Report whether the list at `path` exists and has servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn status(path: impl AsRef<Path>) -> Result<ServerListStatus, CatalogError> {
        let path = path.as_ref();
        let status = match read(path)? {
            None => ServerListStatus::Missing { path: path.into() },
            Some(text) => {
                let servers = Self::parse(&text);
                if servers.is_empty() {
                    ServerListStatus::Empty { path: path.into() }
                } else {
                    ServerListStatus::Loaded {
                        path: path.into(),
                        servers,
                    }
                }
            }
        };
        Ok(status)
    }

    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    pub fn contains(&self, server: &str) -> bool {
        self.servers.iter().any(|s| s == server)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl IntoIterator for ServerList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.servers.into_iter()
    }
}

fn read(path: &Path) -> Result<Option<String>, CatalogError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(CatalogError::io(path)(err)),
    }
}
