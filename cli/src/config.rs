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


//! Configuration.
//!
//! Settings are read from an optional TOML file and overridden by
//! command line arguments and their environment variables. Every key of
//! the file is optional:
//!
//! ```toml
//! [bmc]
//! username = "root"
//! password = "..."
//! verify_tls = true
//! timeout_secs = 30
//! connect_timeout_secs = 5
//! max_retries = 2
//!
//! [aggregation]
//! max_concurrent_fetches = 8
//! max_concurrent_endpoints = 4
//!
//! [catalog]
//! path = "catalog.json"
//! ```

use clap::Args;
use rackscan::aggregator::DEFAULT_MAX_CONCURRENT_ENDPOINTS;
use rackscan::bmc_http::reqwest::ClientParams;
use rackscan::bmc_http::RetryPolicy;
use rackscan::AggregatorSettings;
use rackscan::Endpoint;
use rackscan::DEFAULT_MAX_CONCURRENT_FETCHES;
use rackscan_core::BmcCredentials;
use serde::Deserialize;
use std::fs;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use toml::de::Error as TomlError;

/// Configuration file read when none is given explicitly. It may be
/// absent.
pub const DEFAULT_CONFIG_FILE: &str = "rackscan.toml";
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read configuration {0}: {1}")]
    Io(PathBuf, #[source] IoError),
    #[error("invalid configuration {0}: {1}")]
    Toml(PathBuf, #[source] TomlError),
    #[error("BMC {0} is not configured (set it in [bmc] or via {1})")]
    MissingCredential(&'static str, &'static str),
}

/// Command line overrides of the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Configuration file.
    #[arg(long, env = "RACKSCAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,
    /// BMC user name.
    #[arg(long, env = "RACKSCAN_BMC_USERNAME", global = true)]
    pub username: Option<String>,
    /// BMC password.
    #[arg(long, env = "RACKSCAN_BMC_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,
    /// Do not verify TLS certificates of BMCs.
    #[arg(long, global = true)]
    pub insecure: bool,
    /// Catalog file.
    #[arg(long, env = "RACKSCAN_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub bmc: BmcSection,
    pub aggregation: AggregationSection,
    pub catalog: CatalogSection,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BmcSection {
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_tls: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AggregationSection {
    pub max_concurrent_fetches: Option<usize>,
    pub max_concurrent_endpoints: Option<usize>,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSection {
    pub path: Option<PathBuf>,
}

impl ConfigFile {
    /// Read configuration file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if failed to read file
    /// - `ConfigError::Toml` if content is not a valid configuration
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.into(), e))?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml(path.into(), e))
    }

    /// Read the explicitly given file, or the default file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => match Self::read(Path::new(DEFAULT_CONFIG_FILE)) {
                Err(ConfigError::Io(_, e)) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
                other => other,
            },
        }
    }
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_tls: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_retries: Option<u32>,
    pub max_concurrent_fetches: usize,
    pub max_concurrent_endpoints: usize,
    pub catalog_path: PathBuf,
}

impl Config {
    /// Load configuration file and apply `overrides`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = ConfigFile::locate(overrides.config.as_deref())?;
        Ok(Self::new(file, overrides))
    }

    pub fn new(file: ConfigFile, overrides: &Overrides) -> Self {
        let ConfigFile {
            bmc,
            aggregation,
            catalog,
        } = file;
        Self {
            username: overrides.username.clone().or(bmc.username),
            password: overrides.password.clone().or(bmc.password),
            verify_tls: !overrides.insecure && bmc.verify_tls.unwrap_or(true),
            timeout: Duration::from_secs(bmc.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: Duration::from_secs(
                bmc.connect_timeout_secs
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            max_retries: bmc.max_retries,
            max_concurrent_fetches: aggregation
                .max_concurrent_fetches
                .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES),
            max_concurrent_endpoints: aggregation
                .max_concurrent_endpoints
                .unwrap_or(DEFAULT_MAX_CONCURRENT_ENDPOINTS),
            catalog_path: overrides
                .catalog
                .clone()
                .or(catalog.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE)),
        }
    }

    /// BMC credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if user name or password
    /// is not configured.
    pub fn credentials(&self) -> Result<BmcCredentials, ConfigError> {
        let username = self
            .username
            .clone()
            .ok_or(ConfigError::MissingCredential("username", "RACKSCAN_BMC_USERNAME"))?;
        let password = self
            .password
            .clone()
            .ok_or(ConfigError::MissingCredential("password", "RACKSCAN_BMC_PASSWORD"))?;
        Ok(BmcCredentials::new(username, password))
    }

    /// Endpoint of BMC at `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are not configured.
    pub fn endpoint(&self, host: impl Into<String>) -> Result<Endpoint, ConfigError> {
        Ok(Endpoint::new(host, self.credentials()?).with_verify_tls(self.verify_tls))
    }

    pub fn settings(&self) -> AggregatorSettings {
        AggregatorSettings {
            client: ClientParams::default()
                .timeout(self.timeout)
                .connect_timeout(self.connect_timeout),
            retry: self
                .max_retries
                .map_or_else(RetryPolicy::default, RetryPolicy::with_max_retries),
            max_concurrent_fetches: self.max_concurrent_fetches,
        }
    }
}
