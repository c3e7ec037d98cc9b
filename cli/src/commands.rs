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


//! Command-line commands.
//!
//! Every command returns the lines to print on stdout. Inventories and
//! catalog listings are printed as pretty JSON.

use crate::config::Config;
use anyhow::Context as _;
use anyhow::Result;
use clap::Subcommand;
use rackscan::aggregate_many;
use rackscan::Aggregator;
use rackscan::DnsResolver;
use rackscan::Inventory;
use rackscan::InventorySummary;
use rackscan_catalog::Catalog as _;
use rackscan_catalog::FileCatalog;
use rackscan_catalog::NewRecord;
use rackscan_catalog::ServerList;
use rackscan_catalog::ServerListStatus;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Default server list file.
pub const DEFAULT_SERVERS_FILE: &str = rackscan_catalog::servers::DEFAULT_SERVERS_FILE;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect and print the inventory of one server.
    Inventory {
        /// Host name or address of the management controller.
        host: String,
    },
    /// Collect inventories of all catalog records, or of every server
    /// of a server list.
    Batch {
        /// Server list to use instead of the catalog.
        #[arg(long)]
        servers: Option<PathBuf>,
    },
    /// Collect the inventory of one server and print its summary.
    Summary {
        /// Host name or address of the management controller.
        host: String,
    },
    /// Placement catalog.
    #[command(subcommand)]
    Catalog(CatalogCommands),
    /// Server list.
    #[command(subcommand)]
    Servers(ServersCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Add a server to the catalog.
    Add {
        #[arg(long)]
        hostname: String,
        #[arg(long)]
        rack: String,
        #[arg(long)]
        cabinet: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        service_tag: Option<String>,
    },
    /// List catalog records.
    List,
}

#[derive(Subcommand, Debug)]
pub enum ServersCommands {
    /// Report whether the server list exists and what it contains.
    Status {
        #[arg(long, default_value = DEFAULT_SERVERS_FILE)]
        servers: PathBuf,
    },
}

/// Process a command.
///
/// # Errors
///
/// Returns an error on configuration, resolution or catalog failures.
pub async fn process_command(command: &Commands, config: &Config) -> Result<Vec<String>> {
    match command {
        Commands::Inventory { host } => {
            let inventory = collect(host, config).await?;
            Ok(vec![to_json(&inventory)?])
        }
        Commands::Summary { host } => match collect(host, config).await? {
            Inventory::Report(report) => Ok(vec![to_json(&InventorySummary::from(&*report))?]),
            Inventory::Failed(err) => Ok(vec![to_json(&err)?]),
        },
        Commands::Batch { servers } => {
            let hosts = match servers {
                Some(path) => ServerList::load(path)?.into_iter().collect::<Vec<_>>(),
                None => open_catalog(config)?
                    .list()?
                    .into_iter()
                    .map(|record| record.hostname)
                    .collect(),
            };
            let endpoints = hosts
                .into_iter()
                .map(|host| config.endpoint(host))
                .collect::<Result<Vec<_>, _>>()?;
            info!(count = endpoints.len(), "collecting batch");
            let results = aggregate_many(
                &endpoints,
                &DnsResolver,
                &config.settings(),
                config.max_concurrent_endpoints,
            )
            .await;
            Ok(vec![to_json(&results)?])
        }
        Commands::Catalog(CatalogCommands::Add {
            hostname,
            rack,
            cabinet,
            position,
            model,
            service_tag,
        }) => {
            let mut catalog = open_catalog(config)?;
            let mut new = NewRecord::new(hostname, rack, cabinet, position);
            new.model.clone_from(model);
            new.service_tag.clone_from(service_tag);
            let record = catalog.add(new.resolve(&DnsResolver).await)?;
            Ok(vec![to_json(&record)?])
        }
        Commands::Catalog(CatalogCommands::List) => {
            Ok(vec![to_json(&open_catalog(config)?.list()?)?])
        }
        Commands::Servers(ServersCommands::Status { servers }) => {
            match ServerList::status(servers)? {
                ServerListStatus::Missing { path } => {
                    anyhow::bail!("server list {} was not found", path.display())
                }
                ServerListStatus::Empty { path } => Ok(vec![format!(
                    "{} was found but contains no servers",
                    path.display()
                )]),
                ServerListStatus::Loaded { path, servers } => {
                    let mut lines = vec![format!(
                        "{} was found and contains {} servers",
                        path.display(),
                        servers.len()
                    )];
                    lines.extend(servers);
                    Ok(lines)
                }
            }
        }
    }
}

async fn collect(host: &str, config: &Config) -> Result<Inventory> {
    let endpoint = config.endpoint(host)?;
    let aggregator = Aggregator::connect(&endpoint, &DnsResolver, &config.settings())
        .await
        .with_context(|| format!("cannot connect to {host}"))?;
    Ok(aggregator.aggregate().await)
}

fn open_catalog(config: &Config) -> Result<FileCatalog> {
    FileCatalog::open(&config.catalog_path)
        .with_context(|| format!("cannot open catalog {}", config.catalog_path.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("cannot encode output")
}
