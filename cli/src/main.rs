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


//! `rackscan`: server inventory over Redfish.

mod commands;
mod config;
mod logging;

use anyhow::Context as _;
use clap::Parser;
use commands::process_command;
use commands::Commands;
use config::Config;
use config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "rackscan")]
#[command(about = "Datacenter server inventory collected from BMCs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    overrides: Overrides,
    /// Log filter, e.g. `debug` or `rackscan=debug`. Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref()).context("invalid log filter")?;

    let config = Config::load(&cli.overrides)?;
    for line in process_command(&cli.command, &config).await? {
        println!("{line}");
    }
    Ok(())
}
