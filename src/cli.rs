// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cloudscan",
    about = "List and fuzzy-search cloud resources from a tenancy snapshot",
    version
)]
pub struct Cli {
    /// Path to the tenancy snapshot JSON file
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List resources one page at a time
    List {
        /// Resource domain to list
        resource: Resource,

        /// Page size
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Page number, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fuzzy-search resources with a free-text pattern
    Search {
        /// Resource domain to search
        resource: Resource,

        /// Name fragment, tag value, identifier or IP fragment
        pattern: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Resource {
    Instances,
    Images,
    Clusters,
    Databases,
    Caches,
    Vcns,
    Buckets,
    Policies,
}
