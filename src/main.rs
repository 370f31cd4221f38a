// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cloudscan::display::{render_table, report_empty, write_pagination_footer};
use cloudscan::domain::{
    bucket, cache, cluster, database, image, instance, policy, vcn, Snapshot, TableRecord,
};
use cloudscan::{paginate_slice, search_collection, FieldSpec, Indexable};

mod cli;
use cli::{Cli, Commands, Resource};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "cloudscan=debug" } else { "cloudscan=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let raw = fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("reading snapshot {}", cli.snapshot.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw).context("parsing snapshot JSON")?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List {
            resource,
            limit,
            page,
            json,
        } => match resource {
            Resource::Instances => list_cmd(&mut out, &snapshot.instances, limit, page, json),
            Resource::Images => list_cmd(&mut out, &snapshot.images, limit, page, json),
            Resource::Clusters => list_cmd(&mut out, &snapshot.clusters, limit, page, json),
            Resource::Databases => list_cmd(&mut out, &snapshot.databases, limit, page, json),
            Resource::Caches => list_cmd(&mut out, &snapshot.caches, limit, page, json),
            Resource::Vcns => list_cmd(&mut out, &snapshot.vcns, limit, page, json),
            Resource::Buckets => list_cmd(&mut out, &snapshot.buckets, limit, page, json),
            Resource::Policies => list_cmd(&mut out, &snapshot.policies, limit, page, json),
        },
        Commands::Search {
            resource,
            pattern,
            json,
        } => match resource {
            Resource::Instances => {
                search_cmd(&mut out, &snapshot.instances, &instance::FIELDS, &pattern, json)
            }
            Resource::Images => {
                search_cmd(&mut out, &snapshot.images, &image::FIELDS, &pattern, json)
            }
            Resource::Clusters => {
                search_cmd(&mut out, &snapshot.clusters, &cluster::FIELDS, &pattern, json)
            }
            Resource::Databases => {
                search_cmd(&mut out, &snapshot.databases, &database::FIELDS, &pattern, json)
            }
            Resource::Caches => {
                search_cmd(&mut out, &snapshot.caches, &cache::FIELDS, &pattern, json)
            }
            Resource::Vcns => search_cmd(&mut out, &snapshot.vcns, &vcn::FIELDS, &pattern, json),
            Resource::Buckets => {
                search_cmd(&mut out, &snapshot.buckets, &bucket::FIELDS, &pattern, json)
            }
            Resource::Policies => {
                search_cmd(&mut out, &snapshot.policies, &policy::FIELDS, &pattern, json)
            }
        },
    }
}

fn list_cmd<T, W>(out: &mut W, records: &[T], limit: usize, page: usize, json: bool) -> Result<()>
where
    T: TableRecord + Serialize + Clone,
    W: Write,
{
    let result = paginate_slice(records, limit, page);

    if json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
        return Ok(());
    }

    if report_empty(out, result.items.len(), result.current_page, result.total_count)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = result.items.iter().map(TableRecord::row).collect();
    render_table(out, T::headers(), &rows)?;
    write_pagination_footer(
        out,
        result.current_page,
        result.limit,
        result.total_count,
        &result.next_page_token,
    )?;
    Ok(())
}

fn search_cmd<T, W>(
    out: &mut W,
    records: &[T],
    fields: &FieldSpec,
    pattern: &str,
    json: bool,
) -> Result<()>
where
    T: TableRecord + Indexable + Serialize,
    W: Write,
{
    let matches = search_collection(records, fields, pattern)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        writeln!(out)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "No items found.")?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = matches.iter().map(|record| record.row()).collect();
    render_table(out, T::headers(), &rows)?;
    writeln!(out, "Matched {} of {} records", matches.len(), records.len())?;
    Ok(())
}
