// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use leaddesk_app::{AppState, LeadQuery, LeadStore, SortDirection, SortSpec, TypeFilter};
use leaddesk_testkit::LeadFaker;
use logging::LoggingConfig;
use runtime::SystemRuntime;
use std::env;
use std::path::PathBuf;
use tracing::info;

const DEMO_SEED: u64 = 2026;
const DEMO_LEADS: usize = 30;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `leaddesk --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let store = build_store(&config, &options)?;
    if options.print_leads {
        println!("{}", leads_json(&store)?);
        return Ok(());
    }

    let _log_guard = logging::init(&LoggingConfig {
        log_dir: config.log_dir()?,
        default_filter: config.log_filter().to_owned(),
    })?;
    info!(
        path = %options.config_path.display(),
        leads = store.len(),
        demo = options.demo,
        "config loaded"
    );
    if options.check_only {
        return Ok(());
    }

    let mut state = AppState::new(store, config.columns()?);
    state.active_tab = config.start_tab()?;

    let mut runtime = SystemRuntime::new(config.opener());
    info!(opener = runtime.opener(), "starting tui");
    leaddesk_tui::run_app(&mut state, &mut runtime)
}

/// Seed leads plus optional demo leads, with the query from config then flags.
fn build_store(config: &Config, options: &CliOptions) -> Result<LeadStore> {
    let mut store = LeadStore::seeded();
    if options.demo {
        let mut faker = LeadFaker::new(DEMO_SEED);
        for lead in faker.leads(DEMO_LEADS) {
            store.append(lead);
        }
    }

    let mut query = LeadQuery {
        sort: config.sort()?,
        ..LeadQuery::default()
    };
    if let Some(search) = &options.search {
        query.search = search.clone();
    }
    if let Some(filter) = options.type_filter {
        query.type_filter = filter;
    }
    if let Some(sort) = options.sort {
        query.sort = sort;
    }
    Ok(store.with_query(query))
}

fn leads_json(store: &LeadStore) -> Result<String> {
    serde_json::to_string_pretty(&store.view()).context("encode leads as JSON")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    print_leads: bool,
    search: Option<String>,
    type_filter: Option<TypeFilter>,
    sort: Option<SortSpec>,
    demo: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        print_leads: false,
        search: None,
        type_filter: None,
        sort: None,
        demo: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--search" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--search requires a query string"))?;
                options.search = Some(value.as_ref().to_owned());
            }
            "--type" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow!("--type requires one of: all, buyer, seller, buyer/seller")
                })?;
                let raw = value.as_ref();
                options.type_filter = Some(TypeFilter::parse(raw).ok_or_else(|| {
                    anyhow!("unknown --type {raw:?}; use one of: all, buyer, seller, buyer/seller")
                })?);
            }
            "--sort" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--sort requires a column like name or email:desc"))?;
                options.sort = Some(parse_sort(value.as_ref())?);
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--print-leads" => {
                options.print_leads = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

/// `column` or `column:asc|desc`.
fn parse_sort(raw: &str) -> Result<SortSpec> {
    let (column, direction) = match raw.split_once(':') {
        Some((column, direction)) => (column, Some(direction)),
        None => (raw, None),
    };
    let column = config::parse_field(column)?;
    let direction = match direction {
        None => SortDirection::Asc,
        Some(value) => match SortDirection::parse(value) {
            Some(direction) => direction,
            None => bail!("unknown sort direction {value:?} in --sort {raw:?}; use asc or desc"),
        },
    };
    Ok(SortSpec { column, direction })
}

fn print_help() {
    println!("leaddesk");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --print-leads            Print the filtered, sorted leads as JSON");
    println!("  --search <text>          Initial search (name, email, phone)");
    println!("  --type <type>            Initial type filter: all, buyer, seller, buyer/seller");
    println!("  --sort <col[:dir]>       Initial sort, for example email:desc");
    println!("  --demo                   Add generated demo leads to the sample set");
    println!("  --check                  Validate config and logging, then exit");
    println!("  --help                   Show this help");
}
