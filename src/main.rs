//! Blood Match - command-line front end
//!
//! ```bash
//! blood-match check O- AB+
//! blood-match chart
//! blood-match inventory B+ inventory.json
//! blood-match feed O- requests.json
//! blood-match ledger inventory.json
//! blood-match pincode 110001
//! ```
//!
//! Input files are JSON arrays in the application's camelCase shape.
//! Results are printed as JSON on stdout; logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

use blood_match::config::Config;
use blood_match::logging;
use blood_match::types::{
    AvailableEntry, BloodGroup, DonationRequest, InventoryEntry, Pincode, StockLevel,
    StockThresholds,
};
use blood_match::{
    can_donate, rank_urgent_requests_for_donor, search_inventory, CompatibilityChart,
    InventoryLedger, InventorySearch,
};

#[derive(Debug, Parser)]
#[command(name = "blood-match", version, about = "Blood group compatibility and donor matching")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a donor group can give to a recipient group
    Check { donor: String, recipient: String },
    /// Print the full compatibility chart
    Chart,
    /// Search an inventory file for units of exactly one group
    Inventory { group: String, file: PathBuf },
    /// Build a donor's opportunity feed from a request file
    Feed { group: String, file: PathBuf },
    /// Load an inventory file into a ledger and print its state root
    Ledger { file: PathBuf },
    /// Validate a 6-digit pincode
    Pincode { code: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeveledMatch<'a> {
    #[serde(flatten)]
    entry: &'a AvailableEntry,
    stock_level: StockLevel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InventoryReport<'a> {
    blood_group: BloodGroup,
    total_facilities: usize,
    total_units: u64,
    matches: Vec<LeveledMatch<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LedgerSummary {
    facilities: usize,
    units_by_group: Vec<GroupUnits>,
    state_root: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupUnits {
    blood_group: BloodGroup,
    units: u64,
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config);

    match run(Cli::parse(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Check { donor, recipient } => {
            let allowed = can_donate(&donor, &recipient)?;
            let verdict = if allowed { "compatible" } else { "incompatible" };
            println!("{donor} -> {recipient}: {verdict}");
        }
        Command::Chart => print_json(&CompatibilityChart::build())?,
        Command::Inventory { group, file } => {
            let group = BloodGroup::parse(&group)?;
            let entries: Vec<InventoryEntry> = read_json(&file)?;
            let search = search_inventory(group, &entries);
            let report = inventory_report(&search, &config.stock_thresholds);
            tracing::info!(
                blood_group = %group,
                facilities = report.total_facilities,
                "inventory searched"
            );
            print_json(&report)?;
        }
        Command::Feed { group, file } => {
            let group = BloodGroup::parse(&group)?;
            let requests: Vec<DonationRequest> = read_json(&file)?;
            let feed = rank_urgent_requests_for_donor(group, &requests);
            tracing::info!(donor_group = %group, compatible = feed.len(), "feed built");
            print_json(&feed)?;
        }
        Command::Ledger { file } => {
            let entries: Vec<InventoryEntry> = read_json(&file)?;
            let mut ledger = InventoryLedger::with_capacity(config.ledger_capacity);
            ledger.load_entries(&entries)?;
            print_json(&ledger_summary(&ledger)?)?;
        }
        Command::Pincode { code } => {
            let pincode = Pincode::parse(&code)?;
            println!("{pincode}: valid (region {})", pincode.region());
        }
    }
    Ok(())
}

fn inventory_report<'a>(
    search: &'a InventorySearch,
    thresholds: &StockThresholds,
) -> InventoryReport<'a> {
    InventoryReport {
        blood_group: search.blood_group,
        total_facilities: search.total_facilities,
        total_units: search.total_units,
        matches: search
            .matches
            .iter()
            .map(|entry| LeveledMatch {
                entry,
                stock_level: thresholds.classify(entry.available_units),
            })
            .collect(),
    }
}

fn ledger_summary(ledger: &InventoryLedger) -> Result<LedgerSummary> {
    Ok(LedgerSummary {
        facilities: ledger.facility_count(),
        units_by_group: BloodGroup::ALL
            .into_iter()
            .map(|blood_group| GroupUnits {
                blood_group,
                units: ledger.total_units(blood_group),
            })
            .collect(),
        state_root: ledger.state_root_hex()?,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
