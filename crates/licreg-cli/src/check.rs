//! # Check Subcommand
//!
//! Builds a [`Registration`] from command-line flags, evaluates it at a
//! given instant (the wall clock by default), and prints a report.
//!
//! Exit codes: `0` valid, `2` well-formed but not valid, `1` on error.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use licreg_core::{LicregError, Mode, Registration, Timestamp};

/// Exit code for a registration that parses but is not currently valid.
pub const EXIT_NOT_VALID: u8 = 2;

/// Exit code for a rejected command line or a registration that cannot be built.
pub const EXIT_ERROR: u8 = 1;

/// Arguments for the `licreg check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// License holder.
    #[arg(long)]
    pub owner: String,

    /// Issue date (RFC 3339 or YYYY-MM-DD).
    #[arg(long, value_parser = parse_timestamp)]
    pub registry_date: Timestamp,

    /// Expiry date (RFC 3339 or YYYY-MM-DD).
    #[arg(long, value_parser = parse_timestamp)]
    pub expiry_date: Timestamp,

    /// Licensing mode: TRIAL or FULL (case-sensitive).
    #[arg(long)]
    pub mode: String,

    /// Maximum cluster size permitted by the license.
    #[arg(long)]
    pub max_nodes: u32,

    /// Evaluate at this instant instead of now.
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<Timestamp>,

    /// Report format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Result of evaluating a registration at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub owner: String,
    pub mode: Mode,
    pub registry_date: Timestamp,
    pub expiry_date: Timestamp,
    pub max_nodes: u32,
    pub evaluated_at: Timestamp,
    pub expired: bool,
    pub valid: bool,
}

impl CheckReport {
    pub fn evaluate(registration: &Registration, at: Timestamp) -> Self {
        Self {
            owner: registration.owner().to_string(),
            mode: registration.mode(),
            registry_date: registration.registry_date(),
            expiry_date: registration.expiry_date(),
            max_nodes: registration.max_nodes(),
            evaluated_at: at,
            expired: registration.is_expired_at(at),
            valid: registration.is_valid_at(at),
        }
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "owner:         {}", self.owner)?;
        writeln!(out, "mode:          {}", self.mode)?;
        writeln!(out, "registry date: {}", self.registry_date)?;
        writeln!(out, "expiry date:   {}", self.expiry_date)?;
        writeln!(out, "max nodes:     {}", self.max_nodes)?;
        writeln!(out, "evaluated at:  {}", self.evaluated_at)?;
        writeln!(out, "expired:       {}", self.expired)?;
        writeln!(out, "valid:         {}", self.valid)
    }
}

fn parse_timestamp(s: &str) -> Result<Timestamp, LicregError> {
    Timestamp::parse_flexible(s)
}

/// Execute the check subcommand, writing the report to `out`.
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<u8> {
    let registration = Registration::new(
        args.owner.as_str(),
        args.registry_date,
        args.expiry_date,
        &args.mode,
        args.max_nodes,
    )
    .with_context(|| format!("cannot build registration for owner {:?}", args.owner))?;

    let at = args.at.unwrap_or_else(Timestamp::now);
    tracing::debug!(
        owner = %registration.owner(),
        mode = %registration.mode(),
        expiry_date = %registration.expiry_date(),
        at = %at,
        "evaluating registration"
    );

    let report = CheckReport::evaluate(&registration, at);
    match args.format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    if report.valid {
        tracing::info!(owner = %report.owner, mode = %report.mode, "registration is valid");
        Ok(0)
    } else {
        tracing::warn!(
            owner = %report.owner,
            mode = %report.mode,
            expired = report.expired,
            expiry_date = %report.expiry_date,
            "registration is not valid"
        );
        Ok(EXIT_NOT_VALID)
    }
}
