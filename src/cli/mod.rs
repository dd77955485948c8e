//! Command-line parsing for the Phillips curve dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the data/fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Country;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "phillips", version, about = "Phillips curve dashboard with DBnomics data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard (default).
    Tui(TuiArgs),
    /// Fetch one country, fit the trend, and print a summary and a text chart.
    Show(ShowArgs),
    /// Plot a previously exported chart JSON.
    Plot(PlotArgs),
    /// List supported countries and their DBnomics series codes.
    Countries,
}

#[derive(Debug, Args, Clone, Default)]
pub struct TuiArgs {
    /// Text file shown verbatim as the header logo.
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the UI).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Country to chart (France, "United States", Argentina, Japan, or ISO-3 code).
    #[arg(short = 'c', long, default_value = "France")]
    pub country: Country,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the cleaned observations with trend values to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the chart (scatter, trend, coefficients) to JSON.
    #[arg(long = "export-chart", value_name = "JSON")]
    pub export_chart: Option<PathBuf>,
}

/// Options for plotting a saved chart.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Chart JSON file produced by `phillips show --export-chart`.
    #[arg(long, value_name = "JSON")]
    pub chart: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
