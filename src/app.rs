//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - fetches DBnomics data and builds charts
//! - prints reports/plots or hands over to the dashboard
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, ShowArgs, TuiArgs};
use crate::data::DbnomicsClient;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `phillips` binary.
pub fn run() -> Result<(), AppError> {
    // `phillips` and `phillips --logo x.txt` behave like `phillips tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Show(args) => {
            crate::logging::init_stderr();
            handle_show(args)
        }
        Command::Plot(args) => {
            crate::logging::init_stderr();
            handle_plot(args)
        }
        Command::Countries => {
            print!("{}", crate::report::format_series_table());
            Ok(())
        }
    }
}

fn handle_tui(args: TuiArgs) -> Result<(), AppError> {
    if let Some(path) = &args.log_file {
        crate::logging::init_file(path)?;
    }
    crate::tui::run(args)
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let client = DbnomicsClient::from_env()?;
    let chart = pipeline::run_chart(&client, args.country)?;

    println!("{}", crate::report::format_chart_summary(&chart));

    if !args.no_plot {
        println!("{}", crate::plot::render_ascii_chart(&chart, args.width, args.height));
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::write_observations_csv(path, &chart)?;
    }
    if let Some(path) = &args.export_chart {
        crate::io::write_chart_json(path, &chart)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let doc = crate::io::read_chart_json(&args.chart)?;
    println!("{}", doc.chart.title);
    println!("{}", crate::plot::render_ascii_chart(&doc.chart, args.width, args.height));
    Ok(())
}

/// Rewrite argv so `phillips` defaults to `phillips tui`.
///
/// Rules:
/// - `phillips`                      -> `phillips tui`
/// - `phillips --logo x ...`         -> `phillips tui --logo x ...`
/// - `phillips --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "show" | "plot" | "countries");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_the_dashboard() {
        assert_eq!(rewrite_args(args(&["phillips"])), args(&["phillips", "tui"]));
        assert_eq!(
            rewrite_args(args(&["phillips", "--logo", "x.txt"])),
            args(&["phillips", "tui", "--logo", "x.txt"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["phillips", "show", "-c", "Japan"])),
            args(&["phillips", "show", "-c", "Japan"])
        );
        assert_eq!(rewrite_args(args(&["phillips", "--help"])), args(&["phillips", "--help"]));
    }
}
