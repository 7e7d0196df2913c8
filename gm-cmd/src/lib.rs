//! Command implementations for the Green Meter CLI.
//!
//! Provides subcommands for calculating baseline and optimized emissions
//! from a scenario, exporting the sample scenario and listing the emission
//! factors behind every calculation.

use clap::Subcommand;

pub mod calculate;
pub mod factors;
pub mod output;

use calculate::ScenarioOverrides;
use output::{ReportFormat, ScenarioFileFormat};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate baseline and optimized emissions
    Calculate {
        /// Scenario file to start from (.json or .csv); defaults to the sample scenario
        #[arg(short = 's', long)]
        scenario: Option<String>,

        /// Start from zero activity and identity adjustments instead of the sample
        #[arg(long, conflicts_with = "scenario")]
        reset: bool,

        #[command(flatten)]
        overrides: ScenarioOverrides,

        /// Report format
        #[arg(short = 'f', long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        /// Write the report to this path instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Write the sample scenario, e.g. as a starting point for your own data
    Sample {
        /// Scenario file format
        #[arg(short = 'f', long, value_enum, default_value_t = ScenarioFileFormat::Json)]
        format: ScenarioFileFormat,

        /// Write the scenario to this path instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// List emission factors and modelling assumptions
    Factors,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Calculate {
            scenario,
            reset,
            overrides,
            format,
            output,
        } => calculate::run_calculate(scenario.as_deref(), reset, &overrides, format, output.as_deref()),
        Command::Sample { format, output } => {
            calculate::run_sample(format, output.as_deref())
        }
        Command::Factors => factors::run_factors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        TestCli::try_parse_from(std::iter::once("gm-cli").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_parse_calculate_defaults() {
        match parse(&["calculate"]).unwrap() {
            Command::Calculate {
                scenario,
                reset,
                overrides,
                format,
                output,
            } => {
                assert!(scenario.is_none());
                assert!(!reset);
                assert!(overrides.is_empty());
                assert_eq!(format, ReportFormat::Table);
                assert!(output.is_none());
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_parse_calculate_with_overrides() {
        let command = parse(&[
            "calculate",
            "--reset",
            "--cars-km",
            "1000",
            "--subcontractor",
            "4",
            "--subcontractor",
            "6",
            "--ev-share",
            "50",
            "-f",
            "json",
        ])
        .unwrap();
        match command {
            Command::Calculate {
                reset,
                overrides,
                format,
                ..
            } => {
                assert!(reset);
                assert_eq!(overrides.cars_km, Some(1000.0));
                assert_eq!(overrides.subcontractors, vec![4.0, 6.0]);
                assert_eq!(overrides.ev_share, Some(50.0));
                assert_eq!(format, ReportFormat::Json);
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_negative_override_values_parse_and_clamp() {
        let command = parse(&[
            "calculate",
            "--reset",
            "--cars-km",
            "-50",
            "--subcontractor",
            "-3",
            "--ev-share",
            "-5",
        ])
        .unwrap();
        let Command::Calculate { overrides, .. } = command else {
            panic!("expected calculate");
        };
        assert_eq!(overrides.cars_km, Some(-50.0));
        assert_eq!(overrides.subcontractors, vec![-3.0]);
        assert_eq!(overrides.ev_share, Some(-5.0));

        let scenario = calculate::build_scenario(None, true, &overrides).unwrap();
        assert_eq!(scenario.inputs.cars_km, 0.0);
        assert_eq!(scenario.inputs.subcontractors_tons, vec![0.0]);
        assert_eq!(scenario.adjustments.ev_share_pct, 0.0);
    }

    #[test]
    fn test_reset_conflicts_with_scenario() {
        assert!(parse(&["calculate", "--reset", "--scenario", "fleet.json"]).is_err());
    }

    #[test]
    fn test_parse_sample_and_factors() {
        match parse(&["sample", "--format", "csv"]).unwrap() {
            Command::Sample { format, output } => {
                assert_eq!(format, ScenarioFileFormat::Csv);
                assert!(output.is_none());
            }
            _ => panic!("expected sample"),
        }
        assert!(matches!(parse(&["factors"]).unwrap(), Command::Factors));
    }
}
