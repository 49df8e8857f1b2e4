use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use reservoir_volumetrics::{
    analysis::ReservoirCalculator,
    config::InputRanges,
    io,
    models::{Reserve, ReserveType, ReservoirInputs},
    visualization::{
        print_bar_chart, print_inputs_table, print_pie_chart, print_ranges_table,
        print_result_summary, BarChart, PieChart,
    },
};

#[derive(Parser)]
#[command(
    name = "reservoir-calc",
    about = "Volumetric Oil & Gas Reserves Calculator - OIIP/GIIP estimation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate oil or gas initially in place and display volumes and charts
    Calculate {
        /// Reserve type: oil or gas
        #[arg(short = 't', long, default_value = "oil")]
        reserve_type: ReserveType,

        /// Reservoir area in acres
        #[arg(short, long)]
        area: Option<f64>,

        /// Net pay thickness in feet
        #[arg(short = 'H', long)]
        thickness: Option<f64>,

        /// Porosity (fraction, 0.0-1.0)
        #[arg(short, long)]
        porosity: Option<f64>,

        /// Water saturation (fraction, 0.0-1.0)
        #[arg(short = 'w', long)]
        water_saturation: Option<f64>,

        /// Formation volume factor: Bo (RB/STB) for oil, Bg (RCF/SCF) for gas
        #[arg(short, long)]
        fvf: Option<f64>,

        /// Recovery factor (fraction, 0.0-1.0); 0 skips the recovery breakdown
        #[arg(short, long)]
        recovery_factor: Option<f64>,

        /// Scenario file (TOML or JSON) supplying all inputs
        #[arg(short, long, conflicts_with_all = [
            "reserve_type", "area", "thickness", "porosity",
            "water_saturation", "fvf", "recovery_factor",
        ])]
        scenario: Option<PathBuf>,

        /// TOML file overriding input ranges and defaults
        #[arg(long)]
        ranges: Option<PathBuf>,

        /// Write the inputs and results as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Skip the bar and pie charts
        #[arg(long)]
        no_charts: bool,
    },

    /// Show input ranges, defaults and step sizes
    Ranges {
        /// Only show the formation volume factor for this reserve type
        #[arg(short = 't', long)]
        reserve_type: Option<ReserveType>,

        /// TOML file overriding input ranges and defaults
        #[arg(long)]
        ranges: Option<PathBuf>,
    },

    /// Start the web API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// TOML file overriding input ranges and defaults
        #[arg(long)]
        ranges: Option<PathBuf>,
    },
}

fn load_ranges(path: Option<&PathBuf>) -> Result<InputRanges> {
    match path {
        Some(p) => Ok(InputRanges::load(p)?),
        None => Ok(InputRanges::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            reserve_type,
            area,
            thickness,
            porosity,
            water_saturation,
            fvf,
            recovery_factor,
            scenario,
            ranges,
            output,
            pretty,
            no_charts,
        } => {
            let ranges = load_ranges(ranges.as_ref())?;

            let inputs = match &scenario {
                Some(path) => io::read_scenario(path)?,
                // Every missing flag falls back to the range default
                None => {
                    let defaults = ranges.default_inputs(reserve_type);
                    ReservoirInputs {
                        reserve: Reserve::new(
                            reserve_type,
                            fvf.unwrap_or(defaults.formation_volume_factor()),
                        ),
                        area: area.unwrap_or(defaults.area),
                        thickness: thickness.unwrap_or(defaults.thickness),
                        porosity: porosity.unwrap_or(defaults.porosity),
                        water_saturation: water_saturation.unwrap_or(defaults.water_saturation),
                        recovery_factor: recovery_factor.unwrap_or(defaults.recovery_factor),
                    }
                }
            };

            println!(
                "\n{}",
                "Volumetric Oil & Gas Reserves Calculator".bold().cyan()
            );
            if let Some(path) = &scenario {
                println!("  Scenario: {}", path.display());
            }

            ranges.warn_out_of_range(&inputs);

            let report = ReservoirCalculator::new(&inputs).report()?;

            print_inputs_table(&inputs);
            print_result_summary(&report.result);

            if !no_charts {
                print_bar_chart(&BarChart::from_result(&report.result));
                if let Some(pie) = PieChart::from_result(&report.result) {
                    print_pie_chart(&pie);
                }
            }

            if let Some(path) = output {
                io::write_report_json(&report, &path, pretty)?;
                println!(
                    "{} Wrote report to {}",
                    "Success:".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Ranges {
            reserve_type,
            ranges,
        } => {
            let ranges = load_ranges(ranges.as_ref())?;
            print_ranges_table(&ranges, reserve_type);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, ranges } => {
            let ranges = load_ranges(ranges.as_ref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(reservoir_volumetrics::web::start_server(port, ranges))?;
        }
    }

    Ok(())
}
