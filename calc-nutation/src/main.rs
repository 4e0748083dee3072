use anyhow::Context;
use clap::Parser;
use nutation_core::{CoefficientTable, NutationIAU2000A};
use nutation_time::parsing::parse_timestamp;
use nutation_time::{Dut1Table, Instant, LeapSecondTable, TimeScale, TimeScaleConverter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod report;

use report::Report;

const DEFAULT_DATA_DIR: &str = "data";
const LEAP_SECONDS_FILE: &str = "LEAP_SEC.txt";
const DUT1_FILE: &str = "DUT1.txt";
const LUNISOLAR_FILE: &str = "dat_ls.txt";
const PLANETARY_FILE: &str = "dat_pl.txt";

#[derive(Parser)]
#[command(name = "calc-nutation")]
#[command(about = "Compute IAU 2000A nutation in longitude and obliquity")]
struct Cli {
    /// TT as YYYYMMDDHHMMSS followed by up to 9 fraction digits (default: now)
    timestamp: Option<String>,

    /// Directory holding LEAP_SEC.txt, DUT1.txt, dat_ls.txt and dat_pl.txt,
    /// relative paths resolved against the working directory
    #[arg(long, env = "CALC_NUTATION_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

struct Tables {
    leap_seconds: LeapSecondTable,
    dut1: Dut1Table,
    coefficients: CoefficientTable,
}

impl Tables {
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(LEAP_SECONDS_FILE);
        let leap_seconds = LeapSecondTable::load(&path)
            .with_context(|| format!("loading leap seconds from {}", path.display()))?;

        let path = dir.join(DUT1_FILE);
        let dut1 = Dut1Table::load(&path)
            .with_context(|| format!("loading DUT1 from {}", path.display()))?;

        let coefficients = CoefficientTable::load(
            &dir.join(LUNISOLAR_FILE),
            &dir.join(PLANETARY_FILE),
        )
        .with_context(|| format!("loading nutation coefficients from {}", dir.display()))?;

        Ok(Self {
            leap_seconds,
            dut1,
            coefficients,
        })
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let instant = match &cli.timestamp {
        Some(timestamp) => Instant::from_calendar(&parse_timestamp(timestamp)?, TimeScale::TT),
        None => Instant::now(TimeScale::TT)?,
    };
    log::debug!("evaluating at {}", instant);

    let tables = Tables::load(&cli.data_dir)?;
    let converter = TimeScaleConverter::new(&tables.leap_seconds, &tables.dut1);
    let tt = converter.to_tt(&instant)?;
    let julian_century = converter.julian_century_number(&tt)?;

    let nutation = NutationIAU2000A::new(&tables.coefficients).compute(julian_century)?;

    let tt_string = converter.calendar_string(&tt);
    let report = Report {
        tt: &tt_string,
        julian_century,
        nutation: &nutation,
    };
    Ok(report.to_string())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
