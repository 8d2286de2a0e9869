use std::{fs::{self, File}, io::BufWriter, path::PathBuf, process::ExitCode};
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use rand::{rngs::StdRng, SeedableRng};
use guestindex::{bench, loader, report, Result};
use guestindex::index::hashtable::{DEFAULT_BUCKET_COUNT, DEFAULT_MODULUS};
use guestindex::index::HashTableConfig;
use guestindex::logger::initialize_logger;
use guestindex::rand::rand_records_with;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

/// Times exact-name lookups over guest records with a linear scan, an
/// unbalanced tree, a red-black tree, a hash table and an ordered multimap.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Dataset sizes to run
    #[arg(long, value_delimiter = ',',
        default_value = "100,1000,10000,20000,70000,120000,200000,350000,600000,1000000")]
    sizes: Vec<usize>,

    /// Directory holding data_hostel_<size>.csv files; synthetic data when absent
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Distinct guest names per synthetic dataset, defaults to a tenth of its size
    #[arg(long)]
    distinct_names: Option<usize>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "output/search_time.csv")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
    bucket_count: usize,

    #[arg(long, default_value_t = DEFAULT_MODULUS)]
    modulus: u64,
}

fn run(args: &Args) -> Result<()> {
    let config = HashTableConfig {
        bucket_count: args.bucket_count,
        modulus: args.modulus,
    };
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut measurements = Vec::new();
    for &size in &args.sizes {
        let records = match &args.data_dir {
            Some(dir) => loader::read_records(&dir.join(format!("data_hostel_{}.csv", size)))?,
            None => {
                let distinct = args.distinct_names.unwrap_or(size / 10).max(1);
                rand_records_with(&mut rng, size, distinct)
            }
        };
        let Some(key) = bench::pick_key(&records) else {
            warn!("dataset of size {} is empty, skipping", size);
            continue;
        };
        info!("size {}: {} records, probing {:?}", size, records.len(), key);
        measurements.extend(bench::run_trial(&records, key, config)?);
    }

    if let Some(dir) = args.out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let mut writer = BufWriter::new(File::create(&args.out)?);
    match args.format {
        Format::Csv => report::write_csv(&mut writer, &measurements)?,
        Format::Json => report::write_json(&mut writer, &measurements)?,
    }
    info!("wrote {} measurements to {}", measurements.len(), args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
