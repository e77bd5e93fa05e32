use std::{fs::File, io::BufWriter};

use bike2books_core::util::geo_utils::GeoPoint;
use clap::{Parser, Subcommand};
use uom::si::time::minute;

use super::{Bike2BooksConfig, OriginArgs};
use crate::{
    error::Bike2BooksError,
    model::{
        dataset::{ensure_datasets, DatasetStatus},
        locate::LibraryLocator,
        neighborhood,
        sample::{seeded_random_source, LocationSampler, TripFormat},
        travel,
    },
};

/// neighborhood used when sampling without an explicit origin
pub const CITY_CENTER: &str = "Downtown";

/// command line tool comparing bike and drive trips to the nearest library
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Bike2BooksApp {
    /// TOML file with configuration overrides
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: Bike2BooksOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Bike2BooksOperation {
    /// list the known neighborhood names
    Neighborhoods,
    /// sample random trip origins around a neighborhood or coordinate. without
    /// an origin, samples around downtown.
    Sample {
        #[command(flatten)]
        origin: OriginArgs,
        /// sample radius in miles, overrides the configured radius
        #[arg(short, long)]
        radius: Option<f64>,
        /// number of trips to sample
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,
        /// output format
        #[arg(short, long, default_value_t = TripFormat::Csv)]
        format: TripFormat,
        /// file to write, otherwise trips are written to stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// find the nearest library to a location
    Nearest {
        #[command(flatten)]
        origin: OriginArgs,
    },
    /// download the library, parking meter and bike route datasets if the
    /// data directory does not exist yet
    Download,
    /// compare biking and driving to the nearest library
    Recommend {
        #[command(flatten)]
        origin: OriginArgs,
    },
}

impl Bike2BooksApp {
    pub fn run(&self) -> Result<(), Bike2BooksError> {
        let config = Bike2BooksConfig::load(self.config.as_deref())?;
        self.op.run(&config)
    }
}

impl Bike2BooksOperation {
    pub fn run(&self, config: &Bike2BooksConfig) -> Result<(), Bike2BooksError> {
        match self {
            Bike2BooksOperation::Neighborhoods => {
                for name in neighborhood::neighborhood_names() {
                    println!("{name}");
                }
                Ok(())
            }
            Bike2BooksOperation::Sample {
                origin,
                radius,
                count,
                seed,
                format,
                output,
            } => {
                let center = match origin.resolve()? {
                    Some(center) => center,
                    None => neighborhood::neighborhood(CITY_CENTER)?,
                };
                run_sample(
                    config,
                    &center,
                    *radius,
                    *count,
                    *seed,
                    *format,
                    output.as_deref(),
                )
            }
            Bike2BooksOperation::Nearest { origin } => {
                let location = origin.require()?;
                let locator = LibraryLocator::new(config.libraries_path());
                let nearest = locator.nearest_library(&location)?;
                println!("{},{:.3}", nearest.name, nearest.distance_miles);
                Ok(())
            }
            Bike2BooksOperation::Download => {
                match ensure_datasets(&config.dataset_config())? {
                    DatasetStatus::AlreadyPresent(directory) => {
                        println!("datasets already present in {}", directory.to_string_lossy())
                    }
                    DatasetStatus::Downloaded(paths) => {
                        for path in paths {
                            println!("downloaded {}", path.to_string_lossy());
                        }
                    }
                }
                Ok(())
            }
            Bike2BooksOperation::Recommend { origin } => {
                let location = origin.require()?;
                let locator = LibraryLocator::new(config.libraries_path());
                let nearest = locator.nearest_library(&location)?;
                let comparison = travel::compare(&location, &nearest.location, &config.speeds)?;
                println!(
                    "nearest library: {} ({:.2} miles)",
                    nearest.name, nearest.distance_miles
                );
                println!("bike:  {:.1} minutes", comparison.bike.get::<minute>());
                println!("drive: {:.1} minutes", comparison.drive.get::<minute>());
                println!("recommendation: {}", comparison.faster());
                Ok(())
            }
        }
    }
}

fn run_sample(
    config: &Bike2BooksConfig,
    center: &GeoPoint,
    radius: Option<f64>,
    count: usize,
    seed: Option<u64>,
    format: TripFormat,
    output: Option<&str>,
) -> Result<(), Bike2BooksError> {
    let mut sampler_config = config.sampler;
    if let Some(radius_miles) = radius {
        sampler_config.radius_miles = radius_miles;
    }
    let sampler = LocationSampler::try_from(&sampler_config)?;
    let trips = match seed {
        Some(seed) => {
            let mut rng = seeded_random_source(seed);
            sampler.trips(count, center, Some(&mut rng))?
        }
        None => sampler.trips(count, center, None)?,
    };

    match output {
        Some(filepath) => {
            let file = File::create(filepath)?;
            format.write_trips(&trips, BufWriter::new(file))?;
            log::info!("wrote {} trips to {filepath}", trips.len());
        }
        None => {
            let stdout = std::io::stdout();
            format.write_trips(&trips, stdout.lock())?;
        }
    }
    Ok(())
}
