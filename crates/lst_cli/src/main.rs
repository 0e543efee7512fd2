use std::error::Error;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Utc};
use clap::{Parser, Subcommand};
use lst_config::{ConfigMessage, ObserverConfig, SettingsStore};
use lst_face::{Face, Readout, ReadoutSet, ReadoutSink};
use lst_time::{CivilTime, ClockSnapshot};

#[derive(Parser)]
#[command(name = "lst", about = "Sidereal watchface readouts")]
struct Cli {
    /// Settings directory holding the persisted observer longitude
    #[arg(long, default_value = "lst-settings")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Readouts for the current wall clock
    Now,
    /// Readouts for an explicit UTC instant
    At {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        utc: String,
    },
    /// Persisted observer configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the stored longitude (0.0 if never set)
    Show,
    /// Store an east-positive longitude in degrees
    SetLongitude {
        /// Observer longitude in degrees, east-positive
        degrees: f64,
    },
    /// Apply a raw fixed-point longitude message (degrees x 1e7),
    /// exercising the configuration handshake end to end
    SetRaw {
        /// Signed fixed-point longitude, degrees scaled by 1e7
        raw: i32,
    },
}

/// Sink for hosts that render elsewhere; the CLI prints from the
/// returned `ReadoutSet` instead.
struct Discard;

impl ReadoutSink for Discard {
    fn set_text(&mut self, _readout: Readout, _text: &str) {}
}

fn civil_from<T: Datelike + Timelike>(dt: &T) -> CivilTime {
    CivilTime::new(
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    )
}

fn snapshot_now() -> ClockSnapshot {
    let utc = Utc::now();
    let local = utc.with_timezone(&Local);
    ClockSnapshot {
        local: civil_from(&local),
        utc: civil_from(&utc),
    }
}

fn parse_utc(s: &str) -> Result<ClockSnapshot, Box<dyn Error>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")
        .map_err(|e| format!("bad UTC datetime '{s}': {e}"))?;
    let utc = civil_from(&naive);
    // An explicit instant has no local-zone context: both readout rows
    // show UTC, and the DST marker stays blank.
    Ok(ClockSnapshot { local: utc, utc })
}

fn print_readouts(set: &ReadoutSet) {
    println!("L   {}  {}", set.local_time, set.dst_flag.trim());
    println!("    {}", set.local_date);
    println!("U   {}  {}", set.utc_time, set.mjd);
    println!("S   {}", set.lst_time);
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let store = SettingsStore::open(&cli.settings)?;
    let face = Face::new(store);

    match cli.command {
        Commands::Now => {
            let set = face.refresh(&snapshot_now(), &mut Discard)?;
            print_readouts(&set);
        }
        Commands::At { utc } => {
            let snapshot = parse_utc(&utc)?;
            let set = face.refresh(&snapshot, &mut Discard)?;
            print_readouts(&set);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = ObserverConfig::load(face.store())?;
                println!("longitude: {:.7} deg east", config.longitude_deg);
            }
            ConfigAction::SetLongitude { degrees } => {
                ObserverConfig {
                    longitude_deg: degrees,
                }
                .save(face.store())?;
                println!("longitude: {degrees:.7} deg east");
            }
            ConfigAction::SetRaw { raw } => {
                let message = ConfigMessage::with_longitude_raw(raw);
                let set = face
                    .on_config_message(&message, &snapshot_now(), &mut Discard)?
                    .ok_or("message carried no longitude field")?;
                let config = ObserverConfig::load(face.store())?;
                eprintln!("applied longitude {:.7} deg east", config.longitude_deg);
                print_readouts(&set);
            }
        },
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
