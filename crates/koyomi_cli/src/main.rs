mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use koyomi_base::{
    classify_moon_phase, classify_solar_term, compute_lunar_date_with_epoch,
    compute_sunrise_sunset, kou_from_longitude, kou_from_month_day, moon_illumination,
};
use koyomi_rs::{
    CalendarSnapshot, DayCondition, GeoLocation, JstTime, KouInfo, SnapshotConfig,
    SolarLongitudeModel, SunTimes, compute_snapshot,
};
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, SchemeArg};

#[derive(Parser)]
#[command(name = "koyomi", about = "Japanese seasonal calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full calendar snapshot for an instant
    Snapshot {
        /// Timestamp (RFC 3339, or YYYY-MM-DD[Thh:mm[:ss]] in Tokyo time); default now
        #[arg(long)]
        date: Option<String>,
        /// Observer latitude in degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Observer longitude in degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Micro-season anchor table
        #[arg(long, value_enum)]
        kou_scheme: Option<SchemeArg>,
        /// Use geometric instead of apparent solar longitude
        #[arg(long)]
        geometric: bool,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solar term from ecliptic longitude
    Sekki {
        /// Apparent solar longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Micro-season from ecliptic longitude
    Kou {
        /// Apparent solar longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Micro-season from the fixed calendar table
    KouDate {
        /// Month (1-12)
        month: u32,
        /// Day of month (1-31)
        day: u32,
    },
    /// Lunar date, moon age and 六曜
    Lunar {
        /// Timestamp; default now
        #[arg(long)]
        date: Option<String>,
        /// TOML configuration file (for a custom epoch)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Moon phase label for a moon age
    MoonPhase {
        /// Days since new moon
        age: f64,
    },
    /// Sunrise and sunset for a date
    SunTimes {
        /// Date (YYYY-MM-DD); default today
        #[arg(long)]
        date: Option<String>,
        /// Observer latitude in degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Observer longitude in degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Observer altitude in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_time(date: Option<&str>) -> JstTime {
    match date {
        None => JstTime::now(),
        Some(s) => s.parse().unwrap_or_else(|e| {
            eprintln!("Invalid date '{s}': {e}");
            std::process::exit(1);
        }),
    }
}

fn load_config(path: Option<&PathBuf>) -> SnapshotConfig {
    let Some(path) = path else {
        return SnapshotConfig::default();
    };
    FileConfig::load(path)
        .and_then(|f| f.to_snapshot_config())
        .unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", path.display());
            std::process::exit(1);
        })
}

fn require_location(lat: f64, lon: f64, alt: f64) -> GeoLocation {
    GeoLocation::try_new(lat, lon, alt).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// Reject NaN and infinite longitudes before they reach a classifier.
fn check_longitude(lon: f64) -> Result<f64, String> {
    if lon.is_finite() {
        Ok(lon)
    } else {
        Err(format!("Longitude must be a finite number of degrees, got {lon}"))
    }
}

fn require_longitude(lon: f64) -> f64 {
    check_longitude(lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_kou(info: &KouInfo) {
    println!(
        "{} ({}) - {} {} (index {})",
        info.kou.name,
        info.kou.reading,
        info.sekki.name(),
        info.phase.name(),
        info.index
    );
    println!("  {}", info.kou.description);
}

fn print_sun_times(t: &SunTimes) {
    match t.condition {
        DayCondition::Normal => println!(
            "Sunrise {}  Sunset {}  (day length {:.2} h)",
            t.sunrise, t.sunset, t.day_length_hours
        ),
        DayCondition::PolarDay => println!("Polar day: the Sun does not set"),
        DayCondition::PolarNight => println!("Polar night: the Sun does not rise"),
    }
    println!(
        "Solar noon {}  declination {:.3} deg  equation of time {:+.2} min",
        t.solar_noon, t.declination_deg, t.equation_of_time_min
    );
}

fn print_snapshot(s: &CalendarSnapshot) {
    let term = &s.solar_term;
    let lunar = &s.lunar_date;
    println!("{}", s.timestamp);
    println!("JD {:.5}  solar longitude {:.4} deg", s.julian_day, s.solar_longitude_deg);
    println!(
        "節気 {} ({}) - {:.2} deg in, next in ~{:.1} days",
        term.sekki.name(),
        term.sekki.english_name(),
        term.degrees_into,
        term.approx_days_until_next()
    );
    print!("七十二候 ");
    print_kou(&s.micro_season);
    println!(
        "旧暦 {}年{}月{}日 ({})  {}",
        lunar.year,
        lunar.month,
        lunar.day,
        lunar.month_name,
        s.rokuyo.name()
    );
    println!(
        "月齢 {:.1}  {} ({:.0}% lit)",
        lunar.moon_age,
        lunar.phase.name(),
        s.moon_illumination * 100.0
    );
    print_sun_times(&s.sun_times);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot {
            date,
            lat,
            lon,
            kou_scheme,
            geometric,
            config,
            json,
        } => {
            let time = parse_time(date.as_deref());
            let mut cfg = load_config(config.as_ref());
            if let (Some(lat), Some(lon)) = (lat, lon) {
                cfg.location = require_location(lat, lon, cfg.location.altitude_m);
            }
            if let Some(scheme) = kou_scheme {
                cfg.kou_scheme = scheme.into();
            }
            if geometric {
                cfg.longitude_model = SolarLongitudeModel::Geometric;
            }
            tracing::info!(timestamp = %time, "computing snapshot");

            let snap = compute_snapshot(&time, &cfg);
            if json {
                match serde_json::to_string_pretty(&snap.to_record()) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Failed to serialize snapshot: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_snapshot(&snap);
            }
        }

        Commands::Sekki { lon } => {
            let info = classify_solar_term(require_longitude(lon));
            println!(
                "{} ({}, {}) - index {}, {:.4} deg in, {:.4} deg to {}",
                info.sekki.name(),
                info.sekki.reading(),
                info.sekki.english_name(),
                info.index,
                info.degrees_into,
                info.degrees_to_next,
                info.sekki.next().name()
            );
            println!("  {}", info.sekki.description());
        }

        Commands::Kou { lon } => print_kou(&kou_from_longitude(require_longitude(lon))),

        Commands::KouDate { month, day } => {
            if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                eprintln!("Invalid month/day: {month}/{day}");
                std::process::exit(1);
            }
            print_kou(&kou_from_month_day(month, day));
        }

        Commands::Lunar { date, config } => {
            let time = parse_time(date.as_deref());
            let cfg = load_config(config.as_ref());
            let d = compute_lunar_date_with_epoch(&time, &cfg.epoch);
            println!(
                "{}年{}月{}日 ({}) {}",
                d.year,
                d.month,
                d.day,
                d.month_name,
                d.rokuyo().name()
            );
            println!(
                "Moon age {:.2} days - {} ({:.0}% lit)",
                d.moon_age,
                d.phase.name(),
                d.illumination() * 100.0
            );
        }

        Commands::MoonPhase { age } => {
            if !age.is_finite() || age < 0.0 {
                eprintln!("Moon age must be a non-negative number of days");
                std::process::exit(1);
            }
            let phase = classify_moon_phase(age);
            println!(
                "{} ({}) - {:.0}% lit",
                phase.name(),
                phase.english_name(),
                moon_illumination(age) * 100.0
            );
            println!("  {}", phase.appearance());
        }

        Commands::SunTimes {
            date,
            lat,
            lon,
            alt,
            config,
        } => {
            let time = parse_time(date.as_deref());
            let cfg = load_config(config.as_ref());
            let location = match (lat, lon) {
                (Some(lat), Some(lon)) => require_location(lat, lon, alt),
                _ => cfg.location,
            };
            let times = compute_sunrise_sunset(time.date_naive(), &location, &cfg.rise_set);
            println!(
                "{} at {:.4}, {:.4}",
                time.date_naive(),
                location.latitude_deg,
                location.longitude_deg
            );
            print_sun_times(&times);
        }
    }
}
