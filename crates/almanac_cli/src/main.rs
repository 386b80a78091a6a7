use std::fmt::Display;

use almanac_events::{IslamicDate, easter, pesach};
use almanac_frames::{mean_obliquity_deg, nutation, true_obliquity_deg};
use almanac_search::{
    ALL_SEASONS, ExactEquinoxConfig, MoonPhase, Season, approximate_equinox, exact_equinox,
    find_phase, mean_equinox,
};
use almanac_time::{CalendarDate, JulianDay, mean_sidereal_time, sidereal_time_at};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

#[derive(Parser)]
#[command(name = "almanac", about = "Calendar and almanac calculations")]
struct Cli {
    /// Log intermediate values (overridden by ALMANAC_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a calendar date
    Jd {
        /// YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[.sss]; negative years allowed
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Calendar date of a Julian Day
    Date {
        /// Julian Day
        #[arg(allow_hyphen_values = true)]
        jd: f64,
    },
    /// Equinoxes and solstices of a year
    Equinox {
        #[arg(allow_hyphen_values = true)]
        year: i32,
        /// One season only
        #[arg(long, value_enum)]
        season: Option<SeasonArg>,
        /// Iterate on the apparent solar longitude instead of the periodic terms
        #[arg(long)]
        exact: bool,
    },
    /// Lunar phase nearest a date
    Phase {
        /// YYYY-MM-DD
        #[arg(allow_hyphen_values = true)]
        date: String,
        #[arg(long, value_enum, default_value = "full")]
        phase: PhaseArg,
    },
    /// Nutation and obliquity of the ecliptic
    Nutation {
        /// Julian Ephemeris Day
        #[arg(long)]
        jd: f64,
    },
    /// Easter Sunday of a year
    Easter {
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// First day of Pesach of a year
    Pesach {
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Islamic calendar date of a calendar date
    Islamic {
        /// YYYY-MM-DD
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Mean sidereal time at Greenwich
    Sidereal {
        /// YYYY-MM-DDThh:mm:ss UT
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeasonArg {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(s: SeasonArg) -> Self {
        match s {
            SeasonArg::Spring => Season::Spring,
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Autumn => Season::Autumn,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PhaseArg {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl From<PhaseArg> for MoonPhase {
    fn from(p: PhaseArg) -> Self {
        match p {
            PhaseArg::New => MoonPhase::New,
            PhaseArg::FirstQuarter => MoonPhase::FirstQuarter,
            PhaseArg::Full => MoonPhase::Full,
            PhaseArg::LastQuarter => MoonPhase::LastQuarter,
        }
    }
}

fn init_tracing(verbose: bool) -> Result<(), String> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("ALMANAC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn parse_date(s: &str) -> Result<CalendarDate, String> {
    // "YYYY-MM-DD" or "YYYY-MM-DDThh:mm:ss[.sss]", year may carry a sign
    let (date, time) = match s.split_once('T') {
        Some((d, t)) => (d, Some(t.trim_end_matches('Z'))),
        None => (s, None),
    };
    let (sign, date) = match date.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, date),
    };
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("day: {e}"))?;

    let (mut hour, mut minute, mut second, mut milli) = (0, 0, 0, 0);
    if let Some(t) = time {
        let tp: Vec<&str> = t.split(':').collect();
        if tp.len() != 3 {
            return Err(format!("expected hh:mm:ss, got {t}"));
        }
        hour = tp[0].parse().map_err(|e| format!("hour: {e}"))?;
        minute = tp[1].parse().map_err(|e| format!("minute: {e}"))?;
        let (sec, frac) = tp[2].split_once('.').unwrap_or((tp[2], "0"));
        second = sec.parse().map_err(|e| format!("second: {e}"))?;
        let frac = format!("{frac:0<3}");
        milli = frac
            .get(..3)
            .ok_or_else(|| format!("bad fraction in {t}"))?
            .parse()
            .map_err(|e| format!("millisecond: {e}"))?;
    }
    let date = CalendarDate::new(sign * year, month, day, hour, minute, second, milli)
        .map_err(|e| e.to_string())?;
    debug!(input = s, %date, jd = date.to_julian_day().jd(), "parsed date");
    Ok(date)
}

fn print_equinox(year: i32, season: Season, exact: bool) {
    let jde = if exact {
        or_exit(exact_equinox(year, season, &ExactEquinoxConfig::default()))
    } else {
        approximate_equinox(year, season)
    };
    let mean = mean_equinox(year, season);
    println!(
        "{:<7} JDE {:.5}  {} TD  (mean {:.5})",
        season.name(),
        jde,
        JulianDay::from_jd(jde).to_calendar(),
        mean
    );
}

fn main() {
    let cli = Cli::parse();
    or_exit(init_tracing(cli.verbose));

    match cli.command {
        Commands::Jd { date } => {
            let date = or_exit(parse_date(&date));
            let jd = date.to_julian_day();
            println!("{jd}");
            println!("{} ({:?} calendar)", jd.day_of_week(), date.calendar());
        }

        Commands::Date { jd } => {
            let jd = JulianDay::from_jd(jd);
            let date = jd.to_calendar();
            println!("{date}");
            println!(
                "{} ({:?} calendar), day {} of the year",
                jd.day_of_week(),
                jd.calendar(),
                jd.day_of_year()
            );
        }

        Commands::Equinox {
            year,
            season,
            exact,
        } => match season {
            Some(s) => print_equinox(year, s.into(), exact),
            None => {
                for s in ALL_SEASONS {
                    print_equinox(year, s, exact);
                }
            }
        },

        Commands::Phase { date, phase } => {
            let date = or_exit(parse_date(&date));
            let phase: MoonPhase = phase.into();
            let jd = or_exit(find_phase(date.year(), date.month(), date.day(), phase));
            println!("{phase}: JDE {:.5}  {} TD", jd.jd(), jd.to_calendar());
        }

        Commands::Nutation { jd } => {
            let n = nutation(jd);
            println!("Δψ = {:+.3}\"", n.longitude_arcsec);
            println!("Δε = {:+.3}\"", n.obliquity_arcsec);
            println!("ε₀ = {:.6}°", mean_obliquity_deg(jd));
            println!("ε  = {:.6}°", true_obliquity_deg(jd));
        }

        Commands::Easter { year } => {
            let jd = or_exit(easter(year));
            println!("{} ({:?} calendar)", jd.to_calendar(), jd.calendar());
        }

        Commands::Pesach { year } => {
            let jd = or_exit(pesach(year));
            println!("{} ({})", jd.to_calendar(), jd.day_of_week());
        }

        Commands::Islamic { date } => {
            let date = or_exit(parse_date(&date));
            println!("{}", IslamicDate::from_julian_day(date.to_julian_day()));
        }

        Commands::Sidereal { date } => {
            let date = or_exit(parse_date(&date));
            let jd = date.to_julian_day();
            println!("GMST {}", sidereal_time_at(&date));
            println!("     {:.6}°", mean_sidereal_time(jd.jd()).as_degrees());
        }
    }
}
