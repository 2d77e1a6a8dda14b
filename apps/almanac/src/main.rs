use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use selene::daily::{moon_phase_in, planet_positions, DailyPlanetPosition, MoonPhaseOfDay};
use selene::store::{cached_color_energy, CachePolicy, DailyCache, MemoryStore};
use selene::western::resolve_sun_sign;
use selene::{calculate_horoscope, BirthRecord, Element, Locale};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "almanac", author, version, about = "Natal signs and the sky of the day")]
struct Cli {
    /// Label language ("tr" or "en"). Overrides display.locale from configs/selene.toml.
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sun, moon and rising sign with element for a birth record
    Natal {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Birth time, "HH:MM" or an ISO timestamp
        #[arg(long)]
        time: Option<String>,
        /// Birth place; takes precedence over --city/--country
        #[arg(long)]
        place: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Planet signs, moon phase and colour energy for a day
    Today {
        /// Defaults to the local date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Sun sign for a month and day
    Sign {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::from_code(s).ok_or_else(|| format!("unsupported locale '{s}' (expected tr or en)"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodayReport {
    date: NaiveDate,
    planets: Vec<DailyPlanetPosition>,
    moon_phase: MoonPhaseOfDay,
    color_energy: selene::daily::ColorEnergyOfDay,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_natal(record: &BirthRecord, locale: Locale, json: bool) -> anyhow::Result<()> {
    let result = calculate_horoscope(record).context("Could not derive signs")?;
    if json {
        return print_json(&result);
    }

    let labels = result.describe(locale);
    let unknown = match locale {
        Locale::Turkish => "bilinmiyor",
        Locale::English => "unknown",
    };
    println!("Sun:       {}", labels.sun_sign);
    println!("Moon:      {}", labels.moon_sign);
    println!("Ascendant: {}", labels.ascendant_sign.unwrap_or(unknown));
    println!("Element:   {}", labels.element_group);
    Ok(())
}

async fn run_today(date: NaiveDate, locale: Locale, json: bool) -> anyhow::Result<()> {
    let cache = DailyCache::new(MemoryStore::new(), CachePolicy::Daily);
    let report = TodayReport {
        date,
        planets: planet_positions(&date),
        moon_phase: moon_phase_in(&date, locale),
        color_energy: cached_color_energy(&cache, date, locale).await?,
    };
    if json {
        return print_json(&report);
    }

    println!("{}", report.moon_phase.formatted_date);
    for p in &report.planets {
        println!("  {:<8} {:<10} {:>7.2}°", p.planet.label(locale), p.sign.label(locale), p.longitude);
    }
    println!("{}: {}", report.moon_phase.phase_name, report.moon_phase.description);
    println!(
        "{} ({}): {}",
        report.color_energy.name, report.color_energy.color, report.color_energy.energy
    );
    for tip in &report.color_energy.mood_tips {
        println!("  - {tip}");
    }
    Ok(())
}

fn run_sign(month: u32, day: u32, locale: Locale, json: bool) -> anyhow::Result<()> {
    let sign = resolve_sun_sign(month, day)?;
    let element = Element::of(sign);
    if json {
        return print_json(&serde_json::json!({ "sunSign": sign, "elementGroup": element }));
    }
    println!("{} ({})", sign.label(locale), element.label(locale));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = selene_config::load_settings_or_default();
    let locale = cli.locale.unwrap_or(settings.locale);
    log::debug!("locale={} json={}", locale.code(), cli.json);

    match cli.command {
        Commands::Natal {
            date,
            time,
            place,
            city,
            country,
        } => {
            let record = BirthRecord {
                birth_date: Some(date),
                birth_time: time.map(Into::into),
                birth_place: place,
                city,
                country,
            };
            run_natal(&record, locale, cli.json)
        }
        Commands::Today { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            run_today(date, locale, cli.json).await
        }
        Commands::Sign { month, day } => run_sign(month, day, locale, cli.json),
    }
}
