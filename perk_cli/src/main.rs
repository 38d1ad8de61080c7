use clap::{Parser, Subcommand};
use perk_core::schedule::parse_generator_response;
use perk_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "perk")]
#[command(about = "Daily caffeine limit and intake planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the daily limit, schedule and beer limit for a profile
    Calc(CalcArgs),

    /// Print the request text for the schedule generator
    Prompt {
        /// Daily caffeine budget in mg
        #[arg(long)]
        max_mg: u32,

        /// Activity level (sedentary, moderate, active, very_active)
        #[arg(long)]
        activity: Option<ActivityLevel>,
    },

    /// Show the config file location
    Config {
        /// Write a config file with default values if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(clap::Args)]
struct CalcArgs {
    /// Age in years
    #[arg(long)]
    age: String,

    /// Body weight (kg, or lb with --units imperial)
    #[arg(long)]
    weight: String,

    /// Height (cm, or inches with --units imperial)
    #[arg(long)]
    height: String,

    /// Blood pressure as systolic/diastolic, e.g. 120/80
    #[arg(long, required_unless_present = "unknown_bp")]
    bp: Option<String>,

    /// Estimate blood pressure instead of using --bp
    #[arg(long, conflicts_with = "bp")]
    unknown_bp: bool,

    /// Resting heart rate in bpm
    #[arg(long, required_unless_present = "unknown_hr")]
    hr: Option<String>,

    /// Estimate resting heart rate instead of using --hr
    #[arg(long, conflicts_with = "hr")]
    unknown_hr: bool,

    /// male or female
    #[arg(long)]
    sex: Option<Sex>,

    /// sedentary, moderate, active or very_active
    #[arg(long)]
    activity: Option<ActivityLevel>,

    /// low, moderate or high
    #[arg(long)]
    tolerance: Option<Tolerance>,

    /// metric or imperial
    #[arg(long)]
    units: Option<UnitSystem>,

    /// Shorthand for --units imperial (pounds and inches)
    #[arg(long, conflicts_with = "units")]
    imperial: bool,

    /// Schedule generator response (JSON array or message envelope)
    #[arg(long)]
    schedule_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The configured level is not known yet
    let config = perk_core::logging::with_bootstrap(|| load_config(cli.config.as_deref()))?;
    perk_core::logging::init_with_level(&config.logging.level);

    match cli.command {
        Commands::Calc(args) => cmd_calc(args, &config),
        Commands::Prompt { max_mg, activity } => {
            let request = ScheduleRequest {
                total_mg: max_mg,
                activity_level: activity.unwrap_or(config.defaults.activity_level),
            };
            println!("{}", request.prompt());
            Ok(())
        }
        Commands::Config { init } => cmd_config(cli.config, init, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) if p.exists() => Config::load_from(p),
        Some(p) => {
            tracing::debug!("Config {:?} does not exist, using defaults", p);
            Ok(Config::default())
        }
        None => Config::load(),
    }
}

fn cmd_calc(args: CalcArgs, config: &Config) -> Result<()> {
    let defaults = &config.defaults;
    let form = ProfileForm {
        age: args.age,
        weight: args.weight,
        height: args.height,
        blood_pressure: args.bp.unwrap_or_default(),
        bpm: args.hr.unwrap_or_default(),
        sex: args.sex.unwrap_or(defaults.sex),
        activity_level: args.activity.unwrap_or(defaults.activity_level),
        tolerance: args.tolerance.unwrap_or(defaults.tolerance),
        unknown_bp: args.unknown_bp,
        unknown_hr: args.unknown_hr,
        unit_system: if args.imperial {
            UnitSystem::Imperial
        } else {
            args.units.unwrap_or(defaults.unit_system)
        },
    };

    // Reject the whole calculation before anything is derived
    let profile = form.parse()?;

    let schedule_outcome = match &args.schedule_file {
        Some(path) => read_schedule_file(path),
        None => Err(Error::UpstreamUnavailable(
            "no schedule generator response supplied".into(),
        )),
    };

    let report = build_report(&profile, schedule_outcome)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }
    Ok(())
}

fn read_schedule_file(path: &Path) -> Result<Vec<RawScheduleEntry>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::UpstreamUnavailable(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_generator_response(&text)
}

fn cmd_config(path: Option<PathBuf>, init: bool, config: &Config) -> Result<()> {
    let path = path.unwrap_or_else(Config::default_config_path);

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
        } else {
            config.save_to(&path)?;
            println!("✓ Wrote default config to {}", path.display());
        }
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

fn display_report(report: &Report) {
    let dosage = &report.dosage;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY CAFFEINE LIMIT: {} mg", dosage.max_daily_mg);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  ☕ {} cups of coffee", dosage.unit_counts.coffee_cups);
    println!("  ⚡ {} energy drinks", dosage.unit_counts.energy_drinks);
    println!("  💊 {} caffeine pills", dosage.unit_counts.pills);

    if let Some(bp) = dosage.estimated_bp() {
        println!("  → Estimated blood pressure: {}", bp);
    }
    if let Some(hr) = dosage.estimated_hr() {
        println!("  → Estimated resting heart rate: {} bpm", hr);
    }

    println!();
    match report.schedule_source {
        ScheduleSource::Generated => println!("  Schedule:"),
        ScheduleSource::Fallback => println!("  Schedule (default):"),
    }
    for slot in &report.schedule {
        println!(
            "  {:>9}  {:>6} mg  {}  ({})",
            slot.entry.time,
            slot.entry.amount_mg,
            slot.suggestion.label(),
            slot.entry.reason
        );
        if !slot.suggestion.alternatives.is_empty() {
            println!("             or {}", slot.suggestion.alternatives.join(", "));
        }
    }

    println!();
    println!(
        "  🍺 Beers before productivity drops: {} (standard 341 ml, 5% ABV)",
        report.beer_limit
    );
    println!();
}
