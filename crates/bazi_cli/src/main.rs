use std::path::PathBuf;

use bazi_base::{
    ALL_ELEMENTS, ALL_POSITIONS, CYCLE_ANCHOR_YEAR, Chart, Gender, Locale, LuckCycle, Pillar,
    Strength, Timeline, TimelineConfig, annual_pillar, classify_strength, compute_luck_cycle,
    count_elements, pattern_analysis, strength_balance, synthesize_timeline_with,
};
use bazi_rs::{BirthInput, FallbackReport, ReportConfig, ReportError, fallback_report};
use bazi_time::HourBlock;
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi (Four Pillars) chart and timeline CLI")]
struct Cli {
    /// TOML report configuration (locale, reference_year)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output language, overrides the config file: zh or en
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Birth {
    /// Birth date (YYYY-MM-DD, proleptic Gregorian)
    date: String,
    /// Two-hour block index 0-11 (0 = 23:00-00:59)
    #[arg(long, conflicts_with = "clock_hour")]
    hour: Option<u8>,
    /// Clock hour 0-23, mapped to its two-hour block
    #[arg(long)]
    clock_hour: Option<u32>,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth
    Chart(Birth),
    /// Element tally and day-master strength
    Strength(Birth),
    /// Structural pattern from the month branch
    Pattern(Birth),
    /// Ten-year luck pillars
    Luck(Birth),
    /// 80-year fortune timeline
    Timeline {
        #[command(flatten)]
        birth: Birth,
        /// First age to print
        #[arg(long, default_value = "1")]
        from_age: u32,
        /// Last age to print
        #[arg(long, default_value = "80")]
        to_age: u32,
    },
    /// Full report (chart, luck, timeline, readings)
    Report {
        #[command(flatten)]
        birth: Birth,
        /// Display name carried into the report
        #[arg(long)]
        name: Option<String>,
    },
    /// Sexagenary cycle lookup by index or Gregorian year
    Cycle {
        /// Cycle index (any integer, taken mod 60)
        #[arg(long, conflicts_with = "year", required_unless_present = "year")]
        index: Option<i64>,
        /// Gregorian year
        #[arg(long)]
        year: Option<i32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref(), cli.locale);

    match cli.command {
        Commands::Chart(birth) => {
            let (input, chart) = require_chart(&birth);
            info!(chart = %chart, "chart computed");
            if birth.json {
                print_json(&json!({
                    "input": input,
                    "chart": chart,
                    "dayMaster": chart.day_master(),
                }));
                return;
            }
            print_chart(&chart);
        }

        Commands::Strength(birth) => {
            let (_, chart) = require_chart(&birth);
            let counts = count_elements(&chart);
            let day = chart.day_master().element();
            let balance = strength_balance(&counts, day);
            if birth.json {
                print_json(&json!({
                    "chart": chart,
                    "counts": counts,
                    "support": balance.support(),
                    "drain": balance.drain(),
                    "strength": balance.strength(),
                    "missing": counts.missing(),
                }));
                return;
            }
            println!("Chart: {chart}");
            println!("Day master: {} ({})", chart.day_master().symbol(), day.name());
            println!("Element  Visible  Hidden  Weighted");
            for e in ALL_ELEMENTS {
                println!(
                    "{} {:<6} {:>5} {:>7} {:>9.1}",
                    e.symbol(),
                    e.name(),
                    counts.visible(e),
                    counts.hidden(e),
                    counts.weighted(e)
                );
            }
            println!("Support: {:.2}  Drain: {:.2}", balance.support(), balance.drain());
            let strength = balance.strength();
            println!("Strength: {} ({})", strength.chinese_name(), strength.name());
            let missing = counts.missing();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|e| e.name()).collect();
                println!("Missing: {}", names.join(", "));
            }
        }

        Commands::Pattern(birth) => {
            let (_, chart) = require_chart(&birth);
            let analysis = pattern_analysis(&chart);
            if birth.json {
                print_json(&json!({
                    "chart": chart,
                    "analysis": analysis,
                    "description": analysis.pattern.description(config.locale),
                }));
                return;
            }
            println!("Chart: {chart}");
            println!(
                "Month main stem: {} ({})",
                analysis.month_stem.symbol(),
                analysis.relation.chinese_name()
            );
            println!(
                "Pattern: {} ({})",
                analysis.pattern.chinese_name(),
                analysis.pattern.name()
            );
            if analysis.fallback {
                println!(
                    "  {} has no pattern of its own; default applied",
                    analysis.relation.name()
                );
            }
            println!("{}", analysis.pattern.description(config.locale));
        }

        Commands::Luck(birth) => {
            let (input, chart) = require_chart(&birth);
            let cycle = compute_luck_cycle(&chart, input.gender, input.year);
            let reference_year = reference_year(&config);
            if birth.json {
                print_json(&json!({
                    "cycle": cycle,
                    "current": cycle.current(input.year, reference_year),
                }));
                return;
            }
            print_luck(&cycle, input.year, reference_year);
        }

        Commands::Timeline {
            birth,
            from_age,
            to_age,
        } => {
            let (input, chart) = require_chart(&birth);
            let timeline = require_timeline(&input, &chart, &config);
            let points: Vec<_> = timeline
                .points
                .iter()
                .filter(|p| (from_age..=to_age).contains(&p.age))
                .collect();
            info!(points = points.len(), "timeline selected");
            if birth.json {
                print_json(&json!({
                    "points": points,
                    "averages": timeline.average_scores(),
                }));
                return;
            }
            println!("Age  Year  Luck  Year  Total Wlth Carr Marr Fmly Hlth");
            for p in &points {
                let s = p.scores;
                println!(
                    "{:>3}  {}  {:<4}  {}  {:>5} {:>4} {:>4} {:>4} {:>4} {:>4}  {}",
                    p.age,
                    p.year,
                    p.luck.text(config.locale),
                    p.annual,
                    s.total,
                    s.wealth,
                    s.career,
                    s.marriage,
                    s.family,
                    s.health,
                    p.narrative
                );
            }
            if let Some(avg) = timeline.average_scores() {
                println!(
                    "Averages: total {} wealth {} career {} marriage {} family {} health {}",
                    avg.total, avg.wealth, avg.career, avg.marriage, avg.family, avg.health
                );
            }
        }

        Commands::Report { birth, name } => {
            let input = require_input(&birth);
            let config = config.with_reference_year(reference_year(&config));
            let report = build_report(input, name, &config).unwrap_or_else(|e| {
                eprintln!("Failed to build report: {e}");
                std::process::exit(1);
            });
            info!(summary = report.summary_score, "report assembled");
            if birth.json {
                print_json(&report);
                return;
            }
            if let Some(name) = &report.name {
                println!("Name: {name}");
            }
            println!("BaZi: {}", report.bazi.join(" "));
            println!("Day master: {}  Strength: {}", report.day_master, report.strength);
            println!("Pattern: {}", report.pattern_type);
            println!("  {}", report.pattern_description);
            println!(
                "Luck: {}, from age {}",
                report.dayun.direction, report.dayun.start_age
            );
            for e in &report.dayun.list {
                println!(
                    "  {} {:>2}-{:<2} ({}-{})  avg {:>2} {:?}{}",
                    e.ganzhi,
                    e.start_age,
                    e.end_age,
                    e.start_year,
                    e.end_year,
                    e.average_score,
                    e.tier,
                    if e.current { "  <- current" } else { "" }
                );
            }
            println!("Summary score: {}", report.summary_score);
            println!("Career: {}", report.industry_analysis);
            println!("Wealth: {}", report.wealth_analysis);
            println!("Marriage: {}", report.marriage_analysis);
            println!("Health: {}", report.health_analysis);
            let s = &report.suggestions;
            println!(
                "Favourable: {} / {} / {} / {}",
                s.favorable_directions.join(" "),
                s.favorable_colors.join(" "),
                s.favorable_numbers.join(" "),
                s.noble_people.join(" ")
            );
        }

        Commands::Cycle { index, year, json } => {
            let pillar = match (index, year) {
                (Some(i), _) => Pillar::from_cycle_index(i),
                (None, Some(y)) => annual_pillar(y),
                (None, None) => {
                    eprintln!("Provide --index or --year");
                    std::process::exit(1);
                }
            };
            if json {
                print_json(&json!({
                    "pillar": pillar,
                    "index": pillar.cycle_index(),
                    "stem": pillar.stem(),
                    "branch": pillar.branch(),
                }));
                return;
            }
            let stem = pillar.stem();
            let branch = pillar.branch();
            println!("{pillar} (index {})", pillar.cycle_index());
            println!(
                "  Stem:   {} {} ({})",
                stem.symbol(),
                stem.name(),
                stem.english_name()
            );
            println!(
                "  Branch: {} {} ({}, {})",
                branch.symbol(),
                branch.name(),
                branch.zodiac(),
                branch.element().name()
            );
            if let Some(y) = year {
                let offset = (y - CYCLE_ANCHOR_YEAR).rem_euclid(60);
                println!("  {} years after the {} 甲子 year", offset, y - offset);
            }
        }
    }
}

// ── Helpers ──

fn parse_locale(s: &str) -> Result<Locale, String> {
    match s.to_ascii_lowercase().as_str() {
        "zh" => Ok(Locale::Zh),
        "en" => Ok(Locale::En),
        _ => Err(format!("unknown locale: {s} (use zh or en)")),
    }
}

fn load_config(path: Option<&PathBuf>, locale: Option<Locale>) -> ReportConfig {
    let mut config = match path {
        Some(path) => ReportConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => ReportConfig::default(),
    };
    if let Some(locale) = locale {
        config.locale = locale;
    }
    config
}

/// Configured reference year, or the current local year.
fn reference_year(config: &ReportConfig) -> i32 {
    config
        .reference_year
        .unwrap_or_else(|| chrono::Local::now().year())
}

fn require_input(birth: &Birth) -> BirthInput {
    let hour_index = match (birth.hour, birth.clock_hour) {
        (Some(h), _) => h,
        (None, Some(clock)) => match HourBlock::from_clock_hour(clock) {
            Ok(block) => block.index(),
            Err(e) => {
                eprintln!("Invalid clock hour: {e}");
                std::process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Provide --hour <0-11> or --clock-hour <0-23>");
            std::process::exit(1);
        }
    };
    BirthInput::from_date_str(&birth.date, hour_index, birth.gender).unwrap_or_else(|e| {
        eprintln!("Invalid birth date {}: {e}", birth.date);
        std::process::exit(1);
    })
}

/// Local report for the input, with the display name attached.
fn build_report(
    input: BirthInput,
    name: Option<String>,
    config: &ReportConfig,
) -> Result<FallbackReport, ReportError> {
    let input = match name {
        Some(name) => input.with_name(name),
        None => input,
    };
    fallback_report(&input, config)
}

fn require_chart(birth: &Birth) -> (BirthInput, Chart) {
    let input = require_input(birth);
    let moment = input.moment().unwrap_or_else(|e| {
        eprintln!("Invalid birth input: {e}");
        std::process::exit(1);
    });
    let chart = bazi_base::chart_for(&moment);
    (input, chart)
}

fn require_timeline(input: &BirthInput, chart: &Chart, config: &ReportConfig) -> Timeline {
    let strength: Strength = classify_strength(chart);
    let cycle = compute_luck_cycle(chart, input.gender, input.year);
    synthesize_timeline_with(
        chart,
        input.year,
        &cycle,
        strength,
        &TimelineConfig {
            locale: config.locale,
        },
    )
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(chart: &Chart) {
    for pos in ALL_POSITIONS {
        let p = chart.pillar(pos);
        let hidden: String = p.branch().hidden_stems().iter().map(|s| s.symbol()).collect();
        println!(
            "{:<5} {}  {}/{}  hidden {}",
            pos.name(),
            p,
            p.stem().element().name(),
            p.branch().element().name(),
            hidden
        );
    }
    let dm = chart.day_master();
    println!("Day master: {} ({})", dm.symbol(), dm.english_name());
    println!("Zodiac: {}", chart.year.branch().zodiac());
}

fn print_luck(cycle: &LuckCycle, birth_year: i32, reference_year: i32) {
    println!(
        "Direction: {} ({}), onset age {}",
        cycle.direction.chinese_name(),
        cycle.direction.name(),
        cycle.onset_age
    );
    let current = cycle.current(birth_year, reference_year).map(|lp| lp.order);
    for lp in &cycle.pillars {
        println!(
            "{}. {}  ages {:>2}-{:<2}  years {}-{}{}",
            lp.order,
            lp.pillar,
            lp.start_age,
            lp.end_age,
            lp.start_year,
            lp.end_year,
            if current == Some(lp.order) {
                "  <- current"
            } else {
                ""
            }
        );
    }
}
