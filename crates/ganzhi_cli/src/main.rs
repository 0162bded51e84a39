mod input;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use ganzhi_calendar::{
    ALL_ELEMENTS, ChartSource, DelegatePayload, MonthStemRule, compute_chart_with,
    day_cycle_index, day_pillar, julian_day_number, parse_delegate_json,
};
use ganzhi_energy::{Analysis, RolePolicy, WeightPolicy, analyze_moment};
use tracing_subscriber::EnvFilter;

use crate::input::{Settings, parse_moment};

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four-pillar chart and five-element analysis")]
struct Cli {
    /// TOML file with [chart] and [analysis] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth date and time
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// Month-stem rule
        #[arg(long)]
        month_rule: Option<MonthRuleArg>,
    },
    /// Element distribution, roles and daily curve
    Analyze {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// Branch weighting policy
        #[arg(long)]
        weight: Option<WeightArg>,
        /// Role classification policy
        #[arg(long)]
        roles: Option<RoleArg>,
        /// JSON body from an external calendar service
        #[arg(long)]
        delegate: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Day pillar and Julian Day Number for a date
    Day {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MonthRuleArg {
    BranchOffset,
    CalendarMonth,
}

impl From<MonthRuleArg> for MonthStemRule {
    fn from(a: MonthRuleArg) -> Self {
        match a {
            MonthRuleArg::BranchOffset => Self::BranchOffset,
            MonthRuleArg::CalendarMonth => Self::CalendarMonth,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WeightArg {
    Uniform,
    Positional,
}

impl From<WeightArg> for WeightPolicy {
    fn from(a: WeightArg) -> Self {
        match a {
            WeightArg::Uniform => Self::Uniform,
            WeightArg::Positional => Self::Positional,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Simple,
    DayMasterAware,
}

impl From<RoleArg> for RolePolicy {
    fn from(a: RoleArg) -> Self {
        match a {
            RoleArg::Simple => Self::Simple,
            RoleArg::DayMasterAware => Self::DayMasterAware,
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_delegate(path: &Path) -> Option<DelegatePayload> {
    let body = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read {}: {e}", path.display())));
    match parse_delegate_json(&body) {
        Ok(p) => Some(p),
        Err(e) => {
            // Treated as if the service had not answered.
            tracing::warn!(error = %e, "ignoring delegate body");
            None
        }
    }
}

fn print_analysis(source: ChartSource, a: &Analysis) {
    let chart = &a.chart;
    println!("Birth:  {}", chart.moment());
    println!("Source: {source:?}");
    for (pos, p) in chart.pillars() {
        println!(
            "{:<6} {}  ({} {}, {} / {})",
            pos.name(),
            p,
            p.stem.pinyin(),
            p.branch.pinyin(),
            p.stem.element(),
            p.branch.short_code()
        );
    }
    println!();
    println!("Day master: {} ({}, {})", chart.day_master(), a.day_element, a.day_status.name());
    for e in ALL_ELEMENTS {
        println!(
            "  {:<6} {:>5.1}%  (weight {:.3})",
            e.name(),
            a.percentages.get(e),
            a.counts.get(e)
        );
    }
    if let Some(d) = a.dominant {
        println!("Dominant:   {d}");
    }
    println!("Useful:     {}", a.roles.useful);
    println!("Supporting: {}", a.roles.supporting);
    println!("Critical:   {}", a.roles.critical);
    println!("Threat:     {}", a.roles.threat);
    let curve: Vec<String> = a.timeline.values().iter().map(|v| v.to_string()).collect();
    println!("Timeline:   {}", curve.join(" "));
    for w in &a.warnings {
        println!("Warning:    {w}");
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path).unwrap_or_else(|e| fail(e)),
        None => Settings::default(),
    };

    match cli.command {
        Commands::Chart {
            date,
            time,
            month_rule,
        } => {
            if let Some(rule) = month_rule {
                settings.chart.month_rule = rule.into();
            }
            let moment = parse_moment(&date, &time).unwrap_or_else(|e| fail(e));
            let chart = compute_chart_with(moment, &settings.chart);
            println!("{chart}");
            for (pos, p) in chart.pillars() {
                println!(
                    "{:<6} {}  {} {}  [{} / {}]",
                    pos.name(),
                    p,
                    p.stem.pinyin(),
                    p.branch.pinyin(),
                    p.stem.element(),
                    p.branch.element()
                );
            }
            println!("Year animal: {}", chart.year().branch.animal());
        }

        Commands::Analyze {
            date,
            time,
            weight,
            roles,
            delegate,
            json,
        } => {
            if let Some(w) = weight {
                settings.analysis.weight_policy = w.into();
            }
            if let Some(r) = roles {
                settings.analysis.role_policy = r.into();
            }
            let moment = parse_moment(&date, &time).unwrap_or_else(|e| fail(e));
            let payload = delegate.as_deref().and_then(load_delegate);
            let (source, analysis) =
                analyze_moment(moment, payload.as_ref(), &settings.chart, &settings.analysis)
                    .unwrap_or_else(|e| fail(e));
            if json {
                let out = serde_json::json!({ "source": source, "analysis": analysis });
                match serde_json::to_string_pretty(&out) {
                    Ok(s) => println!("{s}"),
                    Err(e) => fail(e),
                }
            } else {
                print_analysis(source, &analysis);
            }
        }

        Commands::Day { date } => {
            let moment = parse_moment(&date, "00:00").unwrap_or_else(|e| fail(e));
            let (y, m, d) = (moment.year, moment.month, moment.day);
            let p = day_pillar(y, m, d);
            println!(
                "{} ({} {}) - JDN {}, cycle position {}",
                p,
                p.stem.pinyin(),
                p.branch.pinyin(),
                julian_day_number(y, m, d),
                day_cycle_index(y, m, d) + 1
            );
        }
    }
}
