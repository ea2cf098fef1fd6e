//! CycleCare command line entry point.
//!
//! # Responsibility
//! - Run the cycle predictor outside the mobile shell for local checks.
//! - Keep output deterministic when `--today` is given.

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use cyclecare_core::config::{CYCLES_AHEAD_ENV, MAX_CYCLES_AHEAD};
use cyclecare_core::{
    compute_marks, parse_calendar_date, summarize_cycle, CalendarConfig, CycleForm, MarkMap,
    PeriodRecord,
};
use serde_json::json;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "cyclecare", version, about = "Menstrual cycle prediction tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the core ping and version.
    Ping,
    /// Predict upcoming periods, ovulation and fertile windows.
    Predict(PredictArgs),
}

#[derive(Debug, clap::Args)]
struct PredictArgs {
    /// First day of the most recent period (YYYY-MM-DD).
    #[arg(long)]
    last_period: String,
    /// Cycle length in days.
    #[arg(long, default_value = "28")]
    cycle: String,
    /// Period length in days.
    #[arg(long, default_value = "5")]
    period: String,
    /// Tracking goal: general, pregnancy or contraception.
    #[arg(long, default_value = "")]
    goal: String,
    /// Cycles to predict; falls back to the environment, then 3.
    #[arg(
        long,
        env = CYCLES_AHEAD_ENV,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_CYCLES_AHEAD))
    )]
    ahead: Option<u32>,
    /// Reference date for status output (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    today: Option<String>,
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Ping => {
            println!("cyclecare_core ping={}", cyclecare_core::ping());
            println!("cyclecare_core version={}", cyclecare_core::core_version());
            Ok(())
        }
        Command::Predict(args) => run_predict(&args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_predict(args: &PredictArgs) -> Result<(), String> {
    let form = CycleForm {
        last_period_start: args.last_period.clone(),
        cycle_length_days: args.cycle.clone(),
        period_length_days: args.period.clone(),
        goal: args.goal.clone(),
    };
    let profile = form.into_profile().map_err(|err| err.to_string())?;
    let mut config = CalendarConfig::default();
    if let Some(ahead) = args.ahead {
        config.cycles_ahead = ahead;
    }
    let today = match args.today.as_deref() {
        Some(raw) => parse_calendar_date(raw).map_err(|err| err.to_string())?,
        None => Local::now().date_naive(),
    };

    let record = PeriodRecord::from_profile(&profile).map_err(|err| err.to_string())?;
    let marks = compute_marks(Some(&profile), &[record], config.cycles_ahead)
        .map_err(|err| err.to_string())?;
    let summary = summarize_cycle(&profile).map_err(|err| err.to_string())?;
    let status = summary.status(today);

    if args.json {
        let output = json!({
            "profile": profile,
            "today": today,
            "cycles_ahead": config.cycles_ahead,
            "summary": {
                "next_period": summary.next_period,
                "ovulation": summary.ovulation,
                "fertile_start": summary.fertile_start,
                "fertile_end": summary.fertile_end,
                "period_d_day": summary.period_countdown(today).d_day_label(),
            },
            "status": status,
            "marks": marks,
        });
        let text = serde_json::to_string_pretty(&output).map_err(|err| err.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!("goal:          {}", profile.goal.as_str());
    println!(
        "next period:   {} ({})",
        summary.next_period,
        summary.period_countdown(today).d_day_label()
    );
    println!(
        "ovulation:     {} ({})",
        summary.ovulation,
        summary.ovulation_countdown(today).d_day_label()
    );
    println!(
        "fertile:       {} .. {}",
        summary.fertile_start, summary.fertile_end
    );
    println!("status:        {status}");
    println!();
    print_marks(&marks);
    Ok(())
}

fn print_marks(marks: &MarkMap) {
    let mut current_month: Option<(i32, u32)> = None;
    for (date, mark) in marks {
        let month = month_of(*date);
        if current_month != Some(month) {
            println!("{}-{:02}", month.0, month.1);
            current_month = Some(month);
        }
        println!("  {date}  {}", mark.category.as_str());
    }
}

fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
