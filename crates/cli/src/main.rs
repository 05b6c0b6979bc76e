// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `bincal` - collection calendar and reminders in the terminal.
//!
//! ```text
//! bincal month --year 2024 --month 3
//! bincal upcoming --limit 10
//! bincal --database prefs.db alerts add --time 06:30 --category paper
//! bincal --database prefs.db watch
//! ```
//!
//! Without `--rules` the bundled Hirakata (Yabunishi-cho) table is used.
//! Without `--database` preferences live in memory and are lost on exit.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod console;
mod render;

use bincal_catalog::{BUILTIN_AREA_NAME, builtin_rules, load_rules_from_path};
use bincal_domain::{
    CollectionRule, DEFAULT_MAX_DAYS_SCANNED, DEFAULT_UPCOMING_LIMIT, MonthCursor, MonthGrid,
    Occurrence, build_month_grid, find_upcoming,
};
use bincal_notify::{ScheduleController, SchedulerStatus};
use bincal_persistence::SqliteStore;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use time::{Month, PrimitiveDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::clock::local_now;
use crate::console::ConsoleHost;
use crate::render::{render_alerts, render_month, render_upcoming};

/// How often `watch` re-derives the reminder schedule.
const REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

type Controller = ScheduleController<SqliteStore, ConsoleHost>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database file for reminder preferences (in-memory if not specified)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Rule table CSV (bundled table if not specified)
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a month calendar
    #[command(visible_alias = "m")]
    Month {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,
    },

    /// List the next collection days
    #[command(visible_alias = "u")]
    Upcoming {
        /// Maximum number of days to list
        #[arg(short, long, default_value_t = DEFAULT_UPCOMING_LIMIT)]
        limit: usize,

        /// Number of calendar days to search
        #[arg(long, default_value_t = DEFAULT_MAX_DAYS_SCANNED)]
        days: u32,
    },

    /// Manage reminders
    #[command(subcommand)]
    Alerts(AlertsCommand),

    /// Keep reminders armed until interrupted
    Watch,
}

#[derive(Debug, Subcommand)]
enum AlertsCommand {
    /// Show reminder settings
    List,

    /// Turn the default day-before reminder on or off
    Default {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Add a custom reminder for some categories
    Add {
        /// Time of day, HH:MM (20:00 if missing or invalid)
        #[arg(long)]
        time: Option<String>,

        /// Rule id to include (repeatable)
        #[arg(short, long = "category", required = true)]
        categories: Vec<String>,
    },

    /// Remove a custom reminder
    Remove {
        /// Reminder id as shown by `alerts list`
        id: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .init();

    let rules: Vec<CollectionRule> = if let Some(path) = &args.rules {
        load_rules_from_path(path)?
    } else {
        info!(area = BUILTIN_AREA_NAME, "Using bundled rule table");
        builtin_rules()?
    };
    let now: PrimitiveDateTime = local_now()?;

    match args.command {
        Command::Month { year, month } => {
            let cursor: MonthCursor = MonthCursor::containing(now.date());
            let month: Month = match month {
                Some(value) => Month::try_from(value)?,
                None => cursor.month,
            };
            let grid: MonthGrid =
                build_month_grid(&rules, year.unwrap_or(cursor.year), month, now.date())?;
            println!("{}", render_month(&grid, &rules));
        }
        Command::Upcoming { limit, days } => {
            let upcoming: Vec<Occurrence> = find_upcoming(&rules, now.date(), limit, days);
            println!("{}", render_upcoming(&upcoming, now.date(), days));
        }
        Command::Alerts(command) => {
            let mut controller: Controller =
                open_controller(args.database.as_deref(), rules, now)?;
            let status: SchedulerStatus = run_alerts(&mut controller, command, now).await?;
            println!("{}", render_alerts(controller.preferences(), controller.rules()));
            println!("Status: {status}");
        }
        Command::Watch => {
            let controller: Controller =
                open_controller(args.database.as_deref(), rules, now)?;
            watch(controller).await?;
        }
    }

    Ok(())
}

fn open_controller(
    database: Option<&Path>,
    rules: Vec<CollectionRule>,
    now: PrimitiveDateTime,
) -> Result<Controller> {
    let store: SqliteStore = if let Some(path) = database {
        info!(path = %path.display(), "Using file-based database");
        SqliteStore::new_with_file(path)?
    } else {
        info!("Using in-memory database, reminder changes will not be kept");
        SqliteStore::new_in_memory()?
    };

    let mut controller: Controller = ScheduleController::new(store, Arc::new(ConsoleHost));
    controller.set_schedule_rules(rules, now)?;
    Ok(controller)
}

async fn run_alerts(
    controller: &mut Controller,
    command: AlertsCommand,
    now: PrimitiveDateTime,
) -> Result<SchedulerStatus> {
    let clock = || local_now().unwrap_or(now);

    let status: SchedulerStatus = match command {
        AlertsCommand::List => controller.status(),
        AlertsCommand::Default { state } => {
            controller
                .on_toggle_default(matches!(state, Toggle::On), clock)
                .await?
        }
        AlertsCommand::Add { time, categories } => {
            let (id, status) = controller
                .on_add_custom_alert(time.as_deref(), &categories, clock)
                .await?;
            println!("Added reminder {id}");
            status
        }
        AlertsCommand::Remove { id } => {
            if controller.preferences().custom_alert(&id).is_none() {
                return Err(eyre!("No reminder with id '{id}'"));
            }
            controller.on_remove_custom_alert(&id, now)?
        }
    };
    Ok(status)
}

async fn watch(mut controller: Controller) -> Result<()> {
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let status: SchedulerStatus = controller.refresh(local_now()?);
                println!("{status}");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, cancelling reminders");
                break;
            }
        }
    }

    controller.into_store();
    Ok(())
}
