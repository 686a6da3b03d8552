// src/cli.rs
use std::{env, io::{self, Write}};

use crate::{
    collect,
    config::consts::{MSG_ISSUES_FAILED, MSG_SCHEDULE_FAILED},
    config::options::AppOptions,
    csv::{self, Delim},
    data::{issues_dataset, IssueRecord, ScheduleSnapshot},
    error::FetchError,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    /// Static per-pipeline message; the underlying cause rides along as source.
    #[error("{message}")]
    Fetch {
        message: &'static str,
        #[source]
        source: FetchError,
    },

    #[error("I/O: {0}")]
    Io(#[from] io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Schedule { date: String },
    Issues,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub format: OutFormat,
    pub options: AppOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Help,
    Run(CliArgs),
}

pub fn run() -> Result<(), CliError> {
    match parse_cli(env::args().skip(1))? {
        Action::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Action::Run(args) => {
            let stdout = io::stdout();
            execute(&args, &mut stdout.lock())
        }
    }
}

pub fn parse_cli<I: IntoIterator<Item = String>>(argv: I) -> Result<Action, CliError> {
    let mut options = AppOptions::default();
    let mut command: Option<&'static str> = None;
    let mut date: Option<String> = None;
    let mut format = OutFormat::Text;

    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| CliError::Usage(format!("Missing value for {flag}")))
        };
        match a.as_str()
        {
            "schedule" => command = Some("schedule"),
            "issues" => command = Some("issues"),
            "-d" | "--date" => date = Some(value("--date")?),
            "-f" | "--format" => {
                let v = value("--format")?;
                format = match v.to_ascii_lowercase().as_str() {
                    "text" => OutFormat::Text,
                    "csv" => OutFormat::Csv,
                    "tsv" => OutFormat::Tsv,
                    "json" => OutFormat::Json,
                    other => return Err(CliError::Usage(format!("Unknown format: {}", other))),
                };}
            "--endpoint" => options.source.endpoint = value("--endpoint")?,
            "--schedule-sheet" => options.source.schedule_sheet_id = value("--schedule-sheet")?,
            "--issues-sheet" => options.source.issues_sheet_id = value("--issues-sheet")?,
            "-h" | "--help" => return Ok(Action::Help),
            _ => return Err(CliError::Usage(format!("Unknown arg: {}", a))),
        }
    }

    let command = match command {
        Some("schedule") => {
            let date = date
                .filter(|d| !d.trim().is_empty())
                .ok_or_else(|| CliError::Usage(s!("schedule needs --date <DD-MM-YYYY>")))?;
            Command::Schedule { date }
        }
        Some(_) => Command::Issues,
        None => return Err(CliError::Usage(s!("Specify a command: schedule | issues (see --help)"))),
    };

    Ok(Action::Run(CliArgs { command, format, options }))
}

pub fn execute<W: Write>(args: &CliArgs, out: &mut W) -> Result<(), CliError> {
    match &args.command {
        Command::Schedule { date } => {
            let snap = collect::collect_schedule(&args.options, date, None)
                .map_err(|source| CliError::Fetch { message: MSG_SCHEDULE_FAILED, source })?;
            match args.format {
                OutFormat::Text => out.write_all(schedule_text(&snap).as_bytes())?,
                OutFormat::Csv => csv::write_dataset(&mut *out, &snap.to_dataset(), Delim::Csv)?,
                OutFormat::Tsv => csv::write_dataset(&mut *out, &snap.to_dataset(), Delim::Tsv)?,
                OutFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&snap)?)?,
            }
        }
        Command::Issues => {
            let issues = collect::collect_issues(&args.options, None)
                .map_err(|source| CliError::Fetch { message: MSG_ISSUES_FAILED, source })?;
            match args.format {
                OutFormat::Text => out.write_all(issues_text(&issues).as_bytes())?,
                OutFormat::Csv => csv::write_dataset(&mut *out, &issues_dataset(&issues), Delim::Csv)?,
                OutFormat::Tsv => csv::write_dataset(&mut *out, &issues_dataset(&issues), Delim::Tsv)?,
                OutFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&issues)?)?,
            }
        }
    }
    Ok(())
}

/// Same summary the Schedule tab shows.
pub fn schedule_text(snap: &ScheduleSnapshot) -> String {
    let mut s = format!("Live Vehicles Count: {}\nDate: {}\n", snap.live_count, snap.date);
    for e in &snap.employees {
        s.push_str(&format!(
            "\n{}  completed {}  pending {}\n",
            e.name(), e.completed(), e.pending()
        ));
        for c in e.clients() {
            s.push_str(&format!("  {:<12} {:<24} {}\n", c.time_slot, c.name, c.status));
        }
    }
    s
}

pub fn issues_text(issues: &[IssueRecord]) -> String {
    if issues.is_empty() {
        return s!("No pending video request issues found.\n");
    }
    let mut s = format!("Pending Video Request Issues: {}\n", issues.len());
    for i in issues {
        s.push_str(&format!(
            "\n{} | {} | {} | {}\n  {}\n  Status: {}\n",
            i.timestamp, i.raised_by, i.client, i.vehicle_number, i.issue_details, i.current_status
        ));
    }
    s
}
