// tests/cli.rs
//
// Argument parsing and offline output formatting.
use vtrack_dash::{
    cli::{issues_text, parse_cli, schedule_text, Action, CliError, Command, OutFormat},
    csv::{dataset_to_string, Delim},
    data::{issues_dataset, ClientEntry, ClientStatus, EmployeeRecord, IssueRecord, ScheduleSnapshot},
};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

fn run_args(args: &[&str]) -> vtrack_dash::cli::CliArgs {
    match parse_cli(argv(args)) {
        Ok(Action::Run(a)) => a,
        other => panic!("expected Run, got {other:?}"),
    }
}

fn snapshot() -> ScheduleSnapshot {
    let mut mahesh = EmployeeRecord::new("Mahesh");
    mahesh.push(ClientEntry { name: "Acme, Ltd".into(), time_slot: "9:00".into(), status: ClientStatus::Completed });
    mahesh.push(ClientEntry { name: "Beta".into(), time_slot: "10:00".into(), status: ClientStatus::Pending });
    ScheduleSnapshot { date: "19-12-2025".into(), employees: vec![mahesh], live_count: 2 }
}

#[test]
fn schedule_with_date_and_format() {
    let a = run_args(&["schedule", "--date", "19-12-2025", "-f", "TSV"]);
    assert_eq!(a.command, Command::Schedule { date: "19-12-2025".into() });
    assert_eq!(a.format, OutFormat::Tsv);
}

#[test]
fn issues_defaults_to_text() {
    let a = run_args(&["issues"]);
    assert_eq!(a.command, Command::Issues);
    assert_eq!(a.format, OutFormat::Text);
}

#[test]
fn source_overrides() {
    let a = run_args(&["issues", "--endpoint", "http://localhost:9000", "--issues-sheet", "XYZ"]);
    assert_eq!(a.options.source.endpoint, "http://localhost:9000");
    assert_eq!(a.options.source.issues_sheet_id, "XYZ");
}

#[test]
fn help_wins() {
    assert!(matches!(parse_cli(argv(&["schedule", "-h"])), Ok(Action::Help)));
}

#[test]
fn usage_errors() {
    let cases: [&[&str]; 6] = [
        &[],
        &["schedule"],
        &["schedule", "--date", "  "],
        &["schedule", "--date"],
        &["issues", "--format", "xml"],
        &["issues", "--bogus"],
    ];
    for args in cases {
        assert!(matches!(parse_cli(argv(args)), Err(CliError::Usage(_))), "{args:?}");
    }
}

#[test]
fn schedule_text_summary() {
    let text = schedule_text(&snapshot());
    assert!(text.starts_with("Live Vehicles Count: 2\nDate: 19-12-2025\n"));
    assert!(text.contains("Mahesh  completed 1  pending 1"));
    assert!(text.contains("Acme, Ltd"));
}

#[test]
fn empty_issues_text() {
    assert_eq!(issues_text(&[]), "No pending video request issues found.\n");
}

#[test]
fn schedule_csv_quotes_commas() {
    let csv = dataset_to_string(&snapshot().to_dataset(), Delim::Csv);
    assert_eq!(
        csv,
        "Employee,Client,Time Slot,Status\nMahesh,\"Acme, Ltd\",9:00,Completed\nMahesh,Beta,10:00,Pending\n"
    );
}

#[test]
fn issues_tsv_has_header_and_row_order() {
    let issue = IssueRecord {
        raised_by: "Navya".into(),
        timestamp: "t".into(),
        client: "Acme".into(),
        vehicle_number: "KA01".into(),
        issue_details: "line1\nline2".into(),
        current_status: "Open".into(),
    };
    let tsv = dataset_to_string(&issues_dataset(&[issue]), Delim::Tsv);
    let mut lines = tsv.lines();
    assert_eq!(
        lines.next(),
        Some("Timestamp\tRaised By\tClient\tVehicle Number\tIssue Details\tCurrent Status")
    );
    assert!(tsv.contains("t\tNavya\tAcme\tKA01\t\"line1\nline2\"\tOpen\n"));
}
