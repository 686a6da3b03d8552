// src/config/consts.rs

// Net config
pub const QUERY_ENDPOINT: &str = "https://docs.google.com/spreadsheets/d";
pub const QUERY_PATH: &str = "gviz/tq?tqx=out:json&sheet=";
pub const USER_AGENT: &str = "vtrack_dash/0.1";

// Sheets
pub const SCHEDULE_SHEET_ID: &str = "1GPDqOSURZNALalPzfHNbMft0HQ1c_fIkgfu_V3fSroY";
pub const ISSUES_SHEET_ID: &str = "1DzW-6Q7hTNn2hSJbEHOkSrbalOmbDIftdjw4I_PhEdA";
pub const SCHEDULE_TAB_PREFIX: &str = "Schedule_";
pub const ISSUES_TAB: &str = "Issues- Realtime";

// Response wrapper: "/*O_o*/\ngoogle.visualization.Query.setResponse(" … ");"
pub const WRAPPER_PREFIX_LEN: usize = 47;
pub const WRAPPER_SUFFIX_LEN: usize = 2;
pub const WRAPPER_PREFIX_MARKER: &str = "google.visualization.Query.setResponse(";
pub const WRAPPER_SUFFIX_MARKER: &str = ");";

// Rosters
pub const EMPLOYEES: &[&str] = &[
    "Mahesh", "Shashi", "Nesia", "GUNASAGARI", "Ritanjali", "BRINDA", "Rakesh",
    "Naveen", "KIRAN", "HARI", "Sunil", "RISHI", "MANTU", "CHANDAN",
];

pub const COL_SUB_REQUEST: &str = "Sub-request";
pub const COL_RESOLVED: &str = "Resolved Y/N";
pub const COL_RAISED_BY: &str = "Raised by";
pub const COL_TIMESTAMP: &str = "Timestamp Issues Raised";
pub const COL_CLIENTS: &str = "Clients";
pub const COL_VEHICLE: &str = "Vehicle Number";
pub const COL_DETAILS: &str = "Issue Details";
pub const COL_STATUS: &str = "Date - Current Status";

pub const ISSUE_COLUMNS: &[&str] = &[
    COL_SUB_REQUEST, COL_RESOLVED, COL_RAISED_BY, COL_TIMESTAMP,
    COL_CLIENTS, COL_VEHICLE, COL_DETAILS, COL_STATUS,
];

// Classification markers (all matched case-sensitively unless noted)
pub const OFF_SLOT_MARKERS: &[&str] = &["WEEK OFF", "INACTIVE", "Call"];
pub const LIVE_MARKER: &str = "Live";
pub const PLACEHOLDER: &str = "-";
pub const VIDEO_REQUEST_MARKER: &str = "Customer request for video";
pub const UNRESOLVED_FLAG: &str = "no"; // compared lower-cased

// User-facing messages
pub const MSG_SCHEDULE_FAILED: &str = "Failed to fetch schedule data. Make sure the sheet name exists.";
pub const MSG_ISSUES_FAILED: &str = "Failed to fetch issues data.";

// Local log
pub const LOG_DIR: &str = ".vtrack";
pub const LOG_FILE: &str = "debug.log";
