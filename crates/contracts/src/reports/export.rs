use chrono::NaiveDate;

use super::catalog::ReportKind;
use crate::shared::record::Tag;

/// Body returned for an unknown report id
pub const NO_DATA: &str = "No data available";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unknown report '{0}'")]
    UnknownReport(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output: {0}")]
    Output(String),
}

type Table = (&'static [&'static str], &'static [&'static [&'static str]]);

#[rustfmt::skip]
fn table(kind: ReportKind) -> Table {
    match kind {
        ReportKind::PlayerRoster => (
            &["Name", "Age", "Category", "Position", "Guardian", "Phone", "Join Date", "Status"],
            &[
                &["John Ochieng", "16", "U15", "Forward", "Mary Ochieng", "+254712345678", "2024-01-15", "Active"],
                &["Grace Wanjiku", "14", "U15", "Midfielder", "Peter Wanjiku", "+254798765432", "2024-02-20", "Active"],
                &["Michael Kamau", "17", "U20", "Goalkeeper", "Susan Kamau", "+254711223344", "2023-09-10", "Injured"],
            ],
        ),
        ReportKind::AttendanceReport => (
            &["Player", "Category", "Training Sessions", "Matches", "Attendance Rate"],
            &[
                &["John Ochieng", "U15", "18/20", "5/6", "88%"],
                &["Grace Wanjiku", "U15", "19/20", "6/6", "95%"],
                &["Michael Kamau", "U20", "15/20", "4/6", "75%"],
            ],
        ),
        ReportKind::MatchResults => (
            &["Date", "Match", "Result", "Category", "Attendance"],
            &[
                &["2024-12-14", "Nairobi FC vs Mathare FC", "2-1 Win", "U20", "150"],
                &["2024-12-10", "Nairobi FC vs Kibera FC", "1-1 Draw", "U15", "120"],
                &["2024-12-08", "Nairobi FC vs Eastleigh FC", "3-0 Win", "U12", "80"],
            ],
        ),
        ReportKind::FinancialSummary => (
            &["Month", "Revenue", "Expenses", "Net Income", "Outstanding Fees"],
            &[
                &["November", "750000", "460000", "290000", "45000"],
                &["October", "640000", "440000", "200000", "32000"],
                &["September", "590000", "410000", "180000", "28000"],
            ],
        ),
        ReportKind::PerformanceAnalytics => (
            &["Player", "Technical", "Tactical", "Physical", "Mental", "Overall Rating"],
            &[
                &["John Ochieng", "8", "7", "9", "8", "8.0"],
                &["Grace Wanjiku", "9", "8", "7", "9", "8.3"],
                &["Michael Kamau", "7", "9", "8", "8", "8.0"],
            ],
        ),
    }
}

/// CSV text of a report: header row plus sample rows, `\n` separated,
/// without a newline after the last row.
/// Unknown ids yield [`NO_DATA`].
pub fn report_csv(id: &str) -> Result<String, ReportError> {
    let Some(kind) = ReportKind::from_code(id) else {
        return Ok(NO_DATA.to_string());
    };
    let (header, rows) = table(kind);

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(*row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Output(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| ReportError::Output(e.to_string()))?;
    // no terminator after the last row
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// `Player Roster` on 2024-12-14 becomes `Player_Roster_2024-12-14.csv`.
/// Each run of whitespace turns into one underscore.
pub fn export_filename(report_name: &str, date: NaiveDate) -> String {
    let mut name = String::with_capacity(report_name.len() + 15);
    let mut in_space = false;
    for ch in report_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    format!("{}_{}.csv", name, date.format("%Y-%m-%d"))
}
