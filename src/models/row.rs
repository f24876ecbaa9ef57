use serde::Serialize;

/// Riga "piatta" del CSV di presenza.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceRow {
    pub date: String,
    pub entry: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub exit: String,
}

impl AttendanceRow {
    pub fn to_record(&self) -> [&str; 5] {
        [
            self.date.as_str(),
            self.entry.as_str(),
            self.lunch_out.as_str(),
            self.lunch_in.as_str(),
            self.exit.as_str(),
        ]
    }
}

/// Header used only for the console table; the CSV has none.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "entry", "lunch_out", "lunch_in", "exit"]
}
