use crate::config::Config;
use crate::core::formatter::{RowPolicy, format_days};
use crate::core::grouper::group_punches;
use crate::core::parser::read_punches;
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::export::export_csv;
use crate::models::{AttendanceRow, row::get_headers};
use crate::ui::messages::{info, item, warning};
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Parametri di una singola esecuzione.
#[derive(Debug, Clone)]
pub struct AggregateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: DateRange,
    pub print_rows: bool,
}

/// Esito dell'esecuzione, utile ai test e al chiamante.
#[derive(Debug, Clone, Default)]
pub struct AggregateReport {
    pub punches: usize,
    pub open_days: Vec<NaiveDate>,
    pub rows: Vec<AttendanceRow>,
    pub written: bool,
}

/// Logica di alto livello: backup → aggregati giornalieri → CSV.
pub struct AggregateLogic;

impl AggregateLogic {
    pub fn run(req: &AggregateRequest, cfg: &Config) -> AppResult<AggregateReport> {
        let punches = read_punches(&req.input, &cfg.preferences_marker)?;
        info(format!(
            "Read {} punches from {}",
            punches.len(),
            req.input.display()
        ));

        let groups = group_punches(&punches, &req.range)?;

        if groups.is_empty() {
            warning(format!(
                "No punches found for selected range: {} was not written or updated.",
                req.output.display()
            ));
            return Ok(AggregateReport {
                punches: punches.len(),
                ..Default::default()
            });
        }

        let open_days = groups.open_days();
        if !open_days.is_empty() {
            warn_open_days(&open_days);
        }

        let rows = format_days(&groups, &RowPolicy::from_config(cfg)?);

        if req.print_rows {
            print_rows(&rows);
        }

        export_csv(&rows, &req.output)?;

        Ok(AggregateReport {
            punches: punches.len(),
            open_days,
            rows,
            written: true,
        })
    }
}

fn warn_open_days(days: &[NaiveDate]) {
    warning("The following days have no closing punch:");
    for day in days {
        item(day.format("%Y-%m-%d"));
    }
    warning("The CSV will be generated anyway; those days are left incomplete.");
}

fn print_rows(rows: &[AttendanceRow]) {
    let mut table = Table::with_headers(&get_headers());
    for row in rows {
        table.add_row(row.to_record().iter().map(|s| s.to_string()).collect());
    }
    print!("{}", table.render());
}
