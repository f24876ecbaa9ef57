#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const MARKER: &str = "###PREFERENCES_END";

/// Backup with a preferences block, noise lines and a week of punches
/// (Feb 2024: the 1st is a Thursday).
pub const SAMPLE_BACKUP: &str = "\
PONTO_FACIL_BACKUP
LANGUAGE=pt_BR
2024-01-10 08:00;preference that looks like a punch
###PREFERENCES_END
2024-02-01 09:00;Entrada;
2024-02-01 18:00;Saida;

not a punch
;2024-02-02 09:00
2024-02-05 08:30;Entrada;
2024-02-05 12:00;Saida;
2024-02-05 13:00;Entrada;
2024-02-05 17:30;Saida;
2024-02-06 09:00;Entrada;
";

pub const SAMPLE_CSV: &str = "\
2024-02-01,09:00,12:00,13:00,19:30
2024-02-02,,12:00,13:00,
2024-02-03,SÁBADO,SÁBADO,SÁBADO,SÁBADO
2024-02-04,DOMINGO,DOMINGO,DOMINGO,DOMINGO
2024-02-05,08:30,12:00,13:00,18:00
2024-02-06,,12:00,13:00,
";

pub fn rpc() -> Command {
    cargo_bin_cmd!("rpontocsv")
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpontocsv.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp backup file and return its path
pub fn write_backup(name: &str, content: &str) -> String {
    let path = temp_path(name, "txt");
    fs::write(&path, content).expect("write backup file");
    path
}

/// Config path that never exists, so the CLI runs with defaults
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_missing"), "conf")
}
