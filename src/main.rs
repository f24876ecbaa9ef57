//! rPontoCsv main entrypoint.

use rpontocsv::run;
use rpontocsv::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
