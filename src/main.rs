//! rFitlogger main entrypoint.

use rfitlogger::run;
use rfitlogger::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
