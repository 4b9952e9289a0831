//! classroll main entrypoint.

use classroll::run;
use classroll::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
