use std::process;

fn main() {
    if let Err(e) = reading_plan::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
