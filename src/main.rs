use std::env;
use std::process::exit;

mod notify;
mod timer;

fn main() {
    let args: Vec<String> = env::args().collect();

    let quiet = args.contains(&"--quiet".to_string());
    let positional: Vec<&String> = args[1..]
        .iter()
        .filter(|a| a.as_str() != "--quiet")
        .collect();

    if positional.len() != 1 {
        eprintln!("Usage: stretch-timer <seconds> [--quiet]");
        eprintln!("  <seconds>: how long to wait before the reminder fires");
        exit(2);
    }

    let seconds = match parse_seconds(positional[0]) {
        Ok(n) => n,
        Err(err) => {
            eprintln!("Error: {}", err);
            exit(2);
        }
    };

    // Ctrl-C during the wait means the user changed their mind: leave
    // immediately without notifying.
    ctrlc::set_handler(|| {
        eprintln!("\n🛑 Interrupted!");
        exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    if let Err(err) = run(seconds, quiet, || notify::send(notify::TITLE, notify::MESSAGE)) {
        eprintln!("Error: {}", err);
        exit(1);
    }
}

fn run(
    seconds: u64,
    quiet: bool,
    send_notification: impl FnOnce() -> Result<(), String>,
) -> Result<(), String> {
    if !quiet {
        println!(
            "🧘 Stretch reminder in {}...",
            timer::format_duration(seconds)
        );
    }

    timer::run_timer(seconds, quiet);
    send_notification()
}

fn parse_seconds(input: &str) -> Result<u64, String> {
    let input = input.trim();

    match input.parse::<i64>() {
        Ok(n) if n < 0 => Err(format!("duration must not be negative (got {})", n)),
        Ok(n) => Ok(n as u64),
        Err(_) => Err(format!(
            "invalid duration '{}': expected a whole number of seconds",
            input
        )),
    }
}
