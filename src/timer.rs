//! Timer module: blocks until the requested wait has elapsed, drawing a
//! live countdown on stdout unless suppressed.

use std::thread;
use std::time::{Duration, Instant};

const BAR_WIDTH: usize = 20;

pub fn run_timer(duration_seconds: u64, quiet: bool) {
    wait(
        Duration::from_secs(duration_seconds),
        Duration::from_millis(1000),
        quiet,
    );
}

/// Sleeps in ticks no longer than `tick`, clamped to the time left, so the
/// countdown can redraw once per tick while the total wait never falls short
/// of `total`.
fn wait(total: Duration, tick: Duration, quiet: bool) {
    let start_time = Instant::now();

    loop {
        let elapsed = start_time.elapsed();
        if elapsed >= total {
            break;
        }
        let remaining = total - elapsed;

        if !quiet {
            draw_countdown(remaining, elapsed, total);
        }

        thread::sleep(remaining.min(tick));
    }

    if !quiet && !total.is_zero() {
        println!("\r⏱️  00:00 - Time's up! [{}] 100%", "█".repeat(BAR_WIDTH));
    }
}

fn draw_countdown(remaining: Duration, elapsed: Duration, total: Duration) {
    // Time formatting
    let minutes = remaining.as_secs() / 60;
    let seconds = remaining.as_secs() % 60;

    // Progress calculation
    let progress_ratio = elapsed.as_secs_f64() / total.as_secs_f64();
    let percentage = (progress_ratio * 100.0) as u8;

    // Progress bar generation
    let filled_blocks = (progress_ratio * BAR_WIDTH as f64) as usize;
    let empty_blocks = BAR_WIDTH - filled_blocks;

    let progress_bar = format!("{}{}", "█".repeat(filled_blocks), "░".repeat(empty_blocks));

    print!(
        "\r⏱️  {:02}:{:02} remaining [{}] {}%",
        minutes, seconds, progress_bar, percentage
    );

    std::io::Write::flush(&mut std::io::stdout()).unwrap();
}

pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;

    let plural = |n: u64| if n == 1 { "" } else { "s" };

    if minutes > 0 && remaining_seconds > 0 {
        format!(
            "{} minute{} {} second{}",
            minutes,
            plural(minutes),
            remaining_seconds,
            plural(remaining_seconds)
        )
    } else if minutes > 0 {
        format!("{} minute{}", minutes, plural(minutes))
    } else {
        format!("{} second{}", remaining_seconds, plural(remaining_seconds))
    }
}
