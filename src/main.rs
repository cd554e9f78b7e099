use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use hovertip::app::App;
use hovertip::config::{Config, load_config};

/// Poll timeout while no hide deadline is outstanding
const IDLE_POLL: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(
    name = "hovertip",
    version,
    about = "Flicker-free hover tooltips for ratatui - demo application"
)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Grace interval in milliseconds before a tooltip hides
    #[arg(long, value_name = "MS")]
    grace_ms: Option<u64>,

    /// Keep tooltips visible regardless of hover
    #[arg(long)]
    always_display: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    // CLI flags override the config file
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(grace_ms) = cli.grace_ms {
        config.tooltip.grace_ms = grace_ms;
    }
    if cli.always_display {
        config.tooltip.always_display = true;
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(terminal, &config);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    while !app.should_quit() {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Sleep until the next input event or the earliest hide deadline;
        // with nothing scheduled there is no reason to wake often
        let timeout = match app.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };

        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }

        app.poll_timers(Instant::now());
    }

    Ok(())
}

/// Write debug logs to a file; the TUI owns the terminal
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let log_path = std::env::temp_dir().join("hovertip-debug.log");
    let Ok(file) = std::fs::File::create(log_path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
