use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

use intellifence::{events, export, settings, ui, App, DataSource, FileSource, SimulationSource, View};
use intellifence_sim::Simulation;
use intellifence_types::FenceProfile;

#[derive(Parser, Debug)]
#[command(name = "intellifence")]
#[command(about = "Terminal dashboard for simulated power-line fence telemetry")]
struct Args {
    /// Settings file (TOML, JSON or YAML) layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fence to monitor, by ID
    #[arg(short, long, default_value = "FN-001")]
    fence: String,

    /// UI refresh interval in milliseconds
    #[arg(short, long, default_value = "250")]
    refresh: u64,

    /// Start the tick timer immediately
    #[arg(long, conflicts_with_all = ["headless", "export", "replay"])]
    autostart: bool,

    /// Write logs to this file (the TUI owns stdout)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print samples as JSON lines instead of starting the TUI
    #[arg(long, conflicts_with_all = ["export", "replay"])]
    headless: bool,

    /// Number of ticks to run for --headless and --export
    #[arg(short = 'n', long, default_value = "10")]
    ticks: u64,

    /// Run --ticks steps, write the snapshot to this file and exit
    #[arg(short, long, conflicts_with = "replay")]
    export: Option<PathBuf>,

    /// Replay a snapshot file written by --export
    #[arg(long)]
    replay: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    let refresh = Duration::from_millis(args.refresh.max(10));

    // Replay mode needs no simulation
    if let Some(ref path) = args.replay {
        return run_tui(Box::new(FileSource::new(path)), refresh);
    }

    let sim = build_simulation(&args)?;

    if args.headless {
        return run_headless(&sim, args.ticks);
    }

    if let Some(ref export_path) = args.export {
        return export_to_file(&sim, args.ticks, export_path);
    }

    // The tick task needs a runtime; the TUI loop stays on this thread
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    if args.autostart {
        sim.start();
    }

    let source = Box::new(SimulationSource::new(sim.clone()));
    let result = run_tui(source, refresh);

    sim.stop();
    result
}

/// Install a file logger if requested.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn build_simulation(args: &Args) -> Result<Simulation> {
    let config = settings::load(args.config.as_deref())?;

    let fence = FenceProfile::find(&args.fence).ok_or_else(|| {
        let known: Vec<String> = FenceProfile::catalog().into_iter().map(|f| f.id).collect();
        anyhow!("unknown fence '{}' (expected one of {})", args.fence, known.join(", "))
    })?;

    let mut builder = Simulation::builder().config(config).fence(fence);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}

/// Step the simulation and print each sample as a JSON line
fn run_headless(sim: &Simulation, ticks: u64) -> Result<()> {
    use std::io::Write;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..ticks {
        let outcome = sim.step_detailed();
        for alert in &outcome.alerts {
            tracing::info!(severity = %alert.severity, message = %alert.message, "alert");
        }
        serde_json::to_writer(&mut out, &outcome.sample)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Step the simulation and export the resulting snapshot
fn export_to_file(sim: &Simulation, ticks: u64, export_path: &Path) -> Result<()> {
    for _ in 0..ticks {
        sim.step();
    }
    export::write_snapshot(export_path, &sim.snapshot())?;

    println!("Exported snapshot to: {}", export_path.display());
    Ok(())
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(source);
    let _ = app.reload_data();

    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 16;

    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(
                    0,
                    (area.height / 2).saturating_sub(2),
                    area.width,
                    5.min(area.height),
                );
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(12),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.current_view {
                View::Dashboard => ui::dashboard::render(frame, app, chunks[2]),
                View::Alerts => ui::alerts::render(frame, app, chunks[2]),
                View::Fences => ui::fences::render(frame, app, chunks[2]),
                View::System => ui::system::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        if let Some(event) = events::poll_event(Duration::from_millis(50))? {
            match event {
                Event::Key(key) => {
                    events::handle_key_event(app, key);
                    // Show the effect of a control key without waiting a refresh
                    let _ = app.reload_data();
                }
                // Content starts after header (1) + tabs (1)
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse, 2),
                _ => {}
            }
        }

        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}
