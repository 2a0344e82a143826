//! Dungeon layout generator
//!
//! Interactive viewer by default; `--print` generates once and writes the
//! layout to stdout.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::LevelFilter;

use dg_assets::AssetRegistry;
use dg_core::{ConfigError, Generator, GeneratorConfig};
use dg_tui::{App, GraphicsMode, TerminalPresenter, TextPresenter, Theme};

/// Generate rectangular-room dungeon layouts
#[derive(Parser, Debug)]
#[command(name = "dungeon-gen")]
#[command(author, version, about = "Generate rooms, corridors and walls on a grid", long_about = None)]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Map width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Map height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Number of room placement attempts
    #[arg(short = 'r', long = "max-rooms")]
    max_rooms: Option<u32>,

    /// Smallest room side
    #[arg(long = "min-room-size")]
    min_room_size: Option<u32>,

    /// Largest room side
    #[arg(long = "max-room-size")]
    max_room_size: Option<u32>,

    /// Fixed seed (0 picks one from the clock)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Tile mapping file (defaults to the built-in classic tiles)
    #[arg(short = 'a', long = "assets")]
    assets: Option<PathBuf>,

    /// Glyph style: classic, fancy or auto
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,

    /// Generate once and print the layout instead of opening the viewer
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Log file for the interactive viewer
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn build_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_rooms) = self.max_rooms {
            config.max_rooms = max_rooms;
        }
        if let Some(min) = self.min_room_size {
            config.min_room_size = min;
        }
        if let Some(max) = self.max_room_size {
            config.max_room_size = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    // The viewer owns the terminal, so it only logs to a file
    let result = if args.print {
        simplelog::TermLogger::init(
            level,
            config,
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        )
    } else if let Some(path) = &args.log_file {
        match File::create(path) {
            Ok(file) => simplelog::WriteLogger::init(level, config, file),
            Err(e) => {
                eprintln!("Cannot open log file {}: {}", path.display(), e);
                return;
            }
        }
    } else {
        return;
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}

fn load_assets(args: &Args) -> Option<AssetRegistry> {
    let Some(path) = &args.assets else {
        return Some(AssetRegistry::classic());
    };
    match AssetRegistry::load_from_file(path) {
        Ok(registry) => Some(registry),
        Err(e) => {
            log::warn!("Failed to load assets from {}: {}", path.display(), e);
            None
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let config = match args.build_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dungeon-gen: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let assets = load_assets(&args);

    let result = if args.print {
        run_print(config, assets)
    } else {
        run_viewer(config, assets, args.graphics)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dungeon-gen: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_print(config: GeneratorConfig, assets: Option<AssetRegistry>) -> io::Result<()> {
    let mut generator = Generator::new(config, TextPresenter::new(assets));
    let report = generator.generate();

    match generator.presenter().output() {
        Some(text) => print!("{}", text),
        None => {
            if let Some(warning) = report.warning() {
                eprintln!("Warning: {}", warning);
            }
        }
    }
    log::info!("seed {} ({} rooms)", report.seed, report.room_count);
    Ok(())
}

fn run_viewer(
    config: GeneratorConfig,
    assets: Option<AssetRegistry>,
    graphics: GraphicsMode,
) -> io::Result<()> {
    let theme = Theme::detect();
    let presenter = TerminalPresenter::new(assets, graphics, theme);
    let mut app = App::new(config, presenter, theme);
    app.generate();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
