use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use fireglyph::config::{Command, ShowConfig};
use fireglyph::effects::{Effect, fireworks::FireworksEffect};
use fireglyph::error::AppError;
use std::env;
use std::fs::File;
use std::io::{BufWriter, stdout};
use std::path::Path;
use std::time::{Duration, Instant};

fn print_usage() {
    eprintln!("fireglyph - Terminal fireworks that light up a message");
    eprintln!();
    eprintln!("Usage: fireglyph [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config PATH        Load settings from a TOML file (other options override it)");
    eprintln!("  --text STRING        Text to display, \\n starts a new line");
    eprintln!("  --bg-color RRGGBB    Background color as hex (e.g., --bg-color 1a1b26)");
    eprintln!("  --text-color RRGGBB  Color of letters that are not lit");
    eprintln!("  --scale N            Canvas units per terminal pixel (default: fit 800 units tall)");
    eprintln!("  --log-file PATH      Write logs to PATH (filter with RUST_LOG)");
    eprintln!();
    eprintln!("Click anywhere to launch a firework.");
    eprintln!("Press 'q', ESC, or Ctrl+C to exit");
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::Logger(format!("{}: {e}", path.display())))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))
}

fn run_effect<E: Effect>(config: &ShowConfig) -> std::io::Result<()> {
    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All), EnableMouseCapture)?;

    let result = frame_loop::<E>(&mut stdout, config);

    execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture)?;
    terminal::disable_raw_mode()?;

    result
}

fn frame_loop<E: Effect>(stdout: &mut BufWriter<std::io::Stdout>, config: &ShowConfig) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut effect = E::new(cols as usize, rows as usize * 2, config);

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;
    const FIXED_DT: f32 = 1.0 / 60.0;

    loop {
        if event::poll(Duration::from_millis(1))? {
            let event = event::read()?;
            match &event {
                Event::Key(key_event) => {
                    if key_event.code == KeyCode::Char('q')
                        || key_event.code == KeyCode::Esc
                        || (key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(event::KeyModifiers::CONTROL))
                    {
                        break;
                    }
                    effect.handle_event(&event);
                }
                Event::Resize(cols, rows) => {
                    log::info!("terminal resized to {cols}x{rows}, restarting show");
                    effect = E::new(*cols as usize, *rows as usize * 2, config);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {
                    effect.handle_event(&event);
                }
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        accumulator += frame_time;
        if accumulator > FIXED_DT * 3.0 {
            accumulator = FIXED_DT * 3.0;
        }

        while accumulator >= FIXED_DT {
            effect.update(FIXED_DT);
            accumulator -= FIXED_DT;
        }

        effect.render(stdout)?;
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match Command::parse(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = run_effect::<FireworksEffect>(&options.show) {
        log::error!("{e}");
        eprintln!("{}", AppError::from(e));
        std::process::exit(1);
    }
}
