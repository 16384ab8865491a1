mod config;
mod handlers;
mod models;
mod render;
mod services;
mod session;
mod utils;

use chrono::{SecondsFormat, Utc};
use config::{GameConfig, OutputFormat, SoundChoice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::{JsonRenderer, Renderer, TextRenderer};
use services::sound::{Bell, CommandPlayer, Silent, SoundSink};
use session::GameSession;
use std::fs::OpenOptions;
use std::io::{self, Write};
use tokio::io::BufReader;
use log::info;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    let mut builder = match log_file {
        // the board owns the terminal, so stderr logging stays opt-in via RUST_LOG
        Some(_) => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")),
        None => env_logger::Builder::from_default_env(),
    };

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {} {}] {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

fn sound_sink(choice: &SoundChoice) -> Box<dyn SoundSink> {
    match choice {
        SoundChoice::Silent => Box::new(Silent),
        SoundChoice::Bell => Box::new(Bell),
        SoundChoice::Command { program, sound_dir } => Box::new(CommandPlayer::new(program.clone(), sound_dir.clone())),
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let matches = config::cli().get_matches();
    let config = GameConfig::from_matches(&matches);

    init_logging(config.log_file.as_ref())?;

    let rng = match config.seed {
        Some(seed) => {
            info!("Dealing letters from seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut renderer: Box<dyn Renderer> = match config.format {
        OutputFormat::Text => Box::new(TextRenderer::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
    };

    let (mut session, mut ticks) = GameSession::new(config.rules, rng, sound_sink(&config.sound));
    let stdin = BufReader::new(tokio::io::stdin());

    session::run(&mut session, renderer.as_mut(), stdin, &mut ticks).await?;
    info!("Goodbye");
    Ok(())
}
