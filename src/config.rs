use crate::models::ROUND_SECS;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;

/// Rules that shape a round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRules {
    pub round_secs: u32,
    /// Message for final scores the outcome ladder leaves unranked (4, 6, 8)
    pub fallback_outcome: Option<String>,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            round_secs: ROUND_SECS,
            fallback_outcome: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SoundChoice {
    Silent,
    Bell,
    Command { program: String, sound_dir: PathBuf },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rules: GameRules,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub sound: SoundChoice,
    pub log_file: Option<String>,
}

pub fn cli() -> Command {
    Command::new("countdown")
        .version("0.1")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Nine letters, sixty seconds: make as many words as you can")
        .arg(
            Arg::new("round-secs")
                .long("round-secs")
                .num_args(1)
                .value_parser(value_parser!(u32).range(1..))
                .default_value("60")
                .help("Length of a round in seconds"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .value_parser(value_parser!(u64))
                .help("Seed for letter dealing (random if omitted)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .num_args(1)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Board output: text for people, json for one snapshot per line"),
        )
        .arg(
            Arg::new("fallback-outcome")
                .long("fallback-outcome")
                .num_args(1)
                .help("End-of-round message for scores of 4, 6 or 8 (none if omitted)"),
        )
        .arg(
            Arg::new("sound")
                .long("sound")
                .num_args(1)
                .value_parser(["silent", "bell", "command"])
                .default_value("silent")
                .requires_if("command", "sound-cmd")
                .help("How sound effects are played"),
        )
        .arg(
            Arg::new("sound-cmd")
                .long("sound-cmd")
                .num_args(1)
                .help("Player program for --sound command (e.g., aplay)"),
        )
        .arg(
            Arg::new("sound-dir")
                .long("sound-dir")
                .num_args(1)
                .default_value("./share/sounds")
                .help("Directory holding new-game.mp3 and submit.mp3"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
}

impl GameConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let rules = GameRules {
            round_secs: matches.get_one::<u32>("round-secs").copied().unwrap_or(ROUND_SECS),
            fallback_outcome: matches.get_one::<String>("fallback-outcome").cloned(),
        };

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        let sound = match matches.get_one::<String>("sound").map(String::as_str) {
            Some("bell") => SoundChoice::Bell,
            Some("command") => match matches.get_one::<String>("sound-cmd") {
                Some(program) => SoundChoice::Command {
                    program: program.clone(),
                    sound_dir: matches
                        .get_one::<String>("sound-dir")
                        .map(PathBuf::from)
                        .unwrap_or_else(|| PathBuf::from("./share/sounds")),
                },
                None => SoundChoice::Silent,
            },
            _ => SoundChoice::Silent,
        };

        GameConfig {
            rules,
            seed: matches.get_one::<u64>("seed").copied(),
            format,
            sound,
            log_file: matches.get_one::<String>("log-file").cloned(),
        }
    }
}
