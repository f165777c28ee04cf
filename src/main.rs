// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::language::Language;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod backend;
mod errors;
mod file_utils;
mod language;
mod ui;

/// CLI Wrapper for Language to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLanguage {
    En,
    Hi,
}

impl From<CliLanguage> for Language {
    fn from(cli_language: CliLanguage) -> Self {
        match cli_language {
            CliLanguage::En => Language::En,
            CliLanguage::Hi => Language::Hi,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a leaf image and render the diagnosis (default command)
    #[command(alias = "scan")]
    Diagnose(DiagnoseArgs),

    /// Send a message to the site operators
    Contact(ContactArgs),

    /// Generate shell completions for leafscan
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct DiagnoseArgs {
    /// Leaf image to upload
    #[arg(value_name = "IMAGE")]
    input_path: PathBuf,

    /// Display language for description and remedy text
    #[arg(short, long, value_enum)]
    language: Option<CliLanguage>,

    /// Backend endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ContactArgs {
    /// Your name
    #[arg(short, long)]
    name: String,

    /// Your email address
    #[arg(short = 'm', long)]
    email: String,

    /// The message to send
    #[arg(long)]
    message: String,

    /// Backend endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Leafscan - Plant Disease Diagnosis Client
///
/// A command-line client for a plant-disease inference backend: uploads a
/// leaf image, renders the diagnosis with localized care instructions, and
/// submits contact messages.
#[derive(Parser, Debug)]
#[command(name = "leafscan")]
#[command(author = "Leafscan Team")]
#[command(version = "1.0.0")]
#[command(about = "Plant disease diagnosis client")]
#[command(long_about = "Leafscan uploads a leaf image to an inference backend and renders the
returned diagnosis: condition name, provenance badge, and care instructions
in English or Hindi.

EXAMPLES:
    leafscan leaf.jpg                          # Diagnose using default config
    leafscan -l hi leaf.jpg                    # Render description/remedy in Hindi
    leafscan -e http://farm-server:5000 leaf.jpg
    leafscan contact -n Asha -m asha@example.com --message \"My crop is wilting\"
    leafscan --log-level debug leaf.jpg        # Diagnose with debug logging
    leafscan completions bash > leafscan.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Leaf image to upload
    #[arg(value_name = "IMAGE")]
    input_path: Option<PathBuf>,

    /// Display language for description and remedy text
    #[arg(short, long, value_enum)]
    language: Option<CliLanguage>,

    /// Backend endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "leafscan", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Diagnose(args)) => run_diagnose(args).await,
        Some(Commands::Contact(args)) => run_contact(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("IMAGE is required when no subcommand is specified")
            })?;

            let diagnose_args = DiagnoseArgs {
                input_path,
                language: cli.language,
                endpoint: cli.endpoint,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_diagnose(diagnose_args).await
        }
    }
}

/// Load the configuration file, creating a default one if it is missing
fn load_or_create_config(config_path: &str, log_level: &Option<CliLogLevel>) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Update log level in config if specified via command line
        if let Some(cmd_log_level) = log_level {
            config.log_level = cmd_log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(cmd_log_level) = log_level {
            config.log_level = cmd_log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // If log level was not set via command line, update it from config now
    if log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    Ok(config)
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// A spinner shown while a request is in flight
fn request_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

async fn run_diagnose(options: DiagnoseArgs) -> Result<()> {
    let mut config = load_or_create_config(&options.config_path, &options.log_level)?;

    // Override config with CLI options if provided
    if let Some(endpoint) = &options.endpoint {
        config.backend.endpoint = endpoint.clone();
    }
    if let Some(language) = &options.language {
        let language: Language = language.clone().into();
        config.display_language = language.code().to_string();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    if !options.input_path.exists() {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    let spinner = request_spinner(format!("Analyzing {}...", options.input_path.display()));
    let outcome = controller.diagnose(&options.input_path).await?;
    spinner.finish_and_clear();

    // Render the panel exactly as the controller left it
    let view = controller.view();
    let mut stdout = std::io::stdout();
    ui::render::render_panel(&view.panel, &mut stdout)?;

    if !outcome.is_success() {
        std::process::exit(1);
    }

    info!("Diagnosis complete");
    Ok(())
}

async fn run_contact(options: ContactArgs) -> Result<()> {
    let mut config = load_or_create_config(&options.config_path, &options.log_level)?;

    if let Some(endpoint) = &options.endpoint {
        config.backend.endpoint = endpoint.clone();
    }

    config.validate()
        .context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;

    let spinner = request_spinner("Sending message...".to_string());
    let outcome = controller
        .submit_contact(&options.name, &options.email, &options.message)
        .await?;
    spinner.finish_and_clear();

    let view = controller.view();
    let mut stdout = std::io::stdout();
    ui::render::render_contact(&view.contact, &mut stdout)?;

    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
