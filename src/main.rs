use banana_quiz::app::App;
use banana_quiz::config::QuizConfig;
use banana_quiz::util::logging;
use banana_quiz::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Count the bananas, pick the number, keep the streak going.
#[derive(Debug, Parser)]
#[command(name = "banana-quiz", version, about)]
struct Cli {
    /// Base URL of the Question Service
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout, e.g. "5s" or "1500ms"; "0s" disables it
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging failures are never fatal
    let logged = logging::resolve_log_path(cli.log_file.clone())
        .and_then(|path| logging::init_tracing(&cli.log_level, &path));
    if let Err(e) = logged {
        eprintln!("Logging disabled: {}", e);
    }

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => QuizConfig::config_file_path()?,
    };
    let mut config = QuizConfig::load_from(&config_path)?;
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_request_timeout(timeout);
    }
    config.validate()?;

    if cli.save_config {
        config.save_to(&config_path)?;
        println!("Configuration saved to {}", config_path.display());
        return Ok(());
    }

    tracing::info!(base_url = %config.base_url, "starting banana quiz");
    let mut app = App::new(&config)?;
    app.init()?;
    let outcome = app.run().await;
    // Restores the terminal before anything is printed
    drop(app);
    if let Err(e) = outcome {
        tracing::error!(error = %e, "application error");
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
