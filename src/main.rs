use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use linkwalk::config::BrowserConfig;
use linkwalk::{Browser, ControlFlow};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match BrowserConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => BrowserConfig::default(),
    };
    if let Some(home) = &args.home {
        config.home_url = home.clone();
    }

    let start_url = args.url.clone().unwrap_or_else(|| config.home_url.clone());

    ::log::info!("starting browser session at {}", start_url);

    let mut session = match Browser::new().with_config(config).build() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("failed to start browser: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "linkwalk {} - type '?' for help, 'q' to quit",
        env!("CARGO_PKG_VERSION")
    );

    session.start(&start_url).await;

    // Main loop: one command is fully processed before the next is read.
    // End of input and Ctrl+C both land on the same clean shutdown path.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n> ");
        let _ = std::io::stdout().flush();

        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if session.handle_command(&line).await == ControlFlow::Quit {
                        break;
                    }
                }
                // End of input.
                Ok(None) => break,
                Err(e) => {
                    ::log::error!("failed to read input: {}", e);
                    break;
                }
            },
        }
    }

    println!("\nGoodbye.");
}
