use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rustyheaders::config::{DispatchConfig, config, set_config};
use rustyheaders::{ClientTransport, HeaderAnalyzer, RequestDispatcher};

/// Parse a raw HTTP header block and print it as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File holding the header block, stdin when omitted
    input: Option<PathBuf>,

    /// Replay the parsed request and print the response status
    #[arg(long)]
    send: bool,

    /// Scheme used with --send, overrides the config file
    #[arg(long)]
    scheme: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Some(path) = &args.config {
        set_config(DispatchConfig::from_file(path));
    }

    let header_text = match read_input(args.input.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("fail to read header block: {err}");
            return ExitCode::FAILURE;
        }
    };

    let analyzer = HeaderAnalyzer::new(header_text);
    let parsed = analyzer.parse();
    match parsed.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!("fail to render header block: {err}");
            return ExitCode::FAILURE;
        }
    }

    if !args.send {
        return ExitCode::SUCCESS;
    }

    let scheme = args.scheme.as_deref().unwrap_or(&config().scheme);
    let transport = match ClientTransport::new(config()) {
        Ok(transport) => transport,
        Err(err) => {
            tracing::error!("fail to build http client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = RequestDispatcher::new(transport);
    match dispatcher.send(&parsed, scheme) {
        Ok(status) => {
            println!("status: {status}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("request failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
