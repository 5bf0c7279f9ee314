use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    Capabilities, ClipboardWriter, ControllerConfig, ConversionController, HttpConversionService,
    LogFeedbackSink, UiEvent, UnavailableClipboard,
};
use shared::domain::Target;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod clipboard;
mod commands;
mod surface;

use clipboard::SystemClipboard;
use commands::{parse_line, Command, InputBuffer, HELP};
use surface::TerminalSurface;

#[derive(Parser, Debug)]
#[command(about = "Rewrite text for a business audience")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// Initial target: 상사, 타팀 동료 or 고객.
    #[arg(long, default_value = "상사")]
    target: Target,
    /// Do not touch the system clipboard; /copy will report a failure.
    #[arg(long)]
    no_clipboard: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let service = HttpConversionService::new(&args.server_url)
        .with_context(|| format!("invalid server url '{}'", args.server_url))?;
    let clipboard: Arc<dyn ClipboardWriter> = if args.no_clipboard {
        Arc::new(UnavailableClipboard)
    } else {
        Arc::new(SystemClipboard::default())
    };

    let (controller, events, rx) = ConversionController::new(
        Capabilities {
            surface: Box::new(TerminalSurface::new(std::io::stdout())),
            service: Arc::new(service),
            clipboard,
            feedback: Arc::new(LogFeedbackSink),
        },
        ControllerConfig {
            default_target: args.target,
            ..ControllerConfig::default()
        },
    );
    let controller_task = tokio::spawn(controller.run(rx));

    info!(server_url = %args.server_url, conversion_target = %args.target, "desktop client started");
    println!("{HELP}");
    println!("대상: {}", args.target);

    let mut input = InputBuffer::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        match &command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Target(target) => println!("대상: {target}"),
            _ => {}
        }

        if let Some(event) = input.event_for(command) {
            events
                .send(event)
                .context("conversion controller stopped unexpectedly")?;
        }
    }

    if events.send(UiEvent::PageClosed).is_err() {
        info!("conversion controller already stopped");
    }
    controller_task.await?;
    Ok(())
}
