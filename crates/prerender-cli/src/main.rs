//! Prerender - command-line driver
//!
//! Loads a component bundle and a list of render requests, renders them in
//! one batch and prints the results as JSON.

mod args;

use std::io::Read;

use anyhow::{Context, Result};
use prerender::{RenderInput, Renderer};
use tracing_subscriber::EnvFilter;

use args::{Args, USAGE};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let bundle = std::fs::read_to_string(&args.bundle)
        .with_context(|| format!("failed to read bundle {}", args.bundle.display()))?;
    let requests = match &args.requests {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read requests {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read requests from stdin")?;
            buf
        }
    };
    let input: RenderInput = serde_json::from_str(&requests).context("invalid render requests")?;

    tracing::info!("Prerender v{} rendering {}", prerender::VERSION, args.bundle.display());
    let renderer = Renderer::new(bundle, args.bundle.display().to_string(), args.config);

    let json = if args.keyed {
        let requests = match input {
            RenderInput::Single(request) => vec![request],
            RenderInput::Batch(requests) => requests,
        };
        serde_json::to_string_pretty(&renderer.render_keyed(&requests)?)?
    } else {
        serde_json::to_string_pretty(&renderer.render(input)?)?
    };
    println!("{json}");

    Ok(())
}
