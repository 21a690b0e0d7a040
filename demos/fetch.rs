// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Courier demo - run one service call from the command line
//!
//! ```text
//! cargo run --example fetch -- <url> [json|html|text|any]
//! ```

use std::env;
use std::process::ExitCode;

use courier::{AcceptType, Pipeline, ServiceDescription};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("courier=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let accept = match args.get(2).map(String::as_str) {
        None | Some("any") => AcceptType::Any,
        Some("json") => AcceptType::Json,
        Some("html") => AcceptType::Html,
        Some("text") => AcceptType::Text,
        Some(other) => AcceptType::Custom(other.to_string()),
    };

    match fetch(&args[1], accept).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn fetch(url: &str, accept: AcceptType) -> anyhow::Result<()> {
    let pipeline = Pipeline::new()?;
    let service = ServiceDescription::get(url).accept(accept);

    match pipeline.start(&service).await {
        Ok(response) => {
            println!("Status: {}", response.status_code);
            println!("Content-Type: {}", response.content_type().unwrap_or("-"));
            match response.parsed_object {
                Some(ref object) => println!("{}", serde_json::to_string_pretty(object)?),
                None => println!("{}", response.text_lossy()),
            }
            Ok(())
        }
        Err(err) => {
            if let Some(envelope) = err.envelope() {
                eprintln!("Status: {}", envelope.status_code);
                eprintln!("{}", envelope.text_lossy());
            }
            Err(err.into())
        }
    }
}

fn print_usage() {
    println!(
        r#"Courier - Declarative HTTP Service Calls

USAGE:
    fetch <URL> [ACCEPT]

ACCEPT:
    any     Accept any content type (default)
    json    Expect and parse application/json
    html    Expect text/html
    text    Expect text/plain
    <mime>  Expect a custom media type

ENVIRONMENT:
    RUST_LOG    Log filter, e.g. courier=debug"#
    );
}
