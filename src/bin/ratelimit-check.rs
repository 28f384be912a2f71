//! Admission-style CLI: validate the rate-limit annotations on an ingress
//! resource file and print the resulting configuration.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ingress_ratelimit::ingress::loader;
use ingress_ratelimit::{RateLimitParser, DEFAULT_ANNOTATION_PREFIX};

#[derive(Parser)]
#[command(name = "ratelimit-check")]
#[command(about = "Validate rate-limit annotations on an ingress resource file", long_about = None)]
struct Cli {
    /// Ingress resource file (JSON, or TOML with a .toml extension).
    file: PathBuf,

    /// Annotation key namespace prefix.
    #[arg(short, long, default_value = DEFAULT_ANNOTATION_PREFIX)]
    prefix: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingress_ratelimit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let ingress = match loader::load_ingress(&cli.file) {
        Ok(ingress) => ingress,
        Err(e) => {
            tracing::error!(file = %cli.file.display(), error = %e, "Failed to load resource");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        name = %ingress.metadata.name,
        namespace = %ingress.metadata.namespace,
        prefix = %cli.prefix,
        "Resource loaded"
    );

    let parser = RateLimitParser::new(cli.prefix.as_str());
    match parser.parse(&ingress) {
        Ok(rate_limit) => match serde_json::to_string_pretty(&rate_limit) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize result");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!(
                name = %ingress.metadata.name,
                error = %e,
                "Rate-limit annotations rejected"
            );
            ExitCode::FAILURE
        }
    }
}
