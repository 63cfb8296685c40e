use clap::Parser;
use fhir_json_cli::{Args, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = format!(
        "fhir_json_cli={level},fhir_model={level},fhir_common={level}",
        level = args.log_level
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .init();

    run(&args)
}
