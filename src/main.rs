use clap::Parser;
use ioc_select::utils::{logger, validation::Validate};
use ioc_select::{AppendFileLog, CliArgs, ForwardError, Query, QueryForwarder};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ Query failed: {} (Kind: {:?}, Severity: {:?})",
            e,
            e.kind(),
            e.severity()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}: {}", e.user_friendly_message(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: &CliArgs) -> Result<(), ForwardError> {
    let config = args.load_config()?;
    config.validate()?;
    tracing::debug!("Forwarder config: {:?}", config);

    let log = AppendFileLog::from_config(&config);
    let forwarder = QueryForwarder::new(log, config)?;

    let query = Query::from(args.query.clone());
    let mut stdout = std::io::stdout().lock();
    forwarder.forward(&query, &mut stdout).await?;

    Ok(())
}
