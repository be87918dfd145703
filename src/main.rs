use clap::Parser;
use roster_etl::domain::ports::ConfigProvider;
use roster_etl::utils::error::ErrorSeverity;
use roster_etl::utils::{logger, validation::Validate};
use roster_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, RosterConfig, RosterPipeline};

// Exit codes: 0 success (recoverable warnings are logged, not fatal),
// 1 processing failure, 2 configuration rejected, 3 output write failure.
fn exit_code(error: &EtlError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: &EtlError) -> ! {
    tracing::error!(
        "❌ Roster import failed: {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());

    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());

    std::process::exit(exit_code(error).max(1));
}

fn run<C: ConfigProvider + Validate + std::fmt::Debug>(config: C, monitor_enabled: bool) {
    if let Err(error) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", error);
        fail(&error);
    }

    if monitor_enabled {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let storage = LocalStorage::default();
    let pipeline = RosterPipeline::new(storage, config);
    let mut engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(report) => {
            if report.diagnostics.is_empty() {
                tracing::info!("✅ Roster import completed successfully!");
            } else {
                tracing::info!(
                    "✅ Roster import completed with {} warning(s)",
                    report.diagnostics.len()
                );
            }
            println!("✅ Roster database saved to: {}", report.output_path);
        }
        Err(error) => fail(&error),
    }
}

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting roster-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(config_path) => {
            let config = match RosterConfig::from_file(&config_path) {
                Ok(config) => config,
                Err(error) => {
                    tracing::error!("❌ Could not load '{}': {}", config_path, error);
                    fail(&error);
                }
            };
            let monitor_enabled = cli.monitor || config.monitoring_enabled();
            run(config, monitor_enabled);
        }
        None => {
            let monitor_enabled = cli.monitor;
            run(cli, monitor_enabled);
        }
    }
}
