use clap::Parser;
use roman_convert::app::{Runner, Task};
use roman_convert::utils::{error::AppError, logger, validation::Validate};
use roman_convert::{CliConfig, ConvertUseCase, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.json_logs());
    tracing::debug!("CLI config: {:?}", cli);

    let task = cli.task();
    let runner = Runner::new(ConvertUseCase::new(), cli.run_settings(&config));
    tracing::debug!("Run settings: {:?}", runner.settings());

    if task == Task::Batch {
        tracing::info!("Reading conversion requests from stdin");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    match runner.run(&task, stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(summary) if summary.failed == 0 => {}
        Ok(summary) => {
            tracing::debug!(
                "{} of {} conversions failed",
                summary.failed,
                summary.processed
            );
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn load_config(cli: &CliConfig) -> Result<TomlConfig, AppError> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
