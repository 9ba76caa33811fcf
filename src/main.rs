use clap::Parser;
use unfurl_proxy::utils::error::ErrorSeverity;
use unfurl_proxy::utils::{logger, validation::Validate};
use unfurl_proxy::{server, CliConfig, Settings, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置：有 --config 時以 TOML 為準
    let (settings, verbose, json_logs) = match &cli.config {
        Some(path) => {
            let toml = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            if let Err(e) = toml.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
            let verbose = cli.verbose || toml.verbose();
            let json_logs = cli.log_json || toml.json_logs();
            (Settings::from_provider(&toml), verbose, json_logs)
        }
        None => {
            if let Err(e) = cli.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
            (Settings::from_provider(&cli), cli.verbose, cli.log_json)
        }
    };

    // 初始化日誌
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting unfurl-proxy");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = server::serve(settings).await {
        tracing::error!(
            "❌ Server stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
