use clap::Parser;
use project_init::domain::model::LogFormat;
use project_init::utils::logger;
use project_init::{AppConfig, CliConfig, Greeter, Launcher};

fn main() {
    let cli = CliConfig::parse();

    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            // 設定錯誤時改用預設日誌格式回報
            let format = cli.log_format.unwrap_or(LogFormat::Compact);
            if logger::init_cli_logger("info", cli.verbose, format).is_err() {
                eprintln!("Fatal error: {}", e);
            }
            tracing::error!("Fatal error: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if let Err(e) = logger::init_cli_logger(&config.log_level, config.verbose, config.log_format) {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
    tracing::debug!("Resolved config: {:?}", config);

    let launcher = Launcher::new(config.project_name.as_str());
    let mut delegate = Greeter::stdout(config.project_name.as_str());

    let outcome = launcher.launch(&mut delegate);
    std::process::exit(outcome.exit_code());
}
