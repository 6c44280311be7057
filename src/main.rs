use clap::Parser;
use hello::utils::{logger, validation::Validate};
use hello::{CliConfig, HelloApp, HelloUtil, Printer};

fn main() {
    let config = CliConfig::parse();

    // 日誌只寫到 stderr
    logger::init_cli_logger(config.filter_directives(), config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置後執行
    let result = config.validate().and_then(|()| {
        let mut app = HelloApp::new(HelloUtil, Printer::stdout());
        app.run()
    });

    if let Err(e) = result {
        // 根據錯誤嚴重程度決定退出碼
        tracing::error!("❌ hello failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
