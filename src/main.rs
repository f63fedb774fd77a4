use clap::Parser;
use felines::utils::error::ErrorSeverity;
use felines::utils::logger::{self, LogFormat};
use felines::utils::validation::Validate;
use felines::{
    run_session, BuiltinCatalog, CatalogSource, CliConfig, FelineError, Session, TerminalPresenter,
    TomlConfig,
};
use tokio::io::BufReader;

fn exit_code(e: &FelineError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: FelineError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_logger(LogFormat::from_flag(config.json_logs), config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    // 載入目錄
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(file_config) => Some(file_config),
                Err(e) => fail(e),
            }
        }
        None => None,
    };

    let catalog = match &file_config {
        Some(file_config) => file_config.catalog(),
        None => BuiltinCatalog.catalog(),
    };
    let catalog = catalog.unwrap_or_else(|e| fail(e));

    let file_seconds = file_config.as_ref().and_then(TomlConfig::auto_advance_seconds);
    let settings = config.session_settings(file_seconds);
    let (session, events) = Session::start(catalog, settings).unwrap_or_else(|e| fail(e));

    let mut presenter = TerminalPresenter::new(std::io::stdout());
    let input = BufReader::new(tokio::io::stdin());

    match run_session(session, events, input, &mut presenter).await {
        Ok(summary) => {
            if !summary.liked.is_empty() {
                println!("You liked: {}", summary.liked.join(", "));
            }
            println!("Bye! 🐾");
        }
        Err(e) => fail(e),
    }

    // The blocking stdin reader would otherwise hold the runtime open until the next line.
    std::process::exit(0);
}
