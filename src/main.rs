use clap::Parser;
use pc_stock::app::commands;
use pc_stock::config::Command;
use pc_stock::core::seed::ensure_seeded;
use pc_stock::utils::error::{ErrorSeverity, StoreError};
use pc_stock::utils::paint::Painter;
use pc_stock::utils::{logger, validation::Validate};
use pc_stock::{CliConfig, ConfigProvider, Inventory, InventoryOptions, MenuExit, MenuSession};
use pc_stock::{StoreConfig, TextFile, TextFileStore};

fn main() {
    let cli = CliConfig::parse();

    let mut config = match StoreConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let verbose = cli.verbose || config.verbose();
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting pc-stock");
    match StoreConfig::source(cli.config.as_deref()) {
        Some(path) => tracing::info!("📁 Loaded configuration from: {}", path),
        None => tracing::debug!("No configuration file, using defaults"),
    }
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!(
            "❌ pc-stock failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 3,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig, config: &StoreConfig) -> Result<(), StoreError> {
    let painter = Painter::new(config.color_mode());
    let file = TextFile::new(config.inventory_path())?;
    let command = cli.command();

    if let Command::Seed = command {
        if ensure_seeded(&file)? {
            println!("✅ Wrote starter inventory to {}", file.path().display());
        } else {
            println!("📁 {} already exists, left unchanged", file.path().display());
        }
        return Ok(());
    }

    if config.seed_if_missing() {
        ensure_seeded(&file)?;
    }

    let store = TextFileStore::new(file);
    let mut inventory = Inventory::open(store, InventoryOptions::from_config(config))?;

    match command {
        Command::Menu => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut menu = MenuSession::new(inventory, stdin.lock(), stdout.lock(), painter);
            if menu.run()? == MenuExit::EndOfInput {
                tracing::info!("👋 Input closed, leaving without saving");
            }
        }
        other => {
            let stdout = std::io::stdout();
            commands::execute(&mut inventory, &other, &mut stdout.lock(), &painter)?;
        }
    }

    Ok(())
}
