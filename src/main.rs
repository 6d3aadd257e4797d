use clap::Parser;
use numerology_grid::adapters::notifier::notifier_from_config;
use numerology_grid::app::render::render_reading;
use numerology_grid::config::toml_config::AppConfig;
use numerology_grid::utils::error::ErrorSeverity;
use numerology_grid::utils::{logger, validation::Validate};
use numerology_grid::{
    CliConfig, CustomDetails, FormInput, NumerologyEngine, NumerologyError, Overrides, Session,
    Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting numerology CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Reading failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

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

async fn run(config: &CliConfig) -> Result<(), NumerologyError> {
    let file = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = AppConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let overrides = Overrides {
        catalog: config.catalog,
        product_base_url: config.product_base_url.clone(),
        notify_endpoint: config.notify_endpoint.clone(),
    };
    let settings = Settings::resolve(file.as_ref(), &overrides)?;

    let form = FormInput {
        name: config.name.clone(),
        email: config.email.clone(),
        dob: config.dob.clone(),
        sex: config.sex,
    };
    let session = Session::new().calculate(&form, &NumerologyEngine::new(), &settings)?;
    let Some(reading) = session.reading() else {
        return Ok(());
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&reading.report)?);
    } else {
        print!("{}", render_reading(reading));
    }

    if !config.request_custom {
        return Ok(());
    }

    let open = session.open_custom_form()?;
    let details = CustomDetails {
        phone: config.phone.clone(),
        problems: config.problems.clone(),
    };
    let notifier = notifier_from_config(&settings);
    let (_, message) = open.submit_custom(&details, notifier.as_ref()).await?;

    if config.json {
        eprintln!("✅ {}", message);
    } else {
        println!();
        println!("✅ {}", message);
    }

    Ok(())
}
