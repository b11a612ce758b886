use clap::Parser;
use service_catalog::core::{catalog, validator};
use service_catalog::utils::{logger, validation::Validate};
use service_catalog::{CardSize, CliConfig, SiteConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting catalog-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Some(path) = &config.config {
        let site = match SiteConfig::from_file(path) {
            Ok(site) => site,
            Err(e) => {
                tracing::error!("Failed to load site config {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        };

        if let Err(e) = site.validate_config() {
            tracing::error!("Site config validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        tracing::info!("Site config OK: {}", site.site.name);
        println!(
            "✅ Site config OK: {} (threshold {}, root margin \"{}\")",
            site.site.name, site.observer.threshold, site.observer.root_margin
        );
    }

    let candidate = serde_json::to_value(catalog::get_all())?;
    match validator::assert_valid(&candidate) {
        Ok(services) => {
            let large = services.iter().filter(|s| s.size == CardSize::Large).count();
            println!(
                "✅ Catalog OK: {} services ({} large, {} normal)",
                services.len(),
                large,
                services.len() - large
            );

            if config.json {
                println!("{}", serde_json::to_string_pretty(&services)?);
            }
        }
        Err(e) => {
            tracing::error!("Catalog validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
