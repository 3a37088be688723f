// src/main.rs - Desktop entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vendora_oxide::catalog::{mock, CatalogStore};
use vendora_oxide::config::StorefrontConfig;
use vendora_oxide::error::Result;
use vendora_oxide::storefront::pricing::{price_range, stock_total};
use vendora_oxide::ui::App;

#[derive(Parser)]
#[command(
    name = "vendora",
    version = vendora_oxide::VERSION,
    about = "A cross-platform marketplace storefront",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    debug: bool,

    #[arg(long)]
    headless: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the storefront
    Run {
        #[arg(long)]
        headless: bool,
    },
    /// Summarize the seeded catalog
    Catalog,
    /// Validate configuration
    ValidateConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli);

    match &cli.command {
        Some(Commands::Run { headless }) => run_storefront(&cli, *headless || cli.headless),
        Some(Commands::Catalog) => show_catalog(),
        Some(Commands::ValidateConfig { config }) => {
            validate_config(config.clone().or(cli.config.clone()))
        }
        None => run_storefront(&cli, cli.headless),
    }
}

fn setup_logging(cli: &Cli) {
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<StorefrontConfig> {
    match path {
        Some(path) => StorefrontConfig::load_from_file(path),
        None => {
            let mut config = StorefrontConfig::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }
}

fn run_storefront(cli: &Cli, headless: bool) -> Result<()> {
    tracing::info!("Starting Vendora v{}", vendora_oxide::VERSION);

    let config = load_config(cli.config.as_ref())?;

    if headless {
        tracing::info!(
            auto_scroll_interval_ms = config.gallery.auto_scroll_interval_ms,
            currency = %config.currency.code,
            "running headless"
        );
        return show_catalog();
    }

    use dioxus::desktop::{Config, WindowBuilder};

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Vendora")
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1200.0, 800.0)),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);

    Ok(())
}

fn show_catalog() -> Result<()> {
    let store = CatalogStore::with_products(mock::demo_products());

    println!("Vendora Catalog");
    println!("===============");
    println!("Products: {}", store.len());
    println!();

    for product in store.products() {
        let price = match price_range(&product.variants) {
            Some(range) if !range.is_flat() => format!("${:.2} – ${:.2}", range.min, range.max),
            Some(range) => format!("${:.2}", range.min),
            None => format!("${:.2}", product.discount_price.unwrap_or(product.price)),
        };
        println!("{} ({})", product.name, product.id);
        println!("  price: {}", price);
        println!("  colors: {}", product.variant_names.len());
        println!("  variants: {}", product.variants.len());
        println!("  stock: {}", stock_total(&product));
        println!(
            "  media: {} images, {} videos{}",
            product.images.len(),
            product.product_videos.len(),
            if product.model_3d_url.normalized().is_some() {
                ", 3D model"
            } else {
                ""
            }
        );
    }

    Ok(())
}

fn validate_config(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let config = load_config(config_path.as_ref())?;

    println!("✅ Configuration is valid");
    println!("   Currency: {} ({})", config.currency.code, config.currency.symbol);
    println!(
        "   Auto-scroll interval: {}ms",
        config.gallery.auto_scroll_interval_ms
    );
    println!("   Carrier overrides: {}", config.carriers.len());

    Ok(())
}
