use clap::Parser;
use page_enhancer::domain::model::{self, Element, Page};
use page_enhancer::domain::ports::PageStore;
use page_enhancer::utils::{logger, validation::Validate};
use page_enhancer::{
    CliConfig, ConsoleNotifier, EnhanceEngine, LocalPageStore, PageEnhancer, SubmitOutcome,
    TokioClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting page-enhancer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = LocalPageStore::new(".".to_string());
    let page = match &config.page {
        Some(path) => store.load_page(path).await?,
        None => {
            tracing::info!("No page snapshot given, using the sample catalog page");
            sample_page(&config.card_class, &config.price_field)
        }
    };
    let page = model::shared(page);

    let enhancer = PageEnhancer::new(TokioClock, ConsoleNotifier, config.clone());
    let engine = EnhanceEngine::new(enhancer);

    let report = engine.run(&page).await?;
    println!(
        "✅ Page enhanced: {} cards revealed, submit guard {}",
        report.cards_scheduled,
        if report.guard_installed {
            "installed"
        } else {
            "not installed"
        }
    );

    if let Some(price) = &config.submit_price {
        page.lock().await.set_value(&config.price_field, price)?;
        match engine.submit(&page).await? {
            SubmitOutcome::Proceed => println!("✅ Submission accepted"),
            SubmitOutcome::Blocked { reason } => {
                println!("⛔ Submission blocked: {}", reason.message());
            }
        }
    }

    if let Some(path) = &config.dump_final {
        let page = page.lock().await;
        store.store_page(path, &page).await?;
        tracing::info!("Final page state written to {}", path);
    }

    Ok(())
}

fn sample_page(card_class: &str, price_field: &str) -> Page {
    let mut elements = vec![Element::new("header")];
    for i in 1..=4 {
        elements.push(
            Element::new("div")
                .with_class(card_class)
                .with_id(format!("lesson-{}", i)),
        );
    }
    elements.push(Element::new("form"));
    elements.push(Element::new("input").with_id(price_field));
    Page::new(elements)
}
