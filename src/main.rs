use env_logger::Env;
use retroscrape::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Cron-friendly: a missing cookie or path list is logged, not a crash
    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to read configuration: {}", e);
            log::error!(
                "Set RETROPARTIDAS_SESSION_COOKIE and RETROPARTIDAS_URL_PATHS before running"
            );
            return Ok(());
        }
    };

    log::info!("Starting the paginated scraping process");
    let summary = run(&settings).await?;

    if settings.fail_on_error && summary.sections_failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
