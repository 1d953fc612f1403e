use anyhow::Context;

use stockkeep_cli::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("invalid configuration")?;
    stockkeep_observability::init_with(config.log_format);

    tracing::info!(warehouse_id = %config.warehouse_id, manager = %config.manager, "starting demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let (warehouse, _report) =
        stockkeep_cli::run(&config, &mut out).context("failed to write stock report")?;

    tracing::info!(products = warehouse.len(), "demo finished");
    Ok(())
}
