mod demo;

use gildedrose_observability::ObservabilityConfig;

fn main() -> anyhow::Result<()> {
    let config = ObservabilityConfig::from_env()?;
    gildedrose_observability::init(&config);

    println!("OMGHAI!");

    let mut inn = demo::stocked_inn();
    inn.one_day();

    tracing::debug!(inn_id = %inn.id_typed(), day = inn.day(), "advanced one day");
    for item in inn.items() {
        tracing::debug!(category = %item.category(), "{item}");
    }

    Ok(())
}
