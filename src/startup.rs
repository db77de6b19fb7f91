use anyhow::Context;

use crate::{
    configuration::Settings,
    dal::CsvSink,
    domain::{CITIES, INDUSTRIES},
    services::{harvest, HarvestOptions, PlacesClient, RunSummary},
};

pub async fn run(settings: Settings) -> anyhow::Result<RunSummary> {
    let options = HarvestOptions::from(&settings);
    let client = PlacesClient::new(settings.api_key);

    let mut sink = CsvSink::create(&settings.output_file, settings.output_schema)
        .with_context(|| format!("Failed to create {}", settings.output_file.display()))?;

    log::info!(
        "Writing {:?} schema to {} ({} cities x {} industries, up to {} results per search)",
        settings.output_schema,
        settings.output_file.display(),
        CITIES.len(),
        INDUSTRIES.len(),
        options.max_results
    );

    let summary = harvest(&client, &options, CITIES, INDUSTRIES, &mut sink).await?;
    sink.flush()?;
    log::info!(
        "Wrote {} rows to {}",
        sink.rows_written(),
        settings.output_file.display()
    );

    Ok(summary)
}
