mod cli;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Commands};
use comick_extension::prelude::*;
use comick_extension::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    let config = ComickConfig::load(cli.config.as_deref())?;
    tracing::debug!(api_url = %config.api_url, timeout_ms = config.timeout_ms, "comick: config loaded");
    let webview = ReqwestWebview::new(&config)?;
    let client = ComickClient::with_api_url(webview, config.api_url.clone());

    match cli.command {
        Commands::Series { id, chapters } => {
            if chapters {
                let (series, chapters) = futures::future::try_join(client.get_series(&id), client.get_chapters(&id)).await?;
                print_json(&serde_json::json!({ "series": series, "chapters": chapters }))?;
            } else {
                print_json(&client.get_series(&id).await?)?;
            }
        }
        Commands::Chapters { id } => {
            let chapters = client.get_chapters(&id).await?;
            tracing::info!(count = chapters.len(), "fetched chapters");
            print_json(&chapters)?;
        }
        Commands::Pages { series_id, chapter_id } => {
            let data = client.get_page_requester_data(&series_id, &chapter_id).await?;
            print_json(&client.get_page_urls(&data))?;
        }
        Commands::Search { text, filters } => {
            let values = filters.to_filter_values();
            let result = client.get_search(text.as_deref().unwrap_or_default(), filters.page, &values).await?;
            print_json(&result)?;
        }
        Commands::Directory { filters } => {
            let values = filters.to_filter_values();
            print_json(&client.get_directory(filters.page, &values).await?)?;
        }
        Commands::Filters => print_json(&client.get_filter_options())?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
