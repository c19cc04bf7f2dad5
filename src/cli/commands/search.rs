//! One-shot catalog commands.

use tokio::runtime::Runtime;

use tempo_run::config::Config;
use tempo_run::{SearchFilter, SearchResult};

use super::connect;

/// Search the catalog once and print the results
pub fn cmd_search(
    rt: &Runtime,
    config: &Config,
    query: &str,
    filter: SearchFilter,
    json: bool,
) -> anyhow::Result<()> {
    rt.block_on(search(config, query, filter, json))
}

async fn search(
    config: &Config,
    query: &str,
    filter: SearchFilter,
    json: bool,
) -> anyhow::Result<()> {
    let client = connect(config).await?;
    let results = filter.apply(&client.search(query).await);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for {:?}.", query);
        return Ok(());
    }

    println!("Results for {:?} ({}):", query, filter);
    println!();
    for (i, result) in results.iter().enumerate() {
        println!("{}", format_result_line(i + 1, result));
    }
    Ok(())
}

/// Print the tempo of a track
pub fn cmd_tempo(rt: &Runtime, config: &Config, track_id: &str) -> anyhow::Result<()> {
    rt.block_on(tempo(config, track_id))
}

async fn tempo(config: &Config, track_id: &str) -> anyhow::Result<()> {
    let client = connect(config).await?;
    match client.track_tempo(track_id).await {
        Some(tempo) => println!("{}: {:.0} BPM", track_id, tempo),
        None => println!("✗ Failed to get BPM for {}", track_id),
    }
    Ok(())
}

/// One numbered result line: `  3. Name - Artist [track] (id)`
pub(crate) fn format_result_line(number: usize, result: &SearchResult) -> String {
    let artist = result
        .artist_name
        .as_deref()
        .map(|a| format!(" - {}", a))
        .unwrap_or_default();
    format!(
        "{:>3}. {}{} [{}] ({})",
        number, result.name, artist, result.kind, result.id
    )
}
