//! Search-as-you-type REPL.
//!
//! Every plain line is treated as the new query text, the way a search field
//! fires a search per edit. Lines starting with `:` are commands that act on
//! the current suggestions and the favorites list.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;

use tempo_run::config::Config;
use tempo_run::error::{Error, Result as AppResult, ResultExt};
use tempo_run::spotify::SpotifyApi;
use tempo_run::{FavoritesStore, SearchFilter, SearchSession};

use super::connect;
use super::search::format_result_line;

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReplCommand {
    /// Replace the query text (may be empty)
    Query(String),
    /// Toggle selection of suggestion N (1-based)
    Select(usize),
    /// Add every selected suggestion to favorites
    AddSelected,
    /// Drop the current selection
    ClearSelection,
    /// Add suggestion N directly
    Favorite(usize),
    /// Remove favorite N (1-based)
    Remove(usize),
    /// Show favorites
    List,
    /// Change the suggestion filter
    Filter(SearchFilter),
    /// Show favorite track and artist ids
    Ids,
    /// Tempo of suggestion N
    Tempo(usize),
    Help,
    Quit,
}

impl ReplCommand {
    pub(crate) fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(ReplCommand::Query(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match name {
            "sel" | "s" => Ok(ReplCommand::Select(parse_position(arg)?)),
            "add" | "a" => Ok(ReplCommand::AddSelected),
            "clear" | "c" => Ok(ReplCommand::ClearSelection),
            "fav" | "f" => Ok(ReplCommand::Favorite(parse_position(arg)?)),
            "rm" | "r" => Ok(ReplCommand::Remove(parse_position(arg)?)),
            "list" | "l" => Ok(ReplCommand::List),
            "filter" => {
                let value = arg.ok_or_else(|| Error::invalid_input("filter needs a value"))?;
                value
                    .parse()
                    .map(ReplCommand::Filter)
                    .map_err(Error::invalid_input)
            }
            "ids" => Ok(ReplCommand::Ids),
            "tempo" | "bpm" => Ok(ReplCommand::Tempo(parse_position(arg)?)),
            "help" | "h" | "?" => Ok(ReplCommand::Help),
            "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
            other => Err(Error::invalid_input(format!("unknown command ':{}'", other))),
        }
    }
}

/// Parse a 1-based position into a 0-based index
fn parse_position(arg: Option<&str>) -> AppResult<usize> {
    let arg = arg.ok_or_else(|| Error::invalid_input("expected a number"))?;
    match arg.parse::<usize>() {
        Ok(0) | Err(_) => Err(Error::invalid_input(format!(
            "'{}' is not a position (use 1, 2, ...)",
            arg
        ))),
        Ok(n) => Ok(n - 1),
    }
}

/// Run the interactive session until EOF or `:quit`
pub fn cmd_interactive(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    rt.block_on(interactive(config))
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    let catalog = Arc::new(connect(config).await?);
    let favorites = Arc::new(FavoritesStore::new());
    let favorites_rx = favorites.subscribe();
    let mut session = SearchSession::new(catalog, Arc::clone(&favorites));

    println!("Type to search. :help for commands, :quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.with_context("while reading input")? {
        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        if command == ReplCommand::Quit {
            break;
        }
        if let Err(e) = execute(&mut session, command).await {
            eprintln!("{}", e);
        }

        for snapshot in favorites_rx.try_iter() {
            tracing::debug!(count = snapshot.len(), "Favorites changed");
        }
    }

    Ok(())
}

async fn execute<A: SpotifyApi>(
    session: &mut SearchSession<A>,
    command: ReplCommand,
) -> AppResult<()> {
    match command {
        ReplCommand::Query(query) => {
            session.update_query(&query).await;
            print_suggestions(session);
        }
        ReplCommand::Select(index) => {
            let item = suggestion(session, index)?;
            let selected = session.toggle_selection(&item.id);
            println!(
                "{} {} ({} selected)",
                if selected { "✓" } else { "○" },
                item.name,
                session.selection_count()
            );
        }
        ReplCommand::AddSelected => {
            if session.selection_count() == 0 {
                println!("Nothing selected.");
            } else {
                let added = session.commit_selection();
                println!("✓ Added {} to favorites", added);
            }
        }
        ReplCommand::ClearSelection => {
            session.clear_selection();
            println!("○ Selection cleared");
        }
        ReplCommand::Favorite(index) => {
            let item = suggestion(session, index)?;
            if session.favorites().add(item.clone()) {
                println!("✓ Added {}", item.name);
            } else {
                println!("{} is already a favorite", item.name);
            }
        }
        ReplCommand::Remove(index) => {
            let removed = session
                .favorites()
                .remove_at(index)
                .with_context("while removing favorite")?;
            println!("✗ Removed {}", removed.name);
        }
        ReplCommand::List => print_favorites(session.favorites()),
        ReplCommand::Filter(filter) => {
            session.set_filter(filter);
            print_suggestions(session);
        }
        ReplCommand::Ids => {
            let favorites = session.favorites();
            println!("Favorite track ids:  {:?}", favorites.track_ids());
            println!("Favorite artist ids: {:?}", favorites.artist_ids());
        }
        ReplCommand::Tempo(index) => {
            let item = suggestion(session, index)?;
            match session.catalog().track_tempo(&item.id).await {
                Some(tempo) => println!("{}: {:.0} BPM", item.name, tempo),
                None => println!("✗ Failed to get BPM for {}", item.name),
            }
        }
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => {}
    }
    Ok(())
}

fn suggestion<A: SpotifyApi>(
    session: &SearchSession<A>,
    index: usize,
) -> AppResult<tempo_run::SearchResult> {
    session.suggestions().get(index).cloned().ok_or_else(|| {
        Error::invalid_input(format!("no suggestion number {}", index + 1))
    })
}

fn print_suggestions<A: SpotifyApi>(session: &SearchSession<A>) {
    let suggestions = session.suggestions();
    if suggestions.is_empty() {
        println!("(no suggestions)");
        return;
    }

    println!("Suggestions [{}]:", session.filter());
    for (i, item) in suggestions.iter().enumerate() {
        let mark = if session.is_selected(&item.id) { "✓" } else { " " };
        println!("{} {}", mark, format_result_line(i + 1, item));
    }
}

fn print_favorites(favorites: &FavoritesStore) {
    let items = favorites.items();
    if items.is_empty() {
        println!("No favorites yet.");
        return;
    }

    println!("Favorites ({}):", items.len());
    for (i, item) in items.iter().enumerate() {
        println!("  {}", format_result_line(i + 1, item));
    }
}

fn print_help() {
    println!("Any text          search for it (empty line clears suggestions)");
    println!(":sel N            select/deselect suggestion N");
    println!(":add              add selected suggestions to favorites");
    println!(":clear            clear the selection");
    println!(":fav N            add suggestion N to favorites");
    println!(":rm N             remove favorite N");
    println!(":list             show favorites");
    println!(":filter X         all, tracks or artists");
    println!(":ids              show favorite track and artist ids");
    println!(":tempo N          tempo of suggestion N");
    println!(":quit             exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_query() {
        assert_eq!(
            ReplCommand::parse("daft punk\n").unwrap(),
            ReplCommand::Query("daft punk".to_string())
        );
        assert_eq!(
            ReplCommand::parse("").unwrap(),
            ReplCommand::Query(String::new())
        );
    }

    #[test]
    fn test_positions_are_one_based() {
        assert_eq!(ReplCommand::parse(":sel 1").unwrap(), ReplCommand::Select(0));
        assert_eq!(ReplCommand::parse(":rm 3").unwrap(), ReplCommand::Remove(2));
        assert!(ReplCommand::parse(":rm 0").is_err());
        assert!(ReplCommand::parse(":fav x").is_err());
        assert!(ReplCommand::parse(":sel").is_err());
    }

    #[test]
    fn test_filter_command() {
        assert_eq!(
            ReplCommand::parse(":filter artists").unwrap(),
            ReplCommand::Filter(SearchFilter::Artists)
        );
        assert!(ReplCommand::parse(":filter genres").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = ReplCommand::parse(":dance").unwrap_err();
        assert!(err.to_string().contains(":dance"));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(ReplCommand::parse(":add").unwrap(), ReplCommand::AddSelected);
        assert_eq!(ReplCommand::parse(":clear").unwrap(), ReplCommand::ClearSelection);
        assert_eq!(ReplCommand::parse(":q").unwrap(), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse(":ids").unwrap(), ReplCommand::Ids);
    }
}
