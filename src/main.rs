use anyhow::{bail, Context};
use clap::Parser;
use inquire::error::InquireResult;

mod app;
mod batch;
mod catalog;
mod cli;
mod config;
mod export;
mod history;
mod query;
mod storage;
#[cfg(test)]
mod tests;
mod validation;

use catalog::InputKind;
use cli::{ExportFormat, FavoritesAction, HistoryAction, KindArg};
use history::SearchEntry;

fn export_entries(entries: &[SearchEntry], format: ExportFormat) -> anyhow::Result<String> {
    match format {
        ExportFormat::Csv => export::to_csv(entries),
        ExportFormat::Json => export::to_json(entries),
    }
}

fn confirm(yes: bool, prompt: &str) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }

    match inquire::prompt_confirmation(prompt) {
        InquireResult::Ok(answer) => Ok(answer),
        InquireResult::Err(err) => bail!("An error occurred: {}", err),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();

    catalog::verify();

    match args.command {
        cli::Command::Search {
            operator,
            term,
            date,
            category,
            favorite,
        } => {
            let mut app = app::App::load()?;
            let entry = app.run_search(&operator, &term, date, category)?;

            println!("{}", entry.url);

            if favorite {
                if app.add_favorite(entry) {
                    println!("Added to favorites");
                } else {
                    println!("Already in favorites");
                }
            }

            Ok(())
        }

        cli::Command::Operators { kind } => {
            let specs = match kind {
                Some(KindArg::Url) => catalog::by_input_kind(InputKind::Url),
                Some(KindArg::Keyword) => catalog::by_input_kind(InputKind::Keyword),
                None => catalog::all().to_vec(),
            };

            println!("{}", serde_json::to_string_pretty(&specs)?);
            Ok(())
        }

        cli::Command::Show { operator } => {
            let spec = catalog::lookup(&operator);
            println!("{}", serde_json::to_string_pretty(&spec)?);

            let suggestions = catalog::suggestions(&operator);
            if !suggestions.is_empty() {
                println!("Suggestions: {}", suggestions.join(", "));
            }

            Ok(())
        }

        cli::Command::Categories {} => {
            println!("{}", serde_json::to_string_pretty(&catalog::categories())?);
            Ok(())
        }

        cli::Command::History { limit, action } => {
            let mut app = app::App::load()?;

            match action {
                None => {
                    let entries = match limit {
                        Some(limit) if limit < app.history.len() => {
                            &app.history[app.history.len() - limit..]
                        }
                        _ => &app.history[..],
                    };
                    println!("{}", serde_json::to_string_pretty(entries)?);
                    Ok(())
                }

                Some(HistoryAction::Clear { yes }) => {
                    let count = app.history.len();
                    if count == 0 {
                        println!("History is already empty");
                        return Ok(());
                    }

                    if confirm(
                        yes,
                        &format!("You are about to delete {count} history entries. Are you sure?"),
                    )? {
                        app.clear_history();
                        println!("{count} entries deleted");
                    }
                    Ok(())
                }

                Some(HistoryAction::Export { format }) => {
                    print!("{}", export_entries(&app.history, format)?);
                    Ok(())
                }
            }
        }

        cli::Command::Favorites { action } => {
            let mut app = app::App::load()?;

            match action {
                None => {
                    println!("{}", serde_json::to_string_pretty(&app.favorites)?);
                    Ok(())
                }

                Some(FavoritesAction::Remove { index }) => {
                    let removed = app.remove_favorite(index)?;
                    println!(
                        "Removed {}",
                        query::format_for_display(&removed.operator, &removed.query)
                    );
                    Ok(())
                }

                Some(FavoritesAction::Clear { yes }) => {
                    let count = app.favorites.len();
                    if count == 0 {
                        println!("No favorites saved");
                        return Ok(());
                    }

                    if confirm(
                        yes,
                        &format!("You are about to delete {count} favorites. Are you sure?"),
                    )? {
                        app.clear_favorites();
                        println!("{count} favorites deleted");
                    }
                    Ok(())
                }

                Some(FavoritesAction::Export { format }) => {
                    print!("{}", export_entries(&app.favorites, format)?);
                    Ok(())
                }
            }
        }

        cli::Command::Batch {
            operator,
            file,
            shuffle,
        } => {
            let raw = if file == "-" {
                std::io::read_to_string(std::io::stdin()).context("couldnt read stdin")?
            } else {
                std::fs::read_to_string(&file).with_context(|| format!("couldnt read {file}"))?
            };

            let mut app = app::App::load()?;

            let queued = match app.queue_batch(&operator, &raw) {
                Ok(queued) => queued,
                Err(err) => bail!("{err}"),
            };

            if shuffle {
                app.batch_queue.shuffle();
            }

            let entries = app.run_batch();
            for entry in &entries {
                println!("{}", entry.url);
            }

            log::info!("ran {queued} batch queries with {operator}");
            Ok(())
        }
    }
}
