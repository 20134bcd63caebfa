//! Diagnostic CLI running the wiki lookups and printing plain text.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wikibot::BotConfig;
use wikibot::wiki_resolve::date::format_human;
use wikibot::wiki_resolve::{Article, LookupOutcome, WikiClient};

/// wikibot-lookup: query Wikipedia the way the bot does.
#[derive(Parser)]
#[command(name = "wikibot-lookup", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lookup to run.
    #[command(subcommand)]
    command: Command,
}

/// Available lookups. Text may carry a `lang=xx` tag.
#[derive(Subcommand)]
enum Command {
    /// Summary of the page with the given title.
    Summary { text: Vec<String> },
    /// Pages related to the given title.
    Related { text: Vec<String> },
    /// Near-match search.
    Search { text: Vec<String> },
    /// Summary with search fallback, plus related pages.
    Resolve { text: Vec<String> },
    /// Top viewed articles for a date (default: today, UTC-corrected).
    Top {
        text: Vec<String>,
        /// Include the Main Page and Special:Search entries.
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BotConfig::load(cli.config.as_deref())?;
    wikibot::logging::init(&config.log_filter);

    tracing::debug!(
        language = %config.wiki.default_language,
        timeout_seconds = config.wiki.timeout_seconds,
        "configuration loaded"
    );
    let client = WikiClient::new(config.wiki)?;

    match cli.command {
        Command::Summary { text } => {
            let query = client.resolve_query(&text.join(" "));
            let outcome = client
                .fetch_summary(&query.normalized_term, &query.language)
                .await;
            print_articles(&outcome);
        }
        Command::Related { text } => {
            let query = client.resolve_query(&text.join(" "));
            let outcome = client
                .fetch_related(&query.normalized_term, &query.language)
                .await;
            print_articles(&outcome);
        }
        Command::Search { text } => {
            let query = client.resolve_query(&text.join(" "));
            let outcome = client
                .fetch_search(&query.normalized_term, &query.language)
                .await;
            print_articles(&outcome);
        }
        Command::Resolve { text } => {
            let resolution = client.resolve_general_term(&text.join(" ")).await;
            if resolution.query.normalized_term.is_empty() {
                println!("Give me something to search for.");
                return Ok(());
            }
            if resolution.is_disambiguation() {
                println!("Several pages match \"{}\":", resolution.query.normalized_term);
            }
            print_articles(&resolution.primary);
            if !resolution.related.is_empty() {
                println!("\nRelated:");
                print_articles(&LookupOutcome::from_vec(resolution.related));
            }
        }
        Command::Top { text, all } => {
            let query = client.resolve_query(&text.join(" "));
            let top = client
                .resolve_top_pageviews(&query.normalized_term, &query.language)
                .await;
            if top.date.is_corrected() {
                println!(
                    "No data yet for {}, showing {} instead.",
                    format_human(top.date.requested),
                    format_human(top.date.resolved)
                );
            }
            let outcome = if all {
                top.outcome
            } else {
                top.outcome
                    .without_titles(&client.config().excluded_pageview_titles)
            };
            match outcome {
                LookupOutcome::Found(pages) => {
                    println!("Top viewed pages for {}:", format_human(top.date.resolved));
                    for page in pages {
                        println!(
                            "{:>3}. {} ({} views) <{}>",
                            page.rank, page.title, page.view_count, page.url
                        );
                    }
                }
                LookupOutcome::NotFound => println!(
                    "No top viewed articles found for {}.",
                    format_human(top.date.resolved)
                ),
            }
        }
    }

    Ok(())
}

fn print_articles(outcome: &LookupOutcome<Article>) {
    match outcome {
        LookupOutcome::Found(articles) => {
            for article in articles {
                if article.rank > 0 {
                    print!("{:>3}. ", article.rank);
                }
                println!("{} <{}>", article.title, article.canonical_url);
                if !article.extract.is_empty() {
                    println!("     {}", article.extract);
                }
            }
        }
        LookupOutcome::NotFound => println!("Not found."),
    }
}
