use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, MovieId};
use metadata::{MovieDetail, TmdbClient, TmdbConfig};
use pipeline::{parse_min_rating, Genre, RecommendationRequest, RecommendedMovie, SortMode};
use recommender::RecommendError;
use server::RecommendationService;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

const UNKNOWN_TITLE_MESSAGE: &str = "Please enter a valid movie name.";
const NO_MATCHES_MESSAGE: &str = "No movies match your filters. Please adjust your criteria.";

/// Movie Recs - content-based movie recommender
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Recommend movies similar to one you like, with details from TMDB", long_about = None)]
struct Cli {
    /// Directory holding movies.dat and similarity.json
    #[arg(short, long, default_value = "data/sample")]
    data_dir: PathBuf,

    #[command(flatten)]
    tmdb: TmdbArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TmdbArgs {
    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// TMDB API base URL
    #[arg(long, env = "TMDB_API_URL", default_value = metadata::config::DEFAULT_API_URL, global = true)]
    tmdb_url: String,

    /// Per-request timeout for TMDB calls, in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend five movies similar to the given title
    Recommend {
        /// Title of a movie you like (case-insensitive, exact)
        #[arg(long)]
        title: String,

        /// Result ordering: similarity or rating
        #[arg(long, default_value_t = SortMode::Similarity)]
        sort: SortMode,

        /// Keep only movies in this genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<Genre>,

        /// Minimum TMDB rating, 0 to 10 in steps of 0.5
        #[arg(long, default_value = "0", value_parser = parse_min_rating)]
        min_rating: f32,

        /// Show the similarity score for each result
        #[arg(long)]
        explain: bool,
    },

    /// List the titles you can pick from
    Titles {
        /// Show at most this many titles
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Fetch and show TMDB details for one movie
    Details {
        /// TMDB movie id
        #[arg(long)]
        movie_id: MovieId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            title,
            sort,
            genres,
            min_rating,
            explain,
        } => {
            let catalog = load_catalog(&cli.data_dir)?;
            let client = build_client(&cli.tmdb)?;
            let request = RecommendationRequest::new(title)
                .with_sort_mode(sort)
                .with_genres(genres)
                .with_min_rating(min_rating);
            handle_recommend(catalog, client, request, explain).await?
        }
        Commands::Titles { limit } => {
            let catalog = load_catalog(&cli.data_dir)?;
            handle_titles(&catalog, limit)
        }
        Commands::Search { title } => {
            let catalog = load_catalog(&cli.data_dir)?;
            handle_search(&catalog, &title)
        }
        Commands::Details { movie_id } => {
            let catalog = load_catalog(&cli.data_dir)?;
            let client = build_client(&cli.tmdb)?;
            handle_details(&catalog, &client, movie_id).await?
        }
    }

    Ok(())
}

fn load_catalog(data_dir: &Path) -> Result<Arc<Catalog>> {
    let start = Instant::now();
    let catalog = Catalog::load_from_files(data_dir)
        .with_context(|| format!("Failed to load catalog from {}", data_dir.display()))?;
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());
    Ok(Arc::new(catalog))
}

fn build_client(args: &TmdbArgs) -> Result<TmdbClient> {
    let Some(api_key) = args.api_key.as_deref() else {
        bail!("A TMDB API key is required: pass --api-key or set TMDB_API_KEY");
    };

    let mut config = TmdbConfig::new(api_key).with_api_url(args.tmdb_url.as_str());
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    TmdbClient::new(config).context("Failed to build TMDB client")
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    client: TmdbClient,
    request: RecommendationRequest,
    explain: bool,
) -> Result<()> {
    let service = RecommendationService::new(catalog, Arc::new(client));

    let outcome = service.recommend(&request).await;
    if let Some(message) = outcome_message(&outcome) {
        println!("{}", message.yellow());
        return Ok(());
    }

    print_recommendations(&request, &outcome?, explain);
    Ok(())
}

/// Message shown instead of results: unknown title or nothing left after
/// filtering. Any other error is not for the user to fix and yields `None`.
fn outcome_message(outcome: &Result<Vec<RecommendedMovie>>) -> Option<&'static str> {
    match outcome {
        Err(e) if e.downcast_ref::<RecommendError>().is_some() => Some(UNKNOWN_TITLE_MESSAGE),
        Ok(results) if results.is_empty() => Some(NO_MATCHES_MESSAGE),
        _ => None,
    }
}

/// Handle the 'titles' command
fn handle_titles(catalog: &Catalog, limit: Option<usize>) {
    let titles = catalog.titles();
    let shown = limit.unwrap_or(titles.len()).min(titles.len());

    println!("{}", format!("{} titles:", titles.len()).bold().blue());
    for title in titles.iter().take(shown) {
        println!("  {}", title);
    }
    if shown < titles.len() {
        println!("  ... and {} more", titles.len() - shown);
    }
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) {
    let matches = catalog.search(query);

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if matches.is_empty() {
        println!("  No titles match.");
        return;
    }
    for (_, movie) in matches.iter().take(20) {
        println!("  {}: {}", movie.id.to_string().green(), movie.title);
    }
}

/// Handle the 'details' command
async fn handle_details(catalog: &Catalog, client: &TmdbClient, movie_id: MovieId) -> Result<()> {
    let title = catalog
        .movies()
        .iter()
        .find(|m| m.id == movie_id)
        .map(|m| m.title.clone())
        .unwrap_or_else(|| format!("Movie {}", movie_id));

    let detail = client
        .try_fetch_details(movie_id, &title)
        .await
        .with_context(|| format!("Failed to fetch details for movie {}", movie_id))?;

    println!("{}", format!("{} ({})", detail.title, movie_id).bold().blue());
    print_detail(&detail);
    Ok(())
}

/// Print results in presentation order
fn print_recommendations(
    request: &RecommendationRequest,
    results: &[RecommendedMovie],
    explain: bool,
) {
    let header = format!(
        "Movies like '{}' (sorted by {}):",
        request.selected_title, request.sort_mode
    );
    println!("{}", header.bold().blue());

    for (rank, result) in results.iter().enumerate() {
        println!();
        println!("{}. {}", (rank + 1).to_string().green(), result.movie.title.bold());
        if explain {
            println!("   Similarity: {:.3}", result.score);
        }
        print_detail(&result.detail);
    }
}

fn print_detail(detail: &MovieDetail) {
    println!("   Poster: {}", detail.poster_display());
    println!("   Genres: {}", detail.genres_display());
    println!("   Rating: {}", detail.rating_display());
    println!("   Runtime: {}", detail.runtime_display());
    println!("   Release date: {}", detail.release_date_display());
    println!("   Overview: {}", detail.overview_display());
    if let Some(imdb) = detail.imdb_url.as_deref() {
        println!("   IMDb: {}", imdb);
    }
}
