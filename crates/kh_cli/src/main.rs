use chrono::Utc;
use clap::{Parser, Subcommand};
use kh_core::{Article, ArticleStore};
use kh_inference::{create_model, Config};
use kh_storage::MemoryStorage;
use kh_web::{create_app, AppState};
use std::sync::Arc;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "khabar", about = "News aggregation backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: String,

        /// Language model to use: gemini or dummy
        #[arg(long, default_value = "gemini")]
        model: String,

        /// Load a few sample articles into the store at startup
        #[arg(long)]
        seed: bool,
    },
}

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn sample_articles() -> Vec<Article> {
    [
        (
            "Budget Talks Stall in Parliament",
            "Politics",
            "Negotiations over the annual budget broke down late on Tuesday.",
        ),
        (
            "Election Commission Sets Poll Dates",
            "Politics",
            "Voting will take place across three phases starting next month.",
        ),
        (
            "Monsoon Arrives Early on the Coast",
            "Weather",
            "Heavy rainfall is expected through the weekend.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, category, summary))| Article {
        title: title.to_string(),
        source: "Sample Desk".to_string(),
        category: category.to_string(),
        summary: summary.to_string(),
        link: format!("http://example.com/sample/{}", i),
        published: "today".to_string(),
        fetched_at: Utc::now(),
    })
    .collect()
}

async fn serve(addr: String, model_kind: String, seed: bool) -> anyhow::Result<()> {
    let config = Config {
        api_key: std::env::var("GEMINI_API_KEY").ok(),
        model_name: std::env::var("GEMINI_MODEL").ok(),
    };
    let model = create_model(&model_kind, &config)?;
    info!("using {} model", model.name());

    let store: Arc<dyn ArticleStore> = Arc::new(MemoryStorage::new());
    if seed {
        for article in sample_articles() {
            store.store_article(&article).await?;
        }
        info!("seeded sample articles");
    }

    let app = create_app(AppState::new(store, model));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr, model, seed } => serve(addr, model, seed).await,
    }
}
