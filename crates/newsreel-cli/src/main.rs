use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use newsreel_core::{FontSet, GenerationRequest, NewsClient, generate, news, upload_video};

#[derive(Parser)]
#[command(name = "newsreel")]
#[command(about = "Generate a narrated news-briefing video and optionally publish it")]
struct Cli {
    /// News category to fetch
    #[arg(short, long, default_value = "national")]
    category: String,

    /// Seconds each slide stays on screen (clamped to 10-45)
    #[arg(short, long, default_value_t = 30.0)]
    seconds_per_slide: f64,

    /// Output MP4 path
    #[arg(short, long, default_value = "briefing.mp4")]
    out: PathBuf,

    /// Override the news feed base URL
    #[arg(long)]
    feed_url: Option<String>,

    /// OAuth access token; when set, the video is uploaded after encoding
    #[arg(long)]
    upload_token: Option<String>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsreel_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("newsreel").cyan().bold(),
        style("News Briefing Generator").dim()
    );

    // Fail fast on configuration problems before any network or process work.
    let fonts = match FontSet::resolve() {
        Ok(fonts) => fonts,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let client = match cli.feed_url {
        Some(url) => NewsClient::new(url),
        None => NewsClient::new(news::DEFAULT_BASE_URL),
    };

    let request = GenerationRequest {
        category: cli.category,
        seconds_per_slide: cli.seconds_per_slide,
    };

    let spinner = create_spinner("Generating briefing video...");
    let result = match generate(&request, &client, &fonts).await {
        Ok(result) => result,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_with_message(format!(
        "{} Generated: {} slides, {:.0}s",
        style("✓").green().bold(),
        result.slide_count,
        result.duration_seconds
    ));

    fs::write(&cli.out, &result.video).await?;
    println!(
        "{} {} {}",
        style("✓").green().bold(),
        style("Saved:").dim(),
        style(cli.out.display()).cyan()
    );

    println!("\n{}", style(&result.title).bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("{}\n", result.description);

    if let Some(token) = cli.upload_token {
        let spinner = create_spinner("Uploading to YouTube...");
        let url = match upload_video(&result.video, &result.title, &result.description, &token)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e.into());
            }
        };
        spinner.finish_with_message(format!(
            "{} Published: {}",
            style("✓").green().bold(),
            style(&url).cyan()
        ));
    }

    Ok(())
}
