//! Contentiq: Content Quality Scoring CLI

use anyhow::{Context, Result};
use clap::Parser;
use contentiq::reporter::{ConsoleReporter, JsonReporter};
use contentiq::{score_article, ArticleInput};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Contentiq: score article content for SEO, AEO, GEO, and E-E-A-T
#[derive(Parser, Debug)]
#[command(name = "contentiq")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with the article body as plain text
    #[arg(long)]
    text: PathBuf,

    /// File with the article body as markup (HTML); omit for none
    #[arg(long)]
    markup: Option<PathBuf>,

    /// Primary keyword (empty keyword yields an SEO score of 0)
    #[arg(long, short)]
    keyword: Option<String>,

    /// Secondary keyword (repeatable)
    #[arg(long = "secondary", short)]
    secondary: Vec<String>,

    /// Author name, used by the E-E-A-T score
    #[arg(long)]
    author: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum SEO score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn run(args: Args) -> Result<ExitCode> {
    let plain_text = fs::read_to_string(&args.text)
        .with_context(|| format!("failed to read text file: {}", args.text.display()))?;
    let markup = match &args.markup {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read markup file: {}", path.display()))?,
        None => String::new(),
    };

    let input = ArticleInput {
        plain_text,
        markup,
        primary_keyword: args.keyword.unwrap_or_default(),
        secondary_keywords: args.secondary,
        author_name: args.author,
    };
    let result = score_article(&input);

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&result));
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        reporter.report(&result);
    }

    if let Some(threshold) = args.threshold {
        if result.seo_score < threshold {
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
