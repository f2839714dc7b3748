// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use doc_keyword_search::utils::logging::{
    format_error, format_found, format_info, format_missing, format_sentence,
};
use doc_keyword_search::{
    Config, DocumentLoader, JsonExporter, MatchPolicy, NonPositivePages, SearchPipeline,
    SearchReport, SourceDocument, Validator,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "doc_keyword_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Keyword search over PDF and text documents with page and sentence attribution", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct PageArgs {
    /// Printed page number of the first physical page
    #[arg(long, value_name = "N", allow_hyphen_values = true, conflicts_with = "page_offset")]
    first_page: Option<String>,

    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    page_offset: Option<String>,

    /// Read the left half of each page, then the right half
    #[arg(long)]
    dual_column: bool,

    /// Keep pages whose logical number is zero or negative
    #[arg(long)]
    keep_non_positive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a document for keywords
    Search {
        file: PathBuf,

        /// Keywords separated by the configured delimiters
        #[arg(short, long)]
        keywords: String,

        #[command(flatten)]
        pages: PageArgs,

        #[arg(long, value_name = "POLICY")]
        policy: Option<MatchPolicy>,

        #[arg(long)]
        extended_alphabet: bool,

        /// Each character is a keyword delimiter
        #[arg(long, value_name = "CHARS")]
        delimiters: Option<String>,

        #[arg(long)]
        no_sentences: bool,

        #[arg(long)]
        classify: bool,

        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the text of every extracted page
    Extract {
        file: PathBuf,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    doc_keyword_search::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    let outcome = match cli.command {
        Commands::Search {
            file,
            keywords,
            pages,
            policy,
            extended_alphabet,
            delimiters,
            no_sentences,
            classify,
            export,
            pretty,
        } => {
            let mut config = config;
            apply_page_args(&mut config, &pages)?;
            if let Some(policy) = policy {
                config.matching.policy = policy;
            }
            if extended_alphabet {
                config.matching.extended_alphabet = true;
            }
            if let Some(delimiters) = delimiters {
                config.matching.keyword_delimiters =
                    delimiters.chars().map(|c| c.to_string()).collect();
            }
            if no_sentences {
                config.matching.sentence_attribution = false;
            }
            if classify {
                config.classification.enabled = true;
            }
            cmd_search(config, &file, &keywords, export.as_deref(), pretty).await
        }
        Commands::Extract { file, pages } => {
            let mut config = config;
            apply_page_args(&mut config, &pages)?;
            cmd_extract(&config, &file)
        }
        Commands::Config => cmd_config(&config),
    };

    if let Err(e) = outcome {
        eprintln!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }

    Ok(())
}

fn apply_page_args(config: &mut Config, pages: &PageArgs) -> Result<()> {
    if let Some(first_page) = &pages.first_page {
        config.extraction.page_offset = Validator::parse_first_page(first_page)?;
    }
    if let Some(page_offset) = &pages.page_offset {
        config.extraction.page_offset = Validator::parse_page_offset(page_offset)?;
    }
    if pages.dual_column {
        config.extraction.dual_column = true;
    }
    if pages.keep_non_positive {
        config.extraction.non_positive_pages = NonPositivePages::Keep;
    }
    Ok(())
}

fn read_source(file: &Path) -> Result<SourceDocument> {
    Validator::validate_file_path(file)?;
    Validator::validate_supported_extension(file)?;
    let source = SourceDocument::from_path(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(source)
}

async fn cmd_search(
    config: Config,
    file: &Path,
    keywords: &str,
    export: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    info!("Searching {} for: {}", file.display(), keywords);

    let source = read_source(file)?;
    let pipeline = SearchPipeline::new(config).context("Invalid search configuration")?;
    let report = pipeline.search(&source, keywords).await?;

    print_report(&report);

    if let Some(dir) = export {
        let exporter = JsonExporter::new(dir)?;
        let path = exporter.export_report(&report, pretty)?;
        println!("{}", format_info(&format!("Report written to {}", path.display())));
    }

    Ok(())
}

fn print_report(report: &SearchReport) {
    println!(
        "\n{} {} ({} pages, policy {})\n",
        "Results for".bold(),
        report.document.bold(),
        report.page_count,
        report.policy
    );

    for result in report.found() {
        println!("{}", format_found(&result.keyword, &result.pages));
        for (page, sentences) in &result.sentences {
            if sentences.is_empty() {
                continue;
            }
            println!("  {}", format!("Page {}", page).dimmed());
            for sentence in sentences {
                println!("{}", format_sentence(&sentence.text, sentence.is_related));
            }
        }
    }

    for result in report.missing() {
        println!("{}", format_missing(&result.keyword));
    }

    let stats = &report.stats;
    println!(
        "\n{}",
        format_info(&format!(
            "{}/{} keywords found ({:.0}%) in {} ms",
            stats.keywords_found,
            stats.keywords,
            stats.hit_rate(),
            stats.duration_ms
        ))
    );
    if stats.sentences_classified + stats.classification_failures > 0 {
        println!(
            "{}",
            format_info(&format!(
                "{} sentences classified, {} failed",
                stats.sentences_classified, stats.classification_failures
            ))
        );
    }
}

fn cmd_extract(config: &Config, file: &Path) -> Result<()> {
    config.validate().context("Invalid extraction configuration")?;

    let source = read_source(file)?;
    let loader = DocumentLoader::from_config(&config.extraction);
    let extracted = loader.load(&source)?;
    Validator::validate_content_not_empty(&extracted.full_text)?;

    for (page, text) in &extracted.pages {
        println!("{}", format!("── Page {} ──", page).cyan().bold());
        println!("{}\n", text);
    }
    println!(
        "{}",
        format_info(&format!("{} pages extracted", extracted.page_count()))
    );

    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
    println!("{}", json);
    Ok(())
}
