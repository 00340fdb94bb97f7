//! Sosatree CLI
//!
//! Reads a GEDCOM file and writes the Sosa ancestor book of one person as a
//! LaTeX document. Compile the output with `pdflatex` twice (and `makeindex`
//! in between) to get table of contents, links and index.

use clap::Parser;
use sosatree::ReportConfig;
use sosatree::document::write_document;
use sosatree::locale::Locale;
use sosatree::model::GenerationCap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

/// Sosa ancestor book generator
#[derive(Parser)]
#[command(name = "sosatree")]
#[command(version)]
#[command(about = "Writes the numbered ancestors of a person as a LaTeX book")]
struct Cli {
    /// GEDCOM file to read
    gedcom: PathBuf,

    /// Identity of the root person, e.g. @I0123@
    #[arg(short, long)]
    root: String,

    /// LaTeX file to write
    #[arg(short, long, default_value = "tree.tex")]
    output: PathBuf,

    /// Number of generations to include, root included (default: all)
    #[arg(short = 'g', long, value_parser = clap::value_parser!(u32).range(1..))]
    max_generation: Option<u32>,

    /// Number of generations drawn on one tree page
    #[arg(short = 'p', long, default_value_t = sosatree::config::DEFAULT_GENERATIONS_PER_PAGE,
          value_parser = clap::value_parser!(u32).range(1..))]
    generations_per_page: u32,

    /// Caption language (en, fr)
    #[arg(short, long, default_value = "en")]
    locale: Locale,

    /// Document title (default: depends on the locale)
    #[arg(long)]
    title: Option<String>,

    /// Document author
    #[arg(long)]
    author: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ReportConfig {
        let cap = self
            .max_generation
            .map_or(GenerationCap::Unbounded, GenerationCap::Limited);
        let mut config = ReportConfig::new(self.root.as_str())
            .with_max_generation(cap)
            .with_max_generation_per_page(self.generations_per_page)
            .with_locale(self.locale);
        if let Some(title) = &self.title {
            config = config.with_title(title);
        }
        if let Some(author) = &self.author {
            config = config.with_author(author);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = cli.config();
    let result = sosatree::generate_document_from_file(&cli.gedcom, &config)
        .and_then(|tex| Ok(write_document(&cli.output, &tex)?));

    match result {
        Ok(()) => {
            println!("OK -> pdflatex {} (twice)", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
