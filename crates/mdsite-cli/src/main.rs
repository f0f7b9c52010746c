use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use mdsite_config::SiteConfig;
use mdsite_engine::parsing::preprocess;
use mdsite_engine::{io, parse_markdown, slugify};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "mdsite",
    about = "Markdown preprocessing for documentation sites",
    version
)]
struct Cli {
    /// Path to the site config file.
    #[arg(long, default_value = "mdsite.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Preprocess one source file and print the serialized document.
    Process {
        file: PathBuf,
        /// Skip front-matter parsing for this file.
        #[arg(long)]
        no_front_matter: bool,
    },
    /// Preprocess every source under the configured docs dir into an
    /// output directory.
    Build {
        /// Output directory for processed files.
        #[arg(long, default_value = "_site")]
        out_dir: PathBuf,
    },
    /// Print the table of contents for a source file.
    Toc { file: PathBuf },
    /// Print the URL slug for a header title.
    Slug { title: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SiteConfig::load_from_path(&cli.config)?.unwrap_or_default();
    debug!("base url: {}", config.base_url);

    match cli.command {
        Command::Process {
            file,
            no_front_matter,
        } => {
            let text = preprocess_file(&file, &config)?;
            let use_front_matter = config.front_matter && !no_front_matter;
            let doc = parse_markdown(&text, use_front_matter);
            print!("{}", doc.to_text());
        }
        Command::Build { out_dir } => {
            let sources = io::collect_sources(&config.docs_dir)?;
            info!(
                "processing {} sources from {}",
                sources.len(),
                config.docs_dir.display()
            );
            for relative in sources {
                let raw = io::read_source(&relative, &config.docs_dir)?;
                let doc = parse_markdown(&rewrite(&raw, &config), config.front_matter);
                io::write_output(&relative, &out_dir, &doc.to_text())?;
                debug!("wrote {relative}");
            }
        }
        Command::Toc { file } => {
            let text = preprocess_file(&file, &config)?;
            let doc = parse_markdown(&text, config.front_matter);
            print!("{}", doc.toc());
        }
        Command::Slug { title } => println!("{}", slugify(&title)),
    }

    Ok(())
}

fn preprocess_file(file: &Path, config: &SiteConfig) -> Result<String> {
    let raw = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    Ok(rewrite(&raw, config))
}

/// Jekyll-style textual rewrites applied before parsing.
fn rewrite(raw: &str, config: &SiteConfig) -> String {
    let linked = preprocess::rewrite_link_tags(raw, &config.base_url);
    preprocess::strip_raw_tags(&linked)
}
