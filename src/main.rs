mod parser;
mod record;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use parser::ExtractOptions;
use record::ResumeRecord;

#[derive(Parser)]
#[command(name = "resume_extract", about = "Heuristic resume field extraction from plain text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from one plain-text resume and print JSON
    Parse {
        /// Input text file ("-" for stdin)
        file: PathBuf,
        /// Indented output
        #[arg(long)]
        pretty: bool,
        /// Include the normalized source text in the response
        #[arg(long)]
        raw: bool,
        /// Narrow name search window (5 lines, candidate lines capped at 4 tokens)
        #[arg(long)]
        strict_name: bool,
    },
    /// Extract every *.txt under a directory, writing a .json next to each
    Batch {
        dir: PathBuf,
        /// Max files to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        #[arg(long)]
        strict_name: bool,
    },
}

/// Single-file response shape; `Text` echoes the canonical text on demand.
#[derive(Serialize)]
struct ParseResponse<'a> {
    #[serde(flatten)]
    record: &'a ResumeRecord,
    #[serde(rename = "Text", skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, pretty, raw, strict_name } => {
            let text = read_input(&file)?;
            let opts = options(strict_name);
            let canonical = parser::lines::normalize(&text);
            let record = parser::extract_resume(&text, &opts);
            let response = ParseResponse {
                record: &record,
                text: raw.then_some(canonical.text()),
            };
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Batch { dir, limit, strict_name } => batch(&dir, limit, options(strict_name)),
    }
}

fn options(strict_name: bool) -> ExtractOptions {
    if strict_name {
        ExtractOptions::strict()
    } else {
        ExtractOptions::default()
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

struct BatchCounts {
    files: usize,
    names: usize,
    emails: usize,
    skills: usize,
    entries: usize,
}

impl BatchCounts {
    fn print(&self) {
        println!(
            "Parsed {} resumes: {} names, {} emails, {} skills, {} experience entries.",
            self.files, self.names, self.emails, self.skills, self.entries,
        );
    }
}

fn batch(dir: &Path, limit: Option<usize>, opts: ExtractOptions) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;
    use tracing::warn;

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    if files.is_empty() {
        println!("No .txt files in {}.", dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let mut counts = BatchCounts { files: 0, names: 0, emails: 0, skills: 0, entries: 0 };

    for chunk in files.chunks(64) {
        let results: Vec<(PathBuf, ResumeRecord)> = chunk
            .par_iter()
            .map(|path| {
                let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                    warn!("skipping {}: {}", path.display(), e);
                    String::new()
                });
                (path.clone(), parser::extract_resume(&text, &opts))
            })
            .collect();

        for (path, record) in results {
            counts.files += 1;
            counts.names += record.name.is_some() as usize;
            counts.emails += record.email.is_some() as usize;
            counts.skills += record.skills.as_ref().map_or(0, |s| s.flat().len());
            counts.entries += record.experience.as_ref().map_or(0, |e| e.len());
            let out = path.with_extension("json");
            std::fs::write(&out, serde_json::to_string_pretty(&record)?)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    counts.print();
    Ok(())
}
