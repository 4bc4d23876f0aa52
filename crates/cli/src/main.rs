use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use verba_core::{
    ContentReport, DEFAULT_KEYWORD_LIMIT, analyze_content, enhancement_or_fallback, extract_basic_keywords,
    insert_keyword, insert_keyword_with_rng,
};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Analyze and optimize text content for SEO
#[derive(Parser, Debug)]
#[command(name = "verba")]
#[command(author = "Verba Contributors")]
#[command(version = VERSION)]
#[command(about = "Analyze and optimize text content for SEO", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score readability and measure keyword usage
    Analyze {
        /// Text file to analyze, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Target keyword to measure (repeatable)
        #[arg(short, long = "keyword", value_name = "KW")]
        keywords: Vec<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text", value_name = "FORMAT")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Enable progress output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Insert a keyword into prose at a natural position
    Insert {
        /// Text file to modify, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Keyword to insert
        #[arg(short, long, value_name = "KW")]
        keyword: String,

        /// Seed the random source for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Enable progress output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Mine candidate keywords from the text itself
    Keywords {
        /// Text file to mine, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Maximum number of keywords to return
        #[arg(short, long, default_value = "15", value_name = "NUM")]
        limit: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text", value_name = "FORMAT")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Enable progress output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Merge model-suggested keywords with local analysis
    Suggest {
        /// Text file the suggestions are for, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// File holding a raw model response to parse; suggestions fall back
        /// to local extraction when omitted or unusable
        #[arg(short, long, value_name = "FILE")]
        response: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text", value_name = "FORMAT")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Enable progress output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Analyze { input, keywords, format, output, verbose } => {
            run_analyze(&input, &keywords, format, output, verbose)
        }
        Command::Insert { input, keyword, seed, output, verbose } => {
            run_insert(&input, &keyword, seed, output, verbose)
        }
        Command::Keywords { input, limit, format, output, verbose } => {
            run_keywords(&input, limit, format, output, verbose)
        }
        Command::Suggest { input, response, format, output, verbose } => {
            run_suggest(&input, response, format, output, verbose)
        }
    }
}

fn run_analyze(
    input: &str,
    keywords: &[String],
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        echo::print_banner();
    }

    let text = read_input(input, verbose, 1, 3)?;

    if verbose {
        echo::print_step(2, 3, "Scoring readability and keyword usage");
    }

    let report = analyze_content(&text, keywords);

    if verbose {
        echo::print_info(&format!("Score: {:.1}", report.readability.score));
        echo::print_step(3, 3, "Writing output");
    }

    let rendered = match format {
        OutputFormat::Text => render_report(&report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report.to_json()?)?;
            json.push('\n');
            json
        }
    };

    write_output(output, &rendered)
}

fn run_insert(
    input: &str,
    keyword: &str,
    seed: Option<u64>,
    output: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        echo::print_banner();
    }

    let text = read_input(input, verbose, 1, 3)?;

    if verbose {
        echo::print_step(2, 3, &format!("Placing keyword \"{}\"", keyword));
    }

    let enhanced = match seed {
        Some(seed) => insert_keyword_with_rng(&text, keyword, &mut StdRng::seed_from_u64(seed)),
        None => insert_keyword(&text, keyword),
    };

    if verbose {
        if enhanced == text {
            echo::print_info("Keyword already present; text unchanged");
        }
        echo::print_step(3, 3, "Writing output");
    }

    let mut rendered = enhanced;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    write_output(output, &rendered)
}

fn run_keywords(
    input: &str,
    limit: usize,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        echo::print_banner();
    }

    let text = read_input(input, verbose, 1, 2)?;

    if verbose {
        echo::print_step(2, 2, &format!("Mining up to {} keywords", limit));
    }

    let keywords = extract_basic_keywords(&text, limit);
    let rendered = render_keywords(&keywords, format)?;

    write_output(output, &rendered)
}

fn run_suggest(
    input: &str,
    response: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        echo::print_banner();
    }

    let text = read_input(input, verbose, 1, 2)?;

    let keywords = match response {
        Some(path) => {
            if verbose {
                echo::print_step(2, 2, &format!("Parsing model response {}", path.display()));
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read response file: {}", path.display()))?;
            let enhancement = enhancement_or_fallback(&raw, &text);
            if verbose {
                for improvement in &enhancement.seo_improvements {
                    echo::print_info(improvement);
                }
            }
            enhancement.suggested_keywords
        }
        None => {
            if verbose {
                echo::print_step(2, 2, "Extracting keywords locally");
            }
            extract_basic_keywords(&text, DEFAULT_KEYWORD_LIMIT)
        }
    };

    let rendered = render_keywords(&keywords, format)?;

    write_output(output, &rendered)
}

/// Render the analysis report as aligned plain text
fn render_report(report: &ContentReport) -> String {
    let readability = &report.readability;
    let mut out = String::new();

    out.push_str(&format!("Readability score:  {:.1}\n", readability.score));
    out.push_str(&format!("Sentences:          {}\n", readability.sentence_count));
    out.push_str(&format!("Words:              {}\n", readability.word_count));
    out.push_str(&format!("Words per sentence: {:.2}\n", readability.avg_sentence_length));
    out.push_str(&format!("Syllables per word: {:.2}\n", readability.avg_syllables_per_word));

    for metrics in &report.keywords {
        out.push_str(&format!(
            "Keyword \"{}\": density {:.2}%, {} occurrence(s)\n",
            metrics.keyword,
            metrics.density,
            metrics.positions.len()
        ));
    }

    if !report.suggested_keywords.is_empty() {
        out.push_str(&format!("Suggested keywords: {}\n", report.suggested_keywords.join(", ")));
    }

    out
}

/// Render a keyword list, one per line or as a JSON array
fn render_keywords(keywords: &[String], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = keywords.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(keywords)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Read text from a file path or stdin when the input is "-"
fn read_input(input: &str, verbose: bool, step: usize, total: usize) -> anyhow::Result<String> {
    if input == "-" {
        if verbose {
            echo::print_step(step, total, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        if verbose {
            echo::print_step(step, total, &format!("Reading from file {}", input));
        }
        let content = fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))?;
        if verbose {
            echo::print_info(&format!("Size: {}", echo::format_size(content.len())));
        }
        Ok(content)
    }
}

/// Write rendered output to a file or stdout
fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, content).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display()));
        }
        None => {
            print!("{}", content);
        }
    }

    Ok(())
}
