use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("verba")
        .version("0.1.0")
        .author("Verba Contributors")
        .about("Analyze and optimize text content for SEO")
        .subcommand(
            clap::Command::new("analyze")
                .about("Score readability and measure keyword usage")
                .arg(clap::arg!(<INPUT> "Text file to analyze, or '-' for stdin"))
                .arg(
                    clap::arg!(-k --keyword <KW> "Target keyword to measure (repeatable)")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                        .default_value("text")
                        .value_parser(["text", "json"]),
                )
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(-v --verbose "Enable progress output")),
        )
        .subcommand(
            clap::Command::new("insert")
                .about("Insert a keyword into prose at a natural position")
                .arg(clap::arg!(<INPUT> "Text file to read, or '-' for stdin"))
                .arg(clap::arg!(-k --keyword <KW> "Keyword to insert").required(true))
                .arg(clap::arg!(--seed <N> "Seed the random source for reproducible output"))
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(-v --verbose "Enable progress output")),
        )
        .subcommand(
            clap::Command::new("keywords")
                .about("Mine candidate keywords from the text itself")
                .arg(clap::arg!(<INPUT> "Text file to read, or '-' for stdin"))
                .arg(clap::arg!(-l --limit <NUM> "Maximum number of keywords to return").default_value("15"))
                .arg(
                    clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                        .default_value("text")
                        .value_parser(["text", "json"]),
                )
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(-v --verbose "Enable progress output")),
        )
        .subcommand(
            clap::Command::new("suggest")
                .about("Merge model-suggested keywords with local analysis")
                .arg(clap::arg!(<INPUT> "Text file to read, or '-' for stdin"))
                .arg(
                    clap::arg!(-r --response <FILE> "File holding a raw model response to parse")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                        .default_value("text")
                        .value_parser(["text", "json"]),
                )
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(-v --verbose "Enable progress output")),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "verba", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "verba", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "verba", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "verba", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
