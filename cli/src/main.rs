//! resumark CLI - resume validation and rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use resumark::{
    compiler, document_schema, format_diagnostics, OutputFormat, RenderResult, RenderStats,
    Resumark,
};

#[derive(Parser)]
#[command(name = "resumark")]
#[command(version)]
#[command(about = "Validate YAML/JSON resumes and render them to LaTeX, HTML, and Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a resume against the schema
    Validate {
        /// Input resume (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render one layout of a resume
    Render {
        /// Input resume (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (.tex, .html or .md); stdout if not specified
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Layout index; defaults to the first layout matching the output extension
        #[arg(short, long, value_name = "N")]
        layout: Option<usize>,

        /// Render every layout into the output directory
        #[arg(long, conflicts_with = "layout")]
        all: bool,

        /// Keep raw HTML found in summaries
        #[arg(long)]
        raw_html: bool,

        /// Print rendering statistics
        #[arg(long)]
        stats: bool,
    },

    /// Print the JSON Schema of resume documents
    Schema {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Report which LaTeX compiler is installed
    CheckCompiler,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Render {
            input,
            output,
            layout,
            all,
            raw_html,
            stats,
        } => {
            let builder = Resumark::new()
                .with_escape_summaries(!raw_html)
                .with_stats(stats);
            if all {
                cmd_render_all(builder, &input, output.as_deref())
            } else {
                cmd_render(builder, &input, output.as_deref(), layout)
            }
        }
        Commands::Schema { output } => cmd_schema(output.as_deref()),
        Commands::CheckCompiler => cmd_check_compiler(),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

type CmdResult = Result<bool, Box<dyn std::error::Error>>;

fn cmd_validate(input: &Path) -> CmdResult {
    let (text, parsed) = resumark::source::parse_file(input)?;
    let errors = resumark::validate::validate_parsed(&parsed);
    let file = input.display().to_string();

    if errors.is_empty() {
        println!("{} {}", "✓".green().bold(), format!("{file} is valid").green());
        return Ok(true);
    }

    eprintln!("{}", format_diagnostics(&file, &text, &errors));
    eprintln!(
        "{} {}",
        "✗".red().bold(),
        format!("{file} has {} validation error(s)", errors.len()).red()
    );
    Ok(false)
}

fn cmd_render(
    builder: Resumark,
    input: &Path,
    output: Option<&Path>,
    layout: Option<usize>,
) -> CmdResult {
    let format = output.map(OutputFormat::from_path).transpose()?;
    let loaded = builder.load_file(input)?;

    let index = match (layout, format) {
        (Some(index), _) => index,
        (None, Some(format)) => loaded.layout_for(format)?,
        (None, None) => 0,
    };
    let result = loaded.render_layout(index)?;

    if let Some(format) = format {
        if result.format() != format {
            return Err(format!(
                "layout {index} renders {} but the output file expects .{}",
                result.engine,
                format.extension()
            )
            .into());
        }
    }

    match output {
        Some(path) => {
            fs::write(path, &result.content)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => print!("{}", result.content),
    }
    print_stats(&result);
    Ok(true)
}

fn cmd_render_all(builder: Resumark, input: &Path, output: Option<&Path>) -> CmdResult {
    let output_dir = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    let results = builder.load_file(input)?.render_all()?;

    let mut total = RenderStats::new();
    println!("{}", "Output files:".green().bold());
    for (i, result) in results.iter().enumerate() {
        let name = result.file_name(&stem);
        fs::write(output_dir.join(&name), &result.content)?;
        let branch = if i + 1 == results.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
        print_stats(result);
        total.merge(&result.stats);
    }
    if total != RenderStats::default() {
        eprintln!(
            "{}: {} words, {} characters",
            "total".cyan(),
            total.word_count,
            total.char_count
        );
    }
    Ok(true)
}

fn print_stats(result: &RenderResult) {
    let stats = &result.stats;
    if *stats == Default::default() {
        return;
    }
    eprintln!(
        "{}: {} sections, {} entries, {} words, {} bytes",
        format!("layout {}", result.layout_index).cyan(),
        stats.section_count,
        stats.entry_count,
        stats.word_count,
        result.content_len()
    );
}

fn cmd_schema(output: Option<&Path>) -> CmdResult {
    let schema = document_schema().to_json_schema();
    let json = serde_json::to_string_pretty(&schema)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(true)
}

fn cmd_check_compiler() -> CmdResult {
    match compiler::detect() {
        Ok(found) => {
            println!(
                "{} {} ({})",
                "✓".green().bold(),
                found.kind.to_string().bold(),
                found.path.display()
            );
            Ok(true)
        }
        Err(resumark::Error::CompilerNotFound) => {
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                resumark::Error::CompilerNotFound.to_string().red()
            );
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
