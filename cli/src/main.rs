//! resumekit CLI - resume extraction, parsing and PDF rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumekit::extract::DEFAULT_LINE_THRESHOLD;
use resumekit::{
    detect_source_format, load_resume_text_with_options, parse_resume,
    render_resume_pdf_with_options, source_kind_from_name, ExtractOptions, PageSelection,
    RenderOptions, Resume, SourceFormat, SourceKind,
};

#[derive(Parser)]
#[command(name = "resumekit")]
#[command(version)]
#[command(about = "Extract, parse and render resumes", long_about = None)]
struct Cli {
    /// Input resume file (.txt or .pdf)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Maximum baseline difference for text on the same line
    #[arg(
        long,
        global = true,
        env = "RESUMEKIT_LINE_THRESHOLD",
        default_value_t = DEFAULT_LINE_THRESHOLD
    )]
    line_threshold: f32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text, parse it and render a PDF into one directory
    Convert {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Extract plain text from a resume file
    Extract {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Parse a resume into JSON
    Parse {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render a resume (.json, .txt or .pdf) to PDF
    Render {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF (defaults to <Name>_Resume.pdf)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write uncompressed content streams
        #[arg(long)]
        no_compress: bool,
    },

    /// Show parsed resume information
    Info {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let extract_options = ExtractOptions::new().with_line_threshold(cli.line_threshold);

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => {
            cmd_convert(&input, output.as_deref(), &extract_options)
        }
        Some(Commands::Extract {
            input,
            output,
            pages,
        }) => cmd_extract(&input, output.as_deref(), pages.as_deref(), extract_options),
        Some(Commands::Parse {
            input,
            output,
            compact,
        }) => cmd_parse(&input, output.as_deref(), compact, &extract_options),
        Some(Commands::Render {
            input,
            output,
            no_compress,
        }) => cmd_render(&input, output.as_deref(), no_compress, &extract_options),
        Some(Commands::Info { input }) => cmd_info(&input, &extract_options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &extract_options)
            } else {
                println!("{}", "Usage: resumekit <FILE> [OUTPUT]".yellow());
                println!("       resumekit --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_text(input: &Path, options: &ExtractOptions) -> CliResult<String> {
    let data = fs::read(input)?;
    Ok(load_resume_text_with_options(
        &data,
        &file_name(input),
        options,
    )?)
}

/// Load a resume from JSON, or from text/PDF by parsing it.
fn read_resume(input: &Path, options: &ExtractOptions) -> CliResult<Resume> {
    let is_json = input
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let data = fs::read(input)?;
        return Ok(serde_json::from_slice(&data)?);
    }

    Ok(parse_resume(&read_text(input, options)?))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>, options: &ExtractOptions) -> CliResult<()> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let data = fs::read(input)?;
    let name = file_name(input);
    let is_pdf = match source_kind_from_name(&name)? {
        SourceKind::Pdf => true,
        SourceKind::Text => false,
        SourceKind::Unknown => matches!(detect_source_format(&data)?, SourceFormat::Pdf { .. }),
    };

    if is_pdf {
        pb.set_message("Analyzing PDF structure...");
        pb.set_position(20);
        pb.set_message("Extracting text content...");
        pb.set_position(50);
    } else {
        pb.set_message("Reading text file...");
        pb.set_position(30);
    }
    let text = load_resume_text_with_options(&data, &name, options)?;
    fs::write(output_dir.join("resume.txt"), &text)?;

    pb.set_message(if is_pdf {
        "Processing resume sections..."
    } else {
        "Processing resume content..."
    });
    pb.set_position(80);
    let resume = parse_resume(&text);
    fs::write(
        output_dir.join("resume.json"),
        serde_json::to_string_pretty(&resume)?,
    )?;

    pb.set_message("Rendering PDF...");
    pb.set_position(90);
    let pdf_name = resume.suggested_filename();
    let pdf = render_resume_pdf_with_options(&resume, &RenderOptions::default())?;
    fs::write(output_dir.join(&pdf_name), &pdf)?;

    pb.set_position(100);
    pb.finish_with_message(if is_pdf {
        "Resume converted successfully!"
    } else {
        "Resume loaded successfully!"
    });

    println!("\n{}", "Output files:".green().bold());
    println!("  {} resume.txt", "├─".dimmed());
    println!("  {} resume.json", "├─".dimmed());
    println!("  {} {}", "└─".dimmed(), pdf_name);

    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
    options: ExtractOptions,
) -> CliResult<()> {
    let page_selection = if let Some(p) = pages {
        PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?
    } else {
        PageSelection::All
    };

    let text = read_text(input, &options.with_pages(page_selection))?;
    write_or_print(output, &text)
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &ExtractOptions,
) -> CliResult<()> {
    let resume = parse_resume(&read_text(input, options)?);

    let json = if compact {
        serde_json::to_string(&resume)?
    } else {
        serde_json::to_string_pretty(&resume)?
    };

    write_or_print(output, &json)
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    no_compress: bool,
    options: &ExtractOptions,
) -> CliResult<()> {
    let resume = read_resume(input, options)?;
    let render_options = RenderOptions::new().with_compression(!no_compress);

    let pdf = render_resume_pdf_with_options(&resume, &render_options)?;
    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(resume.suggested_filename()));

    fs::write(&path, &pdf)?;
    println!("{} {}", "Saved to".green(), path.display());

    Ok(())
}

fn cmd_info(input: &Path, options: &ExtractOptions) -> CliResult<()> {
    let data = fs::read(input)?;
    let format = detect_source_format(&data)?;
    let resume = read_resume(input, options)?;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Name".bold(), or_dash(&resume.name));
    println!("{}: {}", "Position".bold(), or_dash(&resume.position));

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Summary words".bold(), resume.summary.split_whitespace().count());
    println!("{}: {}", "Languages".bold(), resume.languages.len());
    println!("{}: {}", "Work Experience".bold(), resume.work_experience.len());
    println!("{}: {}", "Education".bold(), resume.education.len());
    println!("{}: {}", "Skills".bold(), resume.skills.len());
    println!("{}: {}", "Certificates".bold(), resume.certificates.len());

    let pages = resumekit::layout_resume(&resume, &RenderOptions::default()).page_count();
    println!("{}: {}", "Rendered pages".bold(), pages);

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn cmd_version() {
    println!("{} {}", "resumekit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume extraction, parsing and rendering tool");
    println!();
    println!("License: MIT");
}
