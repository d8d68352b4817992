//! textdocx CLI - plain text to formatted DOCX tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use textdocx::{
    detect_format_from_path, DocxOptions, FormatResult, HtmlFormat, JsonFormat, PageSize,
    StyleConfig, Textdocx,
};

/// Output file used when none is given.
const DEFAULT_OUTPUT: &str = "formatted.docx";

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "textdocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Format plain text into a styled Word document", long_about = None)]
struct Cli {
    /// Input text or .docx file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .docx file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format text into a .docx document
    Format {
        /// Input text or .docx file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title stored in the file properties
        #[arg(long)]
        title: Option<String>,

        /// Document author stored in the file properties
        #[arg(long, env = "TEXTDOCX_AUTHOR")]
        author: Option<String>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render an HTML preview of the formatted document
    Preview {
        /// Input text or .docx file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a complete HTML page instead of a fragment
        #[arg(long, conflicts_with = "text")]
        page: bool,

        /// Emit plain text paragraphs instead of HTML
        #[arg(long)]
        text: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Dump the formatted document model as JSON
    Json {
        /// Input text or .docx file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show paragraph and heading statistics
    Info {
        /// Input text or .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show version information
    Version,
}

/// Style overrides shared by every formatting command.
#[derive(Args, Clone, Default)]
struct StyleArgs {
    /// JSON style configuration file
    #[arg(long, value_name = "FILE", env = "TEXTDOCX_CONFIG")]
    config: Option<PathBuf>,

    /// Font family
    #[arg(long)]
    font: Option<String>,

    /// Font size in points
    #[arg(long, value_name = "PT")]
    size: Option<f64>,

    /// Line spacing multiplier
    #[arg(long, value_name = "X")]
    line_spacing: Option<f64>,

    /// First-line indent in centimetres
    #[arg(long, value_name = "CM")]
    indent: Option<f64>,

    /// Space after each paragraph in centimetres
    #[arg(long, value_name = "CM")]
    spacing: Option<f64>,

    /// All page margins in centimetres
    #[arg(long, value_name = "CM")]
    margin: Option<f64>,

    /// Top margin in centimetres
    #[arg(long, value_name = "CM")]
    margin_top: Option<f64>,

    /// Bottom margin in centimetres
    #[arg(long, value_name = "CM")]
    margin_bottom: Option<f64>,

    /// Left margin in centimetres
    #[arg(long, value_name = "CM")]
    margin_left: Option<f64>,

    /// Right margin in centimetres
    #[arg(long, value_name = "CM")]
    margin_right: Option<f64>,

    /// Paper size
    #[arg(long, value_enum)]
    page_size: Option<PaperSize>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PaperSize {
    /// ISO A4 (210 x 297 mm)
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
}

impl From<PaperSize> for PageSize {
    fn from(size: PaperSize) -> Self {
        match size {
            PaperSize::A4 => PageSize::A4,
            PaperSize::Letter => PageSize::Letter,
        }
    }
}

impl StyleArgs {
    /// Build a style configuration: file first, then flag overrides.
    fn to_config(&self) -> CliResult<StyleConfig> {
        let mut config = match &self.config {
            Some(path) => StyleConfig::from_json_file(path)?,
            None => StyleConfig::default(),
        };

        if let Some(ref font) = self.font {
            config = config.with_font_family(font.clone());
        }
        if let Some(size) = self.size {
            config = config.with_font_size(size);
        }
        if let Some(spacing) = self.line_spacing {
            config = config.with_line_spacing(spacing);
        }
        if let Some(indent) = self.indent {
            config = config.with_indent(indent);
        }
        if let Some(spacing) = self.spacing {
            config = config.with_paragraph_spacing(spacing);
        }
        if let Some(margin) = self.margin {
            config = config.with_margins(margin);
        }
        config = config.clone().with_margin_sides(
            self.margin_top.unwrap_or(config.margin_top_cm),
            self.margin_bottom.unwrap_or(config.margin_bottom_cm),
            self.margin_left.unwrap_or(config.margin_left_cm),
            self.margin_right.unwrap_or(config.margin_right_cm),
        );
        if let Some(size) = self.page_size {
            config = config.with_page_size(size.into());
        }

        Ok(config)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Format {
            input,
            output,
            title,
            author,
            style,
        }) => cmd_format(&input, output.as_deref(), title, author, &style),
        Some(Commands::Preview {
            input,
            output,
            page,
            text,
            style,
        }) => cmd_preview(&input, output.as_deref(), page, text, &style),
        Some(Commands::Json {
            input,
            output,
            compact,
            style,
        }) => cmd_json(&input, output.as_deref(), compact, &style),
        Some(Commands::Info { input, style }) => cmd_info(&input, &style),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: format if input is provided
            if let Some(input) = cli.input {
                cmd_format(&input, cli.output.as_deref(), None, None, &cli.style)
            } else {
                println!("{}", "Usage: textdocx <FILE> [OUTPUT]".yellow());
                println!("       textdocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read and format the input, treating "-" as stdin.
fn load(input: &Path, textdocx: &Textdocx) -> CliResult<FormatResult> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(textdocx.format(&raw)?)
    } else {
        Ok(textdocx.format_file(input)?)
    }
}

fn cmd_format(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    author: Option<String>,
    style: &StyleArgs,
) -> CliResult {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading input...");
    let mut docx_options = DocxOptions::new();
    if let Some(title) = title {
        docx_options = docx_options.with_title(title);
    }
    if let Some(author) = author {
        docx_options = docx_options.with_author(author);
    }
    let textdocx = Textdocx::new()
        .with_config(style.to_config()?)
        .with_docx_options(docx_options);
    pb.inc(1);

    pb.set_message("Formatting paragraphs...");
    let result = load(input, &textdocx)?;
    pb.inc(1);

    // Serialization runs on the blocking pool; the file is written only
    // after the bytes are complete.
    pb.set_message("Writing DOCX...");
    let rt = tokio::runtime::Runtime::new()?;
    let bytes = rt.block_on(result.to_docx_async())?;
    fs::write(&output, &bytes)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    let stats = result.stats();
    println!(
        "\n{} {} ({} headings, {} paragraphs)",
        "Saved to".green().bold(),
        output.display(),
        stats.heading_count,
        stats.body_count
    );

    Ok(())
}

fn cmd_preview(
    input: &Path,
    output: Option<&Path>,
    page: bool,
    text: bool,
    style: &StyleArgs,
) -> CliResult {
    let textdocx = Textdocx::new().with_config(style.to_config()?);
    let result = load(input, &textdocx)?;

    let preview = if text {
        result.to_text()
    } else if page {
        result.to_html(HtmlFormat::Page)
    } else {
        result.to_html(HtmlFormat::Fragment)
    };

    if let Some(path) = output {
        fs::write(path, &preview)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", preview);
    }

    Ok(())
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool, style: &StyleArgs) -> CliResult {
    let textdocx = Textdocx::new().with_config(style.to_config()?);
    let result = load(input, &textdocx)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, style: &StyleArgs) -> CliResult {
    let config = style.to_config()?;
    let textdocx = Textdocx::new().with_config(config.clone());
    let result = load(input, &textdocx)?;
    let doc = result.document();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if input.as_os_str() != "-" {
        println!("{}: {}", "Format".bold(), detect_format_from_path(input)?);
    }
    println!("{}: {:?}", "Page".bold(), doc.page.size);
    println!(
        "{}: {} {}pt, line spacing {}",
        "Font".bold(),
        config.font_family,
        config.font_size_pt,
        config.line_spacing
    );
    println!(
        "{}: top {}cm, bottom {}cm, left {}cm, right {}cm",
        "Margins".bold(),
        config.margin_top_cm,
        config.margin_bottom_cm,
        config.margin_left_cm,
        config.margin_right_cm
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = result.stats();
    println!("{}: {}", "Paragraphs".bold(), stats.block_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Body".bold(), stats.body_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if stats.heading_count > 0 {
        println!();
        println!("{}", "Headings".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for heading in doc.headings() {
            println!("  {} {}", "•".dimmed(), heading.text);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "textdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain text to formatted DOCX tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/textdocx".dimmed()
    );
    println!("License: MIT");
}
