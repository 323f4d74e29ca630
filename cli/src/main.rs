//! teletext CLI - build and preview teletext-style news pages

use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use teletext::render::{self, ComposeOptions, RenderSurface};
use teletext::{
    fit_grid, Feed, JsonFormat, LayoutMode, LinearMetrics, PageSet, PaginateOptions, Palette, Rgb,
    Sizing, SizingOptions, Viewport,
};

#[derive(Parser)]
#[command(name = "teletext")]
#[command(version)]
#[command(about = "Build and preview teletext-style news pages", long_about = None)]
struct Cli {
    /// Palette file mapping color roles to colors
    #[arg(long, global = true, env = "TELETEXT_PALETTE", value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Language tag written into page metadata
    #[arg(long, global = true, default_value = "de")]
    language: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the page set and dump it as JSON
    Pages {
        /// Feed file ("-" for stdin)
        #[arg(value_name = "FEED")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List page numbers and titles
    #[command(alias = "ls")]
    List {
        /// Feed file ("-" for stdin)
        #[arg(value_name = "FEED")]
        input: PathBuf,
    },

    /// Compose a page and print it
    Show {
        /// Feed file ("-" for stdin)
        #[arg(value_name = "FEED")]
        input: PathBuf,

        /// Page number
        #[arg(value_name = "PAGE", default_value = "100")]
        page: u32,

        /// Feed refresh time shown on the main page (RFC 3339)
        #[arg(long, value_name = "TIMESTAMP")]
        last_updated: Option<String>,

        /// Print characters only, even with a palette
        #[arg(long)]
        plain: bool,
    },

    /// Show the clickable page links of a page
    Links {
        /// Feed file ("-" for stdin)
        #[arg(value_name = "FEED")]
        input: PathBuf,

        /// Page number
        #[arg(value_name = "PAGE", default_value = "100")]
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute font sizing for a viewport
    Fit {
        /// Viewport width in pixels
        #[arg(long)]
        width: f32,

        /// Viewport height in pixels
        #[arg(long)]
        height: f32,

        /// Grid rows
        #[arg(long, default_value = "25")]
        rows: usize,

        /// Grid columns
        #[arg(long, default_value = "40")]
        columns: usize,

        /// Layout mode
        #[arg(long, value_enum, default_value = "normal")]
        mode: Mode,

        /// Glyph width per unit of font size
        #[arg(long, default_value = "0.6")]
        width_ratio: f32,

        /// Line height per unit of font size
        #[arg(long, default_value = "1.2")]
        height_ratio: f32,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Rows at their natural height
    Normal,
    /// Rows spread over the viewport height
    Expanded,
}

impl From<Mode> for LayoutMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normal => LayoutMode::Normal,
            Mode::Expanded => LayoutMode::Expanded,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = PaginateOptions::new().with_language(&cli.language);

    let result = match cli.command {
        Commands::Pages {
            input,
            output,
            compact,
        } => cmd_pages(&input, output.as_deref(), compact, &options),
        Commands::List { input } => cmd_list(&input, &options),
        Commands::Show {
            input,
            page,
            last_updated,
            plain,
        } => cmd_show(
            &input,
            page,
            last_updated,
            if plain { None } else { cli.palette.as_deref() },
            &options,
        ),
        Commands::Links { input, page, json } => cmd_links(&input, page, json, &options),
        Commands::Fit {
            width,
            height,
            rows,
            columns,
            mode,
            width_ratio,
            height_ratio,
        } => cmd_fit(
            Viewport::new(width, height),
            rows,
            columns,
            mode,
            LinearMetrics::new(width_ratio, height_ratio),
        ),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_feed(input: &Path) -> teletext::Result<Feed> {
    if input == Path::new("-") {
        teletext::parse_feed_reader(io::stdin().lock())
    } else {
        teletext::parse_feed_file(input)
    }
}

fn load_pages(input: &Path, options: &PaginateOptions) -> teletext::Result<PageSet> {
    let feed = load_feed(input)?;
    Ok(teletext::paginate(&feed.articles, options).into_page_set())
}

fn cmd_pages(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &PaginateOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&pages, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_list(input: &Path, options: &PaginateOptions) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input, options)?;

    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for page in &pages {
        let kind = if page.is_main() {
            "main"
        } else if page.is_index() {
            "index"
        } else {
            page.metadata.category.as_str()
        };
        println!("{} {:<10} {}", page.page_id.bold(), kind.dimmed(), page.title);
    }

    println!();
    println!("{}: {}", "Total".bold(), pages.len());

    Ok(())
}

fn cmd_show(
    input: &Path,
    number: u32,
    last_updated: Option<String>,
    palette: Option<&Path>,
    options: &PaginateOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input, options)?;
    let page = pages
        .get(number)
        .ok_or(teletext::Error::PageNotFound(number))?;

    let mut compose_options = ComposeOptions::new();
    if let Some(timestamp) = last_updated {
        compose_options = compose_options.with_last_updated(timestamp);
    }
    let composed = render::compose(page, &compose_options);

    match palette {
        Some(path) => {
            let palette = Palette::from_file(path)?;
            log::debug!("Using palette {:?} ({} colors)", palette.name, palette.len());

            let mut surface = AnsiSurface::default();
            render::present(page, &composed, &palette, &mut surface);
            print!("{}", surface.output);
        }
        None => println!("{}", composed.text()),
    }

    println!(
        "{} {}/{}  {} {}  {} {}",
        "Page".dimmed(),
        pages.position_of(number) + 1,
        pages.len(),
        "prev".dimmed(),
        page_label(pages.previous_number(number)),
        "next".dimmed(),
        page_label(pages.next_number(number))
    );

    Ok(())
}

fn page_label(number: Option<u32>) -> String {
    number.map_or_else(|| "---".to_string(), |n| n.to_string())
}

fn cmd_links(
    input: &Path,
    number: u32,
    json: bool,
    options: &PaginateOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input, options)?;
    let page = pages
        .get(number)
        .ok_or(teletext::Error::PageNotFound(number))?;
    let composed = render::compose(page, &ComposeOptions::default());

    if json {
        let links: Vec<_> = composed
            .links()
            .iter()
            .map(|(row, link)| {
                serde_json::json!({
                    "row": row,
                    "columns": [link.span.start, link.span.end],
                    "page": link.page_number,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    if composed.links().is_empty() {
        println!("{}", "No links".yellow());
        return Ok(());
    }

    for (row, link) in composed.links() {
        println!(
            "{:>2}  {:>2}..{:<2}  {} {}",
            row,
            link.span.start,
            link.span.end,
            "→".dimmed(),
            link.page_number.to_string().green()
        );
    }

    Ok(())
}

fn cmd_fit(
    viewport: Viewport,
    rows: usize,
    columns: usize,
    mode: Mode,
    metrics: LinearMetrics,
) -> Result<(), Box<dyn std::error::Error>> {
    let sizing: Sizing = fit_grid(
        viewport,
        rows,
        columns,
        mode.into(),
        &metrics,
        &SizingOptions::default(),
    )
    .ok_or("viewport must have a positive width and height")?;

    println!("{}", serde_json::to_string_pretty(&sizing)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "teletext".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Teletext-style news page builder");
    println!();
    println!("License: MIT");
}

/// Writes the grid as 24-bit ANSI colored text.
#[derive(Default)]
struct AnsiSurface {
    output: String,
}

impl RenderSurface for AnsiSurface {
    fn viewport(&self) -> Viewport {
        Viewport::default()
    }

    fn set_font(&mut self, _family: &str) {}

    fn apply_sizing(&mut self, _sizing: Sizing) {}

    fn paint_cell(&mut self, _row: usize, _column: usize, ch: char, fg: Rgb, bg: Rgb) {
        let cell = ch
            .to_string()
            .truecolor(fg.r, fg.g, fg.b)
            .on_truecolor(bg.r, bg.g, bg.b);
        self.output.push_str(&cell.to_string());
    }

    fn register_link(&mut self, _row: usize, _span: Range<usize>, _page_number: u32) {}

    fn end_row(&mut self, _row: usize) {
        self.output.push('\n');
    }
}
