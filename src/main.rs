use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use docview::{
    ContentArea, DocView, FilterCategory, InteractiveView, Settings, discover_pages,
    format_search_result, load_page, logging, printable, render_document, results_summary,
};
use docview::formatters::DisplayMode;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "docview",
    version,
    about = "Search, sort, filter and page through rendered HTML documentation",
    long_about = None
)]
struct Cli {
    /// HTML page, directory of pages, or glob (e.g. "docs/**/*.html")
    #[arg(required_unless_present = "completions")]
    path: Option<String>,

    /// Search query, applied as if submitted in the page's search box
    query: Option<String>,

    /// Sort tables by the column matching KEY (repeat the same key to reverse)
    #[arg(short, long = "sort", value_name = "KEY")]
    sort: Vec<String>,

    /// Compare the column matching KEY numerically
    #[arg(long = "numeric", value_name = "KEY")]
    numeric: Vec<String>,

    /// Keep only elements whose CATEGORY equals VALUE (repeatable)
    #[arg(long = "filter", value_name = "CATEGORY=VALUE", value_parser = parse_filter)]
    filters: Vec<(FilterCategory, String)>,

    /// Page to show (clamped to the available pages)
    #[arg(long)]
    page: Option<usize>,

    /// Filterable elements per page
    #[arg(long, env = "DOCVIEW_ITEMS_PER_PAGE", default_value_t = docview::config::ITEMS_PER_PAGE)]
    items_per_page: usize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show full result text without truncation
    #[arg(long)]
    full_text: bool,

    /// Print the content-only rendering of each page
    #[arg(long)]
    print: bool,

    /// Browse the page in a terminal UI
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

fn parse_filter(raw: &str) -> Result<(FilterCategory, String), String> {
    let (category, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got '{raw}'"))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("missing value in '{raw}'"));
    }
    Ok((category.parse()?, value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "docview", &mut io::stdout());
        return Ok(());
    }

    logging::init_tracing(cli.verbose, cli.interactive);

    let Some(pattern) = cli.path.as_deref() else {
        anyhow::bail!("A page, directory or glob is required");
    };
    let pages = discover_pages(pattern)?;
    if pages.is_empty() {
        anyhow::bail!("No HTML pages found at {pattern}");
    }
    info!(pages = pages.len(), "discovered pages");

    if cli.interactive {
        if pages.len() > 1 {
            warn!(
                pages = pages.len(),
                "interactive mode shows the first page only"
            );
        }
        let view = open_view(&cli, &pages[0])?;
        if let Some(printed) = InteractiveView::new(view).run()? {
            println!("{printed}");
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut documents = Vec::new();

    for (i, path) in pages.iter().enumerate() {
        let view = open_view(&cli, path)?;
        match cli.format {
            OutputFormat::Text => {
                if pages.len() > 1 {
                    if i > 0 {
                        writeln!(handle)?;
                    }
                    writeln!(handle, "==> {} <==", path.display())?;
                }
                writeln!(handle, "{}", render_text(&cli, &view))?;
            }
            OutputFormat::Json => documents.push(page_json(path, &view)),
            OutputFormat::JsonL => match view.view().content {
                ContentArea::Results { results } => {
                    for result in &results {
                        let line = serde_json::json!({
                            "path": path,
                            "result": result,
                        });
                        serde_json::to_writer(&mut handle, &line)?;
                        writeln!(handle)?;
                    }
                }
                _ => {
                    serde_json::to_writer(&mut handle, &page_json(path, &view))?;
                    writeln!(handle)?;
                }
            },
        }
    }

    if let OutputFormat::Json = cli.format {
        let output = serde_json::json!({
            "pages": documents,
            "page_count": pages.len(),
        });
        serde_json::to_writer_pretty(&mut handle, &output)?;
        writeln!(handle)?;
    }

    Ok(())
}

/// Load one page and replay the command line onto it: filters, sorts, the
/// query, then the page.
fn open_view(cli: &Cli, path: &Path) -> Result<DocView> {
    let settings = Settings {
        items_per_page: cli.items_per_page,
        numeric_columns: cli.numeric.clone(),
        ..Settings::default()
    };
    let document = load_page(path)?;
    let mut view = DocView::new(document, settings);
    debug!(path = %path.display(), enhancements = ?view.enhancements(), "loaded page");

    for (category, value) in &cli.filters {
        view.toggle_filter(*category, value, true);
    }
    for key in &cli.sort {
        view.sort(key);
    }
    if let Some(query) = &cli.query {
        view.submit_search(query);
    }
    if let Some(page) = cli.page {
        view.go_to_page(page);
    }
    Ok(view)
}

fn render_text(cli: &Cli, view: &DocView) -> String {
    let use_color = !cli.no_color;
    let snapshot = view.view();

    if cli.print {
        return printable(view.document(), &snapshot);
    }

    match &snapshot.content {
        ContentArea::Document => {
            render_document(view.document(), &snapshot, DisplayMode::Screen, use_color)
        }
        ContentArea::NoResults { query } => results_summary(query, 0),
        ContentArea::Results { results } => {
            let mut out = vec![results_summary(&view.state().search_query, results.len())];
            for result in results {
                out.push(String::new());
                out.push(format_search_result(
                    result,
                    view.settings(),
                    use_color,
                    cli.full_text,
                ));
            }
            out.join("\n")
        }
    }
}

fn page_json(path: &Path, view: &DocView) -> serde_json::Value {
    serde_json::json!({
        "path": path,
        "title": view.document().title,
        "state": view.state(),
        "view": view.view(),
        "enhancements": view.enhancements(),
    })
}
