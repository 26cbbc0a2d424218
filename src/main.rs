use clap::{Parser, Subcommand};
use folio::{EngineBuilder, EngineConfig, FolioError, PageReport, catalog};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Render block-based pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page to HTML.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Block catalog: a JSON array file or a directory of manifests.
    #[arg(long)]
    catalog: PathBuf,

    /// Directory template references are resolved against.
    #[arg(long)]
    templates: PathBuf,

    /// Page JSON (array of sections, or an object with `sections`).
    #[arg(long)]
    page: PathBuf,

    /// Emit the style stream ahead of the body.
    #[arg(long, default_value_t = false)]
    styles: bool,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file; stdout if omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log an outcome summary per stream.
    #[arg(long, default_value_t = false)]
    report: bool,
}

fn main() -> Result<(), FolioError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info")).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<(), FolioError> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let engine = EngineBuilder::new()
        .with_config(config)
        .with_registry(catalog::load_catalog(&args.catalog)?)
        .with_template_dir(&args.templates)
        .build()?;

    let page = catalog::load_page(&args.page)?;
    let rendered = engine.render_page(page.sections());

    if args.report {
        log_report("body", &rendered.body_report());
        if args.styles {
            log_report("styles", &rendered.style_report());
        }
    }

    let mut html = String::with_capacity(rendered.styles.len() + rendered.body.len());
    if args.styles {
        html.push_str(&rendered.styles);
    }
    html.push_str(&rendered.body);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn log_report(stream: &str, report: &PageReport) {
    if report.has_problems() {
        log::warn!("{stream}: {report}");
    } else {
        log::info!("{stream}: {report}");
    }
}
