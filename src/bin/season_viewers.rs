use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use season_viewers::viz::OutputFormat;
use season_viewers::{ChartApp, ChartConfig, FilterPolicy, Provenance, stats};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "season-viewers",
    version,
    about = "Render a season viewership bar chart to SVG or PNG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the data, apply interactions, and write the chart.
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Svg,
    Png,
    PlainSvg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CategoryArg {
    Actual,
    Estimated,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Composable,
    ClearAll,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// CSV file path or http(s) URL.
    #[arg(short, long)]
    data: String,
    /// Output file (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// Output format. If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// JSON file overriding chart layout and colors.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Locale for tick labels (en, de, fr, ...).
    #[arg(long)]
    locale: Option<String>,
    /// Font file for text in PNG / plain-SVG output.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Click a filter toggle; repeat to click several times, in order.
    #[arg(long, value_enum)]
    click: Vec<CategoryArg>,
    /// How the two filters combine.
    #[arg(long, value_enum)]
    filter_policy: Option<PolicyArg>,
    /// Show the tooltip of the season with this year.
    #[arg(long)]
    hover: Option<i32>,
    /// Show the average line's tooltip.
    #[arg(long, default_value_t = false)]
    hover_average: bool,
    /// Print per-category statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut cfg = match &args.config {
        Some(p) => ChartConfig::from_json_file(p)
            .with_context(|| format!("reading config {}", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(locale) = args.locale {
        cfg.locale = locale;
    }
    if let Some(font) = args.font {
        cfg.font_path = Some(font);
    }
    if let Some(policy) = args.filter_policy {
        cfg.filter_policy = match policy {
            PolicyArg::Composable => FilterPolicy::Composable,
            PolicyArg::ClearAll => FilterPolicy::ClearAllOnRelease,
        };
    }

    let mut app = ChartApp::load(&args.data, cfg)
        .with_context(|| format!("loading seasons from {}", args.data))?;

    for c in &args.click {
        let p = match c {
            CategoryArg::Actual => Provenance::Actual,
            CategoryArg::Estimated => Provenance::Estimated,
        };
        app.click_filter(p)?;
    }
    if let Some(year) = args.hover {
        app.hover_bar(year)?;
    }
    if args.hover_average {
        app.hover_average()?;
    }

    let format = match args.format {
        Some(FormatArg::Svg) => OutputFormat::Svg,
        Some(FormatArg::Png) => OutputFormat::Png,
        Some(FormatArg::PlainSvg) => OutputFormat::PlainSvg,
        None => OutputFormat::from_path(&args.out),
    };
    app.write(&args.out, format)
        .with_context(|| format!("writing {}", args.out.display()))?;
    eprintln!("Wrote chart to {}", args.out.display());

    if args.stats {
        for s in stats::provenance_summary(app.rows()) {
            println!(
                "{}  count={}  min={:.2} max={:.2} mean={:.2}",
                s.provenance, s.count, s.min, s.max, s.mean
            );
        }
        println!("average={:.1}", app.average());
    }
    Ok(())
}
