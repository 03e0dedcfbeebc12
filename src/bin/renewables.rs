use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use renewables_se::format::{DEFAULT_LOCALE, format_number, format_percent, format_with_unit};
use renewables_se::view::DEFAULT_TOP_N;
use renewables_se::{
    DashboardView, Event, Metric, RegionDataset, ScaleCache, SelectionState, ViewOptions, reduce,
};
use renewables_se::{ranking, resolve, stats, storage};

#[derive(Parser, Debug)]
#[command(
    name = "renewables",
    version,
    about = "Rank, color & summarize renewable electricity production in Swedish counties (2023)"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All regions ranked by a metric, with their grid colors.
    Grid(MetricArgs),
    /// The top-N regions for a metric.
    Top(TopArgs),
    /// National production per generation type.
    Mix(DisplayArgs),
    /// Every metric for one region.
    Region(RegionArgs),
    /// Min/max/mean/median for every metric.
    Summary(DisplayArgs),
    /// List regions whose total differs from wind + hydro + solar.
    Audit(AuditArgs),
    /// Write the region table to CSV or JSON.
    Export(ExportArgs),
    /// Full dashboard view model as JSON for a given selection.
    View(ViewArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Wind,
    Hydro,
    Solar,
    Total,
    #[value(alias = "perCapita", alias = "per_capita")]
    PerCapita,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Wind => Metric::Wind,
            MetricArg::Hydro => Metric::Hydro,
            MetricArg::Solar => Metric::Solar,
            MetricArg::Total => Metric::Total,
            MetricArg::PerCapita => Metric::PerCapita,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Locale for number grouping (sv, en, de, fr, ...).
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,
    /// Print machine-readable JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct MetricArgs {
    /// Metric to rank and color by.
    #[arg(short, long, value_enum, default_value_t = MetricArg::Wind)]
    metric: MetricArg,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Debug)]
struct TopArgs {
    #[command(flatten)]
    metric: MetricArgs,
    /// Number of regions to show.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
}

#[derive(Args, Debug)]
struct RegionArgs {
    /// Region name, e.g. "Västra Götaland".
    name: String,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// Allowed difference in GWh.
    #[arg(long, default_value_t = 0.0)]
    tolerance: f64,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output path.
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct ViewArgs {
    #[arg(short, long, value_enum, default_value_t = MetricArg::Wind)]
    metric: MetricArg,
    /// Region under the pointer.
    #[arg(long)]
    hover: Option<String>,
    /// Clicked (sticky) region.
    #[arg(long)]
    click: Option<String>,
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
    /// Clamp color channels to 0..=255.
    #[arg(long, default_value_t = false)]
    clamp_colors: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let data = RegionDataset::reference();
    match cli.cmd {
        Command::Grid(args) => cmd_grid(&data, args),
        Command::Top(args) => cmd_top(&data, args),
        Command::Mix(args) => cmd_mix(&data, args),
        Command::Region(args) => cmd_region(&data, args),
        Command::Summary(args) => cmd_summary(&data, args),
        Command::Audit(args) => cmd_audit(&data, args),
        Command::Export(args) => cmd_export(&data, args),
        Command::View(args) => cmd_view(&data, args),
    }
}

fn cmd_grid(data: &RegionDataset, args: MetricArgs) -> Result<()> {
    let metric = Metric::from(args.metric);
    let state = reduce(&SelectionState::default(), Event::SelectMetric(metric), data);
    let view = DashboardView::build(data, &state, &mut ScaleCache::new(), &ViewOptions::default())?;
    if args.display.json {
        println!("{}", serde_json::to_string_pretty(&view.grid)?);
        return Ok(());
    }
    println!("{}", view.grid_title);
    for (i, cell) in view.grid.iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>16}  {}",
            i + 1,
            cell.name,
            format_with_unit(cell.value, view.unit, &args.display.locale),
            cell.color.to_hex()
        );
    }
    Ok(())
}

fn cmd_top(data: &RegionDataset, args: TopArgs) -> Result<()> {
    let metric = Metric::from(args.metric.metric);
    let top = ranking::top_n(data, metric, args.top);
    if args.metric.display.json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }
    println!("Topp {} län - {}", args.top, metric.name());
    for (i, rv) in top.iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>16}",
            i + 1,
            rv.name,
            format_with_unit(rv.value, metric.unit(), &args.metric.display.locale)
        );
    }
    Ok(())
}

fn cmd_mix(data: &RegionDataset, args: DisplayArgs) -> Result<()> {
    let mix = ranking::national_mix(data);
    let total = ranking::national_total(data);
    if args.json {
        let out = serde_json::json!({ "mix": mix, "total": total });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!("Sveriges Energimix");
    for slice in &mix {
        println!(
            "{:<12} {:>12}  {:>6}",
            slice.label,
            format_with_unit(slice.value, "GWh", &args.locale),
            format_percent(slice.share(&mix), &args.locale)
        );
    }
    println!("Total: {}", format_with_unit(total, "GWh", &args.locale));
    Ok(())
}

fn cmd_region(data: &RegionDataset, args: RegionArgs) -> Result<()> {
    let d = resolve::detail(data, &args.name)?;
    if args.display.json {
        println!("{}", serde_json::to_string_pretty(&d)?);
        return Ok(());
    }
    let loc = args.display.locale.as_str();
    println!("{}", d.name);
    println!("Vindkraft:        {}", format_with_unit(d.wind, "GWh", loc));
    println!("Vattenkraft:      {}", format_with_unit(d.hydro, "GWh", loc));
    println!("Solkraft:         {}", format_with_unit(d.solar, "GWh", loc));
    println!("Total produktion: {}", format_with_unit(d.total, "GWh", loc));
    println!("Per invånare:     {}", format_with_unit(d.per_capita, "kWh", loc));
    Ok(())
}

fn fmt_opt(v: Option<f64>, locale: &str) -> String {
    match v {
        Some(x) if x.is_finite() => format_number(x, locale),
        _ => "NA".to_string(),
    }
}

fn cmd_summary(data: &RegionDataset, args: DisplayArgs) -> Result<()> {
    let summaries = stats::summaries(data);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for s in summaries {
        println!(
            "{:<10} count={}  min={} ({})  max={} ({})  mean={}  median={}",
            s.metric.key(),
            s.count,
            fmt_opt(s.min, &args.locale),
            s.min_region.as_deref().unwrap_or("-"),
            fmt_opt(s.max, &args.locale),
            s.max_region.as_deref().unwrap_or("-"),
            fmt_opt(s.mean, &args.locale),
            fmt_opt(s.median, &args.locale)
        );
    }
    Ok(())
}

fn cmd_audit(data: &RegionDataset, args: AuditArgs) -> Result<()> {
    let found = stats::total_discrepancies(data, args.tolerance);
    if found.is_empty() {
        println!("All {} regions: total matches wind + hydro + solar", data.len());
    }
    for d in found {
        println!(
            "{}: total={} components={} diff={}",
            d.name, d.total, d.component_sum, d.difference
        );
    }
    Ok(())
}

fn cmd_export(data: &RegionDataset, args: ExportArgs) -> Result<()> {
    let path = &args.out;
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(data, path)?,
        "json" => storage::save_json(data, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", data.len(), path.display());
    Ok(())
}

fn cmd_view(data: &RegionDataset, args: ViewArgs) -> Result<()> {
    for (flag, requested) in [("--click", &args.click), ("--hover", &args.hover)] {
        if let Some(name) = requested {
            data.get(name)
                .with_context(|| format!("{flag} does not name a region"))?;
        }
    }
    let mut state = SelectionState::default();
    for event in [
        Event::SelectMetric(args.metric.into()),
        Event::ClickRegion(args.click.clone()),
        Event::HoverRegion(args.hover.clone()),
    ] {
        state = reduce(&state, event, data);
    }
    let opts = ViewOptions {
        top_n: args.top,
        clamp_colors: args.clamp_colors,
    };
    let view = DashboardView::build(data, &state, &mut ScaleCache::new(), &opts)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
