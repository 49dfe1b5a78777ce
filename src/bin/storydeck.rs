use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use storydeck::{
    CreativeField, GeminiBackend, InlineImage, Language, PanelLayout, StoryboardSession,
    format_secs, merge,
};

#[derive(Parser, Debug)]
#[command(name = "storydeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge already-rendered panel images into one PNG.
    Compose(ComposeArgs),
    /// Inspect the anchor/arrangement inferred from selected grid cells.
    Overlay(OverlayArgs),
    /// Print a budgeted shot timeline for a total duration.
    Plan(PlanArgs),
    /// Run the full generative pipeline (requires GEMINI_API_KEY).
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Layout id: single, grid2x2, grid3x3, one-plus-two, vertical-strip,
    /// horizontal-strip.
    #[arg(long, default_value = "horizontal-strip")]
    layout: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Source images, in panel order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Comma-separated cell indices on the 5x5 grid, e.g. `0,6,12,18,24`.
    #[arg(long)]
    cells: String,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Total duration budget in seconds.
    #[arg(long, default_value_t = 20.0)]
    total: f64,

    /// Shots to attempt to add.
    #[arg(long, default_value_t = 4)]
    shots: usize,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Main reference image (png or jpeg).
    #[arg(long)]
    image: PathBuf,

    /// Natural-language creative direction.
    #[arg(long, default_value = "")]
    direction: String,

    /// Art style for every panel.
    #[arg(long, default_value = "Cinematic Realism")]
    style: String,

    /// Number of shots to plan and render.
    #[arg(long, default_value_t = 4)]
    shots: usize,

    /// Export layout id.
    #[arg(long, default_value = "horizontal-strip")]
    layout: String,

    /// Output language: en or zh.
    #[arg(long, default_value = "en")]
    lang: String,

    /// Directory for the exported PNG.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Overlay(args) => cmd_overlay(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn parse_layout(id: &str) -> anyhow::Result<PanelLayout> {
    PanelLayout::from_id(id).with_context(|| {
        let ids: Vec<_> = PanelLayout::ALL.iter().map(|l| l.id()).collect();
        format!("unknown layout '{id}' (expected one of: {})", ids.join(", "))
    })
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let layout = parse_layout(&args.layout)?;

    let mut images = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let img = image::open(path)
            .with_context(|| format!("open '{}'", path.display()))?
            .to_rgba8();
        images.push(img);
    }

    let canvas = merge(&images, layout)?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    canvas
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let cells = args
        .cells
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<usize>().context("cell indices must be integers"))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let selection = storydeck::GridSelection::from_cells(cells);
    println!("position:    {}", selection.position_description());
    println!("arrangement: {}", selection.arrangement().display_label());
    println!("prompt:      {}", selection.arrangement().orientation_prompt());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut timeline = storydeck::ShotTimeline::new(args.total);
    for _ in 0..args.shots {
        if timeline.add_shot().is_none() {
            eprintln!("budget exhausted; stopping early");
            break;
        }
    }

    println!("total: {}s", format_secs(timeline.total_duration));
    for (i, shot) in timeline.shots.iter().enumerate() {
        println!("shot {:>2}  {}s", i + 1, format_secs(shot.duration));
    }
    println!("remaining: {}s", format_secs(timeline.remaining()));
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let api_key =
        std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set for generate")?;
    let layout = parse_layout(&args.layout)?;
    let language = match args.lang.as_str() {
        "zh" => Language::Zh,
        _ => Language::En,
    };

    let bytes =
        std::fs::read(&args.image).with_context(|| format!("read '{}'", args.image.display()))?;
    let mime = match args.image.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/png",
    };

    let mut session = StoryboardSession::new(GeminiBackend::new(api_key));
    session.language = language;
    session.planned_shot_count = args.shots;
    session.visual.main_image = Some(InlineImage::from_bytes(mime, &bytes));
    session.visual.user_prompt = CreativeField {
        custom: args.direction,
        auto: true,
        selected: String::new(),
    };
    session.render.style = args.style;
    session.render.layout = layout;

    let runtime = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    runtime.block_on(async {
        if !session.analyze_main_image().await {
            anyhow::bail!("image analysis produced no description");
        }
        if !session.plan_from_analysis().await {
            anyhow::bail!("shot planning produced no plan");
        }
        let rendered = session.render_storyboard().await;
        if rendered == 0 {
            anyhow::bail!("no panels were rendered");
        }
        eprintln!("rendered {rendered} panels");
        Ok(())
    })?;

    let path = session.export_merged(&args.out_dir)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
