use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "whorl", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a standalone animated SVG document.
    Svg(SvgArgs),
    /// Export an HTML fragment + keyframe stylesheet pair.
    Css(CssArgs),
    /// Export an HTML fragment + GSAP timeline script pair.
    Gsap(GsapArgs),
    /// Dump the compiled live-render model as JSON.
    Model(ModelArgs),
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input spinner configuration JSON. Omit to use the default spinner.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for the random shape/radius draws (reproducible exports).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct CssArgs {
    /// Input spinner configuration JSON. Omit to use the default spinner.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output HTML fragment path.
    #[arg(long)]
    out_html: PathBuf,

    /// Output stylesheet path.
    #[arg(long)]
    out_css: PathBuf,

    /// Seed for the random shape/radius draws (reproducible exports).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct GsapArgs {
    /// Input spinner configuration JSON. Omit to use the default spinner.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output HTML fragment path.
    #[arg(long)]
    out_html: PathBuf,

    /// Output script path.
    #[arg(long)]
    out_js: PathBuf,

    /// Seed for the random shape/radius draws (reproducible exports).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct ModelArgs {
    /// Input spinner configuration JSON. Omit to use the default spinner.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for the random shape/radius draws (reproducible exports).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Css(args) => cmd_css(args),
        Command::Gsap(args) => cmd_gsap(args),
        Command::Model(args) => cmd_model(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<whorl::SpinnerConfig> {
    let Some(path) = path else {
        return Ok(whorl::SpinnerConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: whorl::SpinnerConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(config)
}

fn compile(config: &whorl::SpinnerConfig, seed: Option<u64>) -> anyhow::Result<whorl::CompiledGeometry> {
    let geo = match seed {
        Some(seed) => whorl::compile_seeded(config, seed)?,
        None => whorl::compile(config)?,
    };
    Ok(geo)
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let config = read_config(args.in_path.as_deref())?;
    let geo = compile(&config, args.seed)?;
    let svg = whorl::emit_svg(&geo, &config);
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_css(args: CssArgs) -> anyhow::Result<()> {
    let config = read_config(args.in_path.as_deref())?;
    let geo = compile(&config, args.seed)?;
    match whorl::emit_css(&geo, &config) {
        whorl::CssExport::Stylesheet { html, css } => {
            std::fs::write(&args.out_html, html)
                .with_context(|| format!("write html '{}'", args.out_html.display()))?;
            std::fs::write(&args.out_css, css)
                .with_context(|| format!("write css '{}'", args.out_css.display()))?;
            println!("wrote {} and {}", args.out_html.display(), args.out_css.display());
        }
        whorl::CssExport::Unsupported { placeholder } => {
            // Surface the placeholder instead of writing partial output.
            println!("{placeholder}");
        }
    }
    Ok(())
}

fn cmd_gsap(args: GsapArgs) -> anyhow::Result<()> {
    let config = read_config(args.in_path.as_deref())?;
    let geo = compile(&config, args.seed)?;
    let export = whorl::emit_gsap(&geo, &config);
    std::fs::write(&args.out_html, export.html)
        .with_context(|| format!("write html '{}'", args.out_html.display()))?;
    std::fs::write(&args.out_js, export.js)
        .with_context(|| format!("write js '{}'", args.out_js.display()))?;
    println!("wrote {} and {}", args.out_html.display(), args.out_js.display());
    Ok(())
}

fn cmd_model(args: ModelArgs) -> anyhow::Result<()> {
    let config = read_config(args.in_path.as_deref())?;
    let geo = compile(&config, args.seed)?;
    let model = whorl::render_model(&geo, &config);
    let json = serde_json::to_string_pretty(&model).with_context(|| "serialize render model")?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write model '{}'", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}
