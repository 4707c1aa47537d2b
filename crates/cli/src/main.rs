use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use inkshape::{optimize_document, Document, ShapeCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "inkshape")]
#[command(about = "Simplify freehand ink and recognize lines, circles and rectangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Optimize a JSON document and write the result plus a provenance sidecar
    Optimize {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Write a synthetic hand-drawn document
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Print a small provenance JSON block with the default tolerances
    Report,
}

/// Tolerance overrides; flags win over `--config`, which wins over defaults.
#[derive(Args, Clone, Debug, Default)]
struct TolArgs {
    /// JSON file with any subset of the tolerance fields
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    collinear_cos: Option<f64>,
    #[arg(long)]
    pressure_tol: Option<f64>,
    #[arg(long)]
    circle_tol: Option<f64>,
    #[arg(long)]
    min_circle_points: Option<usize>,
    #[arg(long)]
    allow_degenerate_rectangles: bool,
}

impl TolArgs {
    fn resolve(&self) -> Result<ShapeCfg> {
        let mut cfg: ShapeCfg = match &self.config {
            Some(path) => {
                let raw = std::fs::read(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_slice(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => ShapeCfg::default(),
        };
        if let Some(v) = self.collinear_cos {
            cfg.collinear_cos = v;
        }
        if let Some(v) = self.pressure_tol {
            cfg.pressure_tol = v;
        }
        if let Some(v) = self.circle_tol {
            cfg.circle_tol = v;
        }
        if let Some(v) = self.min_circle_points {
            cfg.min_circle_points = v;
        }
        if self.allow_degenerate_rectangles {
            cfg.reject_degenerate_rectangles = false;
        }
        if !(0.0..=1.0).contains(&cfg.collinear_cos) {
            bail!("collinear_cos must lie in [0, 1], got {}", cfg.collinear_cos);
        }
        // NaN compares false, so it fails here too.
        let non_negative = |v: f64| v >= 0.0;
        if !non_negative(cfg.pressure_tol) || !non_negative(cfg.circle_tol) {
            bail!(
                "tolerances must be non-negative, got pressure_tol {} circle_tol {}",
                cfg.pressure_tol,
                cfg.circle_tol
            );
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Optimize { input, out, tol } => optimize(&input, &out, &tol),
        Action::Demo { out, seed, pages } => demo(&out, seed, pages),
        Action::Report => report(),
    }
}

fn optimize(input: &Path, out: &Path, tol: &TolArgs) -> Result<()> {
    let cfg = tol.resolve()?;
    tracing::info!(input = %input.display(), out = %out.display(), "optimize");
    let mut doc = read_document(input)?;
    if let Err(err) = doc.validate() {
        tracing::warn!(%err, "rejecting input");
        return Err(err).with_context(|| format!("validating {}", input.display()));
    }
    let stats = optimize_document(&mut doc, &cfg);
    write_json(out, &doc)?;

    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "cfg": cfg,
    }))
    .with_stats(serde_json::to_value(stats)?);
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote outputs");
    Ok(())
}

fn demo(out: &Path, seed: u64, pages: usize) -> Result<()> {
    tracing::info!(seed, pages, out = %out.display(), "demo");
    let doc = inkshape::synth::demo_document(seed, pages);
    write_json(out, &doc)
}

fn report() -> Result<()> {
    let obj = provenance::document(
        &[],
        Payload::new(serde_json::json!({ "cfg": ShapeCfg::default() })),
    );
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_document(path: &Path) -> Result<Document> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
