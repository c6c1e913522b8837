use std::path::PathBuf;

use anyhow::{bail, Context};
use balcony_core::{instance_bytes, Catalog, Layout, Parameters, Preset, RawParameters, Role};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "balcony-native", about = "Lay out balcony presets from a manufacturer catalog")]
struct Args {
    /// Manufacturer slug; all manufacturers when omitted.
    manufacturer: Option<String>,

    /// Preset id; every preset of the manufacturer when omitted.
    preset: Option<String>,

    /// Catalog JSON to use instead of the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Parameter JSON (camelCase) to fit into each preset.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Print the placements as JSON.
    #[arg(long)]
    json: bool,
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&json).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()?),
    }
}

fn requested_parameters(preset: &Preset, path: Option<&PathBuf>) -> anyhow::Result<Parameters> {
    let Some(path) = path else {
        return Ok(preset.default_parameters());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading parameters {}", path.display()))?;
    let raw: RawParameters = serde_json::from_str(&json)
        .with_context(|| format!("parsing parameters {}", path.display()))?;
    Ok(preset.admit(&raw)?)
}

fn run_preset(preset: &Preset, args: &Args) -> anyhow::Result<()> {
    let params = requested_parameters(preset, args.params.as_ref())?;
    let layout = Layout::compute(&params).with_context(|| format!("layout for {}", preset.id))?;
    let counts = layout.counts();
    log::info!(
        "[layout] {} ({}): {:.2}x{:.2} m, {} supports, {} -> {} elements ({})",
        preset.name,
        preset.id,
        params.width,
        params.depth,
        params.support_count,
        params.railing_style,
        counts.total(),
        counts
    );
    let instances = layout.instances();
    log::debug!(
        "[layout] {} posts, {} handrails, {} instance bytes",
        counts.get(Role::Post),
        counts.get(Role::Handrail),
        instance_bytes(&instances).len()
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(layout.placements())?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let catalog = load_catalog(args.catalog.as_ref())?;

    match (&args.manufacturer, &args.preset) {
        (Some(slug), Some(preset_id)) => {
            let (manufacturer, preset) = catalog.resolve(slug, preset_id)?;
            log::info!("[preset] {} / {}", manufacturer.name, preset.name);
            run_preset(preset, &args)
        }
        (Some(slug), None) => {
            let presets = catalog.presets_for(slug);
            if presets.is_empty() {
                bail!("manufacturer {slug} has no presets");
            }
            for preset in presets {
                run_preset(preset, &args)?;
            }
            Ok(())
        }
        _ => {
            for preset in catalog.presets.values() {
                run_preset(preset, &args)?;
            }
            Ok(())
        }
    }
}
