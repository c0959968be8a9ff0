use clap::Parser;
use serde::{Deserialize, Serialize};
use spritexform::io::{load_indexed_image, save_indexed_image};
use spritexform::{
    scale2x_with, scale3x_with, EdgeMode, IndexedImage, RotationConfig, RotationState,
    ScaleConfig, ScaleFactor,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Spritexform CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum EdgeConfig {
    #[default]
    Clamp,
    Background,
}

impl From<EdgeConfig> for EdgeMode {
    fn from(value: EdgeConfig) -> Self {
        match value {
            EdgeConfig::Clamp => EdgeMode::Clamp,
            EdgeConfig::Background => EdgeMode::Background,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SupersampleConfig {
    #[default]
    X2,
    X3,
}

impl From<SupersampleConfig> for ScaleFactor {
    fn from(value: SupersampleConfig) -> Self {
        match value {
            SupersampleConfig::X2 => ScaleFactor::X2,
            SupersampleConfig::X3 => ScaleFactor::X3,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RotationConfigJson {
    supersample: SupersampleConfig,
    exact_right_angles: bool,
}

impl Default for RotationConfigJson {
    fn default() -> Self {
        Self {
            supersample: SupersampleConfig::X2,
            exact_right_angles: RotationConfig::default().exact_right_angles,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum OpConfig {
    Scale2x,
    Scale3x,
    Rotate { angle_deg: i64 },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: String,
    edge: EdgeConfig,
    rotation: RotationConfigJson,
    ops: Vec<OpConfig>,
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    colors: Vec<u8>,
    ops_applied: usize,
}

fn apply(
    img: IndexedImage,
    op: &OpConfig,
    scale_cfg: ScaleConfig,
    rot_cfg: RotationConfig,
) -> IndexedImage {
    match op {
        OpConfig::Scale2x => scale2x_with(&img, scale_cfg),
        OpConfig::Scale3x => scale3x_with(&img, scale_cfg),
        OpConfig::Rotate { angle_deg } => RotationState::new(&img, rot_cfg).render(*angle_deg),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("spritexform=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() || config.output_path.is_empty() {
        return Err("input_path and output_path must be set in the config".into());
    }
    if config.ops.is_empty() {
        return Err("ops must list at least one operation".into());
    }

    let edge: EdgeMode = config.edge.into();
    let scale_cfg = ScaleConfig { edge };
    let rot_cfg = RotationConfig {
        supersample: config.rotation.supersample.into(),
        edge,
        exact_right_angles: config.rotation.exact_right_angles,
    };

    let mut img = load_indexed_image(&config.input_path)?;
    for op in &config.ops {
        tracing::info!(?op, width = img.width(), height = img.height(), "applying op");
        img = apply(img, op, scale_cfg, rot_cfg);
    }
    save_indexed_image(&img, &config.output_path)?;

    let colors: BTreeSet<u8> = img.data().iter().copied().collect();
    let output = Output {
        width: img.width(),
        height: img.height(),
        colors: colors.into_iter().collect(),
        ops_applied: config.ops.len(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
