//! # orderia-assets
//!
//! Generates the Orderia app's image assets.
//!
//! ```bash
//! # Placeholders and Android icons under the current directory
//! orderia-assets
//!
//! # Only the launcher icons, into another checkout, with a custom config
//! orderia-assets --root ../orderia-app --config assets.json android-icons
//!
//! # Decode everything that was written and compare with the config
//! orderia-assets verify
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use orderia_assets::android::generate_android_icons;
use orderia_assets::config::GeneratorConfig;
use orderia_assets::placeholders::generate_placeholders;
use orderia_assets::text::Font;
use orderia_assets::verify::{verify_expected, verify_tree};

// ── CLI Arguments ─────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "orderia-assets")]
#[command(about = "Generate placeholder PNGs and Android launcher icons")]
#[command(version)]
struct Args {
    /// Directory all output paths are relative to
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// JSON configuration file (defaults are used for missing fields)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Solid-color icon, adaptive icon, splash and favicon
    Placeholders,
    /// Launcher, round launcher and foreground icons per mipmap density
    AndroidIcons,
    /// Both generators (the default)
    All,
    /// Decode generated files and check them against the configuration
    Verify {
        /// Only check that every PNG under the root decodes
        #[arg(long)]
        tree: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_font(config: &GeneratorConfig) -> Font {
    let source = config.android.font.as_ref().map(|f| (f.atlas.as_path(), f.glyphs.as_path()));
    Font::load_or_builtin(source)
}

fn run_placeholders(root: &Path, config: &GeneratorConfig) -> Result<()> {
    generate_placeholders(root, &config.placeholders).context("generating placeholder PNGs")?;
    Ok(())
}

fn run_android(root: &Path, config: &GeneratorConfig) -> Result<()> {
    let font = load_font(config);
    generate_android_icons(root, &config.android, &font).context("generating Android icons")?;
    Ok(())
}

fn run_verify(root: &Path, config: &GeneratorConfig, tree: bool) -> Result<()> {
    let report = if tree { verify_tree(root)? } else { verify_expected(root, config)? };
    let checked = report.images.len();
    report.into_result().context("verifying generated assets")?;
    log::info!("{checked} PNG files verified");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    match args.command.unwrap_or(Command::All) {
        Command::Placeholders => run_placeholders(&args.root, &config)?,
        Command::AndroidIcons => run_android(&args.root, &config)?,
        Command::All => {
            run_placeholders(&args.root, &config)?;
            run_android(&args.root, &config)?;
        }
        Command::Verify { tree } => run_verify(&args.root, &config, tree)?,
        Command::Config => println!("{}", config.to_json_pretty()?),
    }
    Ok(())
}
