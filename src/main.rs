use clap::{Parser, Subcommand};
use simple_landing::{config, content, generate, output, scan};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-landing")]
#[command(about = "Static site generator for single-page organization landing sites")]
#[command(long_about = "\
Static site generator for single-page organization landing sites

The page copy lives in content.toml; images live in one directory per section.
Each image filename is the identity of what it shows: team/david_amodu.jpeg
becomes \"David Amodu\" and is looked up as `david_amodu` in [team.meta].

Content structure:

  content/
  ├── config.toml          # Colors, sizes, header behavior (optional)
  ├── content.toml         # Page copy and metadata tables (optional)
  ├── assets/              # Logo, backgrounds → copied to output root
  ├── team/                # Portraits, ordered by role tier then name
  ├── events/              # First image is the featured event
  └── partners/            # Partner logos, in listed order

Role tiers (first match in the role text wins):
  founder → manager → tutor/instructor → contributor → any other role → no role

Run 'simple-landing gen-content' for a complete content.toml and
'simple-landing gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-landing-temp", global = true)]
    temp_dir: PathBuf,

    /// More diagnostics on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the HTML page from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock content.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Scan => {
            let manifest = load_and_scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: scan::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest, &report, &cli.output);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = load_and_scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &report, &cli.output);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = load_and_scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

/// Load config and content once, install the content, and scan.
fn load_and_scan(source: &Path) -> Result<scan::Manifest, Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let site_content = content::install(content::load_content(source)?)?;
    Ok(scan::scan_content(source, site_content.clone(), site_config)?)
}

fn write_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    tracing::debug!(path = %manifest_path.display(), "wrote manifest");
    Ok(manifest_path)
}

/// Diagnostics go to stderr so stdout stays the stage report.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("simple_landing={default_level}")));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
