use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use orbitmap_common::Complex;
use orbitmap_config::SceneConfig;
use orbitmap_kernel::Scene;
use orbitmap_render::{SvgRenderer, TextRenderer, TraceRenderer, TraceStyle};
use orbitmap_trace::sample;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orbitmap-cli", about = "CLI for iterated complex-map orbits")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a JSON or YAML scene configuration (defaults apply if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective configuration
    Info,
    /// Step one or more orbits and print their positions per tick
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10")]
        ticks: u64,
        /// Number of independent orbits to spawn
        #[arg(short, long, default_value = "1")]
        orbits: usize,
    },
    /// Sample a bounded trajectory and render it
    Trace {
        /// Number of segments (overrides the configured count)
        #[arg(short, long)]
        count: Option<u32>,
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: TraceFormat,
        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TraceFormat {
    Text,
    Svg,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SceneConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("orbitmap-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("trace: {}", orbitmap_trace::crate_info());
            println!("render: {}", orbitmap_render::crate_info());
            println!(
                "config:\n{}",
                serde_json::to_string_pretty(&config).context("serializing config")?
            );
        }
        Commands::Run { ticks, orbits } => {
            println!("Stepping {orbits} orbit(s) for {ticks} tick(s)");

            let params = config.map_params();
            let mut scene = Scene::new();
            for i in 0..orbits {
                // Fan the starts out along the real axis so multiple orbits
                // are distinguishable in the output.
                let start = config.start() + Complex::real(i as f32 * 0.01);
                scene.spawn(start, params);
            }

            for _ in 0..ticks {
                scene.step();
                for (id, position) in scene.positions() {
                    println!(
                        "tick {:4} [{:.8}] pos=({:.4}, {:.4})",
                        scene.tick(),
                        &id.0.to_string()[..8],
                        position.x,
                        position.y
                    );
                }
            }
        }
        Commands::Trace {
            count,
            format,
            output,
        } => {
            let count = count.unwrap_or(config.trace.count);
            let segments = sample(config.start(), &config.map_params(), count);
            let (start_color, end_color) = config.trace.colors();
            let style = TraceStyle {
                start_color,
                end_color,
            };

            let rendered = match format {
                TraceFormat::Text => TextRenderer::new().render(&segments, &style),
                TraceFormat::Svg => SvgRenderer::default().render(&segments, &style),
                TraceFormat::Json => {
                    serde_json::to_string_pretty(&segments).context("serializing segments")?
                }
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(path = %path.display(), segments = segments.len(), "trace written");
                }
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}
