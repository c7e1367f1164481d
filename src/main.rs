use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use feather_icon::png_writer::save_png_rgba8;
use feather_icon::{FEATHER, IconProps, IconVariant, RenderContext, Rgb, rasterize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
}

/// Render the Feather icon as SVG markup or a PNG preview.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = IconVariant::Plain)]
    variant: IconVariant,
    /// Height in pixels, overriding the variant's own sizing.
    #[arg(long)]
    size: Option<u32>,
    /// Color applied to the icon element itself.
    #[arg(long)]
    color: Option<String>,
    /// Accessible label.
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    class: Option<String>,
    /// Inherited text color of the surrounding context, used for PNG output.
    #[arg(long, default_value = "#000000")]
    foreground: Rgb,
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
    /// Output file. SVG goes to stdout when omitted.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl Args {
    fn props(&self) -> IconProps {
        IconProps {
            variant: self.variant,
            size: self.size,
            color: self.color.clone(),
            title: self.title.clone(),
            class: self.class.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&Args::parse())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let props = args.props();

    match args.format {
        Format::Svg => {
            let markup = FEATHER.render(&props);
            match &args.output {
                Some(path) => {
                    fs::write(path, &markup)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote svg to {}", path.display());
                }
                None => println!("{markup}"),
            }
        }
        Format::Png => {
            let Some(path) = &args.output else {
                bail!("--output is required for png");
            };
            let ctx = RenderContext::with_foreground(args.foreground);
            let canvas = rasterize(&FEATHER, &props, &ctx).context("Failed to rasterize icon")?;
            save_png_rgba8(path, &canvas)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "Wrote {}x{} png to {}",
                canvas.width,
                canvas.height,
                path.display()
            );
        }
    }
    Ok(())
}
