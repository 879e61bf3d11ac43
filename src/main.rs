//! derivview - plot demo functions and their mixed partial derivatives.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use derivview::demo::Demo;
use derivview::display::{HeadlessRenderer, Renderer, TerminalRenderer};
use derivview::grid::Bounds;
use derivview::plot::{ColoredOptions, Plot1dOptions, Plot2dOptions, PlotKind, Plotter, StyleOptions};
use derivview::ui::Theme;
use derivview::util::Palette;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoArg {
    /// sin(xy)
    Sinxy,
    /// sin(xy) colored by its mixed partial derivative
    SinxyMixed,
    /// x^2 y + 2 y^3 x
    Poly,
    /// The polynomial colored by its mixed partial derivative
    PolyMixed,
    /// A ring of radius 2
    Circle,
    /// The ring colored by its mixed partial derivative
    CircleMixed,
    /// Two bumps at x = -4 and x = 4 (one variable)
    Bumps,
}

impl From<DemoArg> for Demo {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::Sinxy => Demo::SinXy,
            DemoArg::SinxyMixed => Demo::SinXyMixed,
            DemoArg::Poly => Demo::Poly,
            DemoArg::PolyMixed => Demo::PolyMixed,
            DemoArg::Circle => Demo::Circle,
            DemoArg::CircleMixed => Demo::CircleMixed,
            DemoArg::Bumps => Demo::Bumps,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "derivview")]
#[command(about = "Terminal plots of functions and their partial derivatives", long_about = None)]
struct Args {
    /// Function to plot
    #[arg(value_enum)]
    function: DemoArg,

    /// Samples per axis
    #[arg(short = 'n', long, default_value_t = 100)]
    samples: usize,

    /// X bounds as LOW,HIGH (defaults depend on the function)
    #[arg(long, allow_hyphen_values = true)]
    xbounds: Option<Bounds>,

    /// Y bounds as LOW,HIGH (defaults depend on the function)
    #[arg(long, allow_hyphen_values = true)]
    ybounds: Option<Bounds>,

    /// Plot kind: line, scatter, wireframe or surface
    #[arg(short, long)]
    kind: Option<PlotKind>,

    /// Draw every n-th mesh row and column
    #[arg(long, default_value_t = 1)]
    stride: usize,

    /// Stroke width (1 braille, 2 half block, 3 block)
    #[arg(long, default_value_t = 1)]
    line_width: u8,

    /// Series opacity between 0 and 1
    #[arg(long, default_value_t = 1.0)]
    opacity: f64,

    /// Palette for surface shading and color maps: viridis, plasma, rainbow or blue-red
    #[arg(short, long, default_value = "viridis")]
    palette: Palette,

    /// Use the light theme
    #[arg(long)]
    light: bool,

    /// Render off-screen at WIDTHxHEIGHT and print the frame as text
    #[arg(long, value_parser = parse_size)]
    headless: Option<(u16, u16)>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_size(s: &str) -> std::result::Result<(u16, u16), String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse::<u16>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<u16>().map_err(|e| e.to_string())?;
    if w == 0 || h == 0 {
        return Err("width and height must be positive".to_string());
    }
    Ok((w, h))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting derivview");
    }

    let theme = if args.light {
        Theme::GruvboxLight
    } else {
        Theme::GruvboxDark
    };

    match args.headless {
        Some((width, height)) => {
            let mut renderer = HeadlessRenderer::new(width, height).with_theme(theme);
            run(&mut Plotter::new(&mut renderer), &args)?;
            if let Some(text) = renderer.last_frame_text() {
                println!("{}", text);
            }
        },
        None => {
            run(&mut Plotter::new(TerminalRenderer::new().with_theme(theme)), &args)?;
        },
    }

    if args.log.is_some() {
        tracing::info!("derivview exited");
    }

    Ok(())
}

fn run<R: Renderer>(plotter: &mut Plotter<R>, args: &Args) -> Result<()> {
    let demo = Demo::from(args.function);
    let defaults = demo.default_bounds();
    let xbounds = args.xbounds.unwrap_or(defaults);
    let ybounds = args.ybounds.unwrap_or(defaults);
    let style = StyleOptions::default()
        .with_stride(args.stride, args.stride)
        .with_line_width(args.line_width)
        .with_opacity(args.opacity)
        .with_palette(args.palette);

    if let Some(curve) = demo.curve() {
        let opts = Plot1dOptions {
            samples: args.samples,
            bounds: xbounds,
            kind: args.kind.unwrap_or(PlotKind::Line),
            style,
            ..Default::default()
        };
        plotter.plot_1d(&curve, &opts)?;
        return Ok(());
    }

    let Some((surface, colorfunc)) = demo.surface() else {
        bail!("{:?} has nothing to plot", demo);
    };

    match colorfunc {
        Some(colorfunc) => {
            if let Some(kind) = args.kind.filter(|&k| k != PlotKind::ColorMappedSurface) {
                bail!("{:?} is always drawn as a color-mapped surface, not {}", args.function, kind);
            }
            let opts = ColoredOptions {
                samples: args.samples,
                xbounds,
                ybounds,
                style,
                ..Default::default()
            };
            plotter.plot_2d_colored(&surface, &colorfunc, &opts)?;
        },
        None => {
            let opts = Plot2dOptions {
                samples: args.samples,
                xbounds,
                ybounds,
                kind: args.kind.unwrap_or(PlotKind::Wireframe),
                style,
                ..Default::default()
            };
            plotter.plot_2d(&surface, &opts)?;
        },
    }

    Ok(())
}
