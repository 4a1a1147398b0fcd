// SPDX-License-Identifier: MIT
//
// tinct: preview a branded color scheme in the terminal.
//
// This is the main binary that wires the two library crates together:
//
//   tinct-color → RGBA values, blending, OKLCH adjustments, parsing
//   tinct-theme → seed resolution, surface branding, region colors
//
// Every invocation is one pass:
//
//   CLI flags → SchemeConfig → `:set` directives → Scheme::generate → stdout
//
// Output is one line per color: a truecolor swatch, the label, and the hex
// value. `--plain` drops the swatches for terminals (or pipes) without
// 24-bit color.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tinct_color::Color;
use tinct_theme::builtin::builtin_names;
use tinct_theme::{BrandingStrength, Brightness, Scheme, SchemeConfig, Seed, ThemeError};

/// Accent used when the configured seed can't anchor a scheme.
const FALLBACK_ACCENT: Color = Color::rgb(0x62, 0x00, 0xee);

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tinct", version, about)]
struct Args {
    /// Accent color (`#rrggbb`, `#rgb`, `rgb(r, g, b)`, `rgba(r, g, b, a)`).
    #[arg(short, long, conflicts_with = "scheme")]
    primary: Option<Color>,

    /// Builtin scheme name (see --list).
    #[arg(short, long)]
    scheme: Option<String>,

    /// Use the dark variant.
    #[arg(short, long)]
    dark: bool,

    /// Surface branding strength: none, light, medium, strong, heavy.
    #[arg(long, default_value = "medium")]
    strength: BrandingStrength,

    /// Pure black page background (dark mode only).
    #[arg(long)]
    true_black: bool,

    /// `:set` directives applied after the flags, e.g. "dark st=heavy".
    #[arg(long, value_name = "DIRECTIVES")]
    set: Option<String>,

    /// List builtin schemes and exit.
    #[arg(long)]
    list: bool,

    /// Print hex values only, without swatches.
    #[arg(long)]
    plain: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> SchemeConfig {
        let mut config = SchemeConfig::new()
            .mode(Brightness::from_dark(self.dark))
            .strength(self.strength)
            .true_black(self.true_black);
        if let Some(name) = &self.scheme {
            config = config.builtin(name.as_str());
        }
        if let Some(primary) = self.primary {
            config = config.primary(primary);
        }
        config
    }
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Log to stderr so stdout stays clean for the scheme itself.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tinct={log_level},tinct_theme={log_level},warn"))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// Write a six-cell swatch of `color` using a 24-bit background SGR.
fn swatch(w: &mut impl Write, color: Color) -> io::Result<()> {
    let Color { r, g, b, .. } = color;
    write!(w, "\x1b[48;2;{r};{g};{b}m      \x1b[0m")
}

fn print_scheme(w: &mut impl Write, scheme: &Scheme, plain: bool) -> io::Result<()> {
    writeln!(
        w,
        "{} ({}, {})",
        scheme.name, scheme.mode, scheme.strength
    )?;
    for (label, color) in scheme.swatches() {
        if plain {
            writeln!(w, "{label:<20} {color}")?;
        } else {
            write!(w, "  ")?;
            swatch(w, color)?;
            writeln!(w, "  {label:<20} {color}")?;
        }
    }
    Ok(())
}

// ─── Entry ──────────────────────────────────────────────────────────────────

fn generate(config: &mut SchemeConfig) -> Result<Scheme> {
    match Scheme::generate(config) {
        Err(ThemeError::InvalidSeed) => {
            warn!(
                fallback = %FALLBACK_ACCENT,
                "seed cannot anchor a scheme, falling back to the default accent"
            );
            *config = config.clone().seed(Seed::Primary(FALLBACK_ACCENT));
            Scheme::generate(config).context("generating fallback scheme")
        }
        other => other.context("generating scheme"),
    }
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for name in builtin_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let mut config = args.config();
    if let Some(directives) = &args.set {
        for line in config
            .apply_set(directives)
            .with_context(|| format!("applying --set {directives:?}"))?
        {
            writeln!(out, "{line}")?;
        }
    }
    debug!(?config, "configuration");

    let scheme = generate(&mut config)?;
    print_scheme(&mut out, &scheme, args.plain)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tinct: {err:#}");
            ExitCode::FAILURE
        }
    }
}
