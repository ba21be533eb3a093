use carta::{DocumentKind, EngineConfig, GenerationError, MenuGenerator, RenderRequest};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Menu,
    Tent,
}

impl From<Kind> for DocumentKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Menu => DocumentKind::Menu,
            Kind::Tent => DocumentKind::TableTent,
        }
    }
}

/// Generate a printable menu or table tent from a JSON render request.
#[derive(Debug, Parser)]
#[command(name = "carta", version, about)]
struct Cli {
    /// Path to the render request (JSON).
    request: PathBuf,

    /// Which document to produce.
    #[arg(long, value_enum, default_value = "menu")]
    kind: Kind,

    /// Template id, overriding the one in the request.
    #[arg(long)]
    template: Option<String>,

    /// Engine configuration (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the document is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, GenerationError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = fs::read_to_string(path)?;
    EngineConfig::from_json(&json).map_err(|e| GenerationError::Config(format!("{}: {e}", path.display())))
}

fn main() -> Result<(), GenerationError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let mut request: RenderRequest = serde_json::from_str(&fs::read_to_string(&cli.request)?)?;
    if let Some(template) = cli.template {
        request.options.template = template;
    }

    let generator = MenuGenerator::new(config);
    let document = generator.generate(&request, cli.kind.into())?;

    fs::create_dir_all(&cli.out_dir)?;
    let path = cli.out_dir.join(&document.filename);
    fs::write(&path, &document.bytes)?;
    log::info!(
        "Wrote {} ({} pages, template '{}')",
        path.display(),
        document.page_count,
        document.template
    );
    println!("{}", path.display());
    Ok(())
}
