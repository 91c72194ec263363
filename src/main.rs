use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use vitae::{OutputFormat, PipelineBuilder, PipelineError, ResumePipeline, ResumeRecord};

/// Assemble JSON resumes into layout blocks and render them.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Resume JSON files to process.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file, or a directory when several inputs are given. Use `-` for stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendering backend: `json` or `text`.
    #[arg(long, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Theme JSON file with style and page overrides.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Directory holding the regular and bold typeface files.
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Enables debug logging.
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "vitae=debug" } else { "vitae=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn read_record(path: &Path) -> Result<ResumeRecord, PipelineError> {
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })?;
    Ok(ResumeRecord::from_json_str(&source)?)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// `<stem>.<ext>` inside `dir`, or beside the input when `dir` is `None`.
///
/// Falls back to `<stem>.vitae.<ext>` when that would be the input itself.
fn derived_path(input: &Path, dir: Option<&Path>, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let dir = dir.or_else(|| input.parent());
    let place = |suffix: &str| {
        let mut name = stem.to_os_string();
        name.push(suffix);
        match dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    };

    let path = place(&format!(".{}", extension));
    if same_file(&path, input) {
        place(&format!(".vitae.{}", extension))
    } else {
        path
    }
}

/// Resolves where each input's output goes. `None` means stdout.
fn output_paths(cli: &Cli, extension: &str) -> Result<Vec<Option<PathBuf>>, PipelineError> {
    let single = cli.inputs.len() == 1;
    match &cli.output {
        Some(out) if out.as_os_str() == "-" => {
            if single {
                Ok(vec![None])
            } else {
                Err(PipelineError::Config(
                    "Only a single input can be written to stdout".to_string(),
                ))
            }
        }
        Some(out) if single && !out.is_dir() => {
            if same_file(out, &cli.inputs[0]) {
                return Err(PipelineError::Config(format!(
                    "Refusing to overwrite input '{}' with the rendered output",
                    out.display()
                )));
            }
            Ok(vec![Some(out.clone())])
        }
        Some(dir) => {
            if dir.exists() && !dir.is_dir() {
                return Err(PipelineError::Config(format!(
                    "'{}' is not a directory; several inputs need an output directory",
                    dir.display()
                )));
            }
            fs::create_dir_all(dir)?;
            Ok(cli
                .inputs
                .iter()
                .map(|input| Some(derived_path(input, Some(dir), extension)))
                .collect())
        }
        None => Ok(cli
            .inputs
            .iter()
            .map(|input| Some(derived_path(input, None, extension)))
            .collect()),
    }
}

fn build_pipeline(cli: &Cli) -> Result<ResumePipeline, PipelineError> {
    let mut builder = PipelineBuilder::new().with_output_format(cli.format);
    if let Some(theme) = &cli.theme {
        builder = builder.with_theme_file(theme)?;
    }
    if let Some(dir) = &cli.font_dir {
        builder = builder.with_font_dir(dir);
    }
    builder.build()
}

fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let pipeline = build_pipeline(&cli)?;
    let outputs = output_paths(&cli, pipeline.extension())?;

    let records = cli
        .inputs
        .iter()
        .map(|path| {
            log::info!("Loading resume from {}", path.display());
            read_record(path)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let assembled = pipeline.assemble_batch(&records);

    for (blocks, output) in assembled.iter().zip(outputs) {
        match output {
            Some(path) => {
                let file = fs::File::create(&path)?;
                let mut writer = pipeline.render(blocks, io::BufWriter::new(file))?;
                writer.flush()?;
                log::info!("Wrote {}", path.display());
            }
            None => {
                let lock = pipeline.render(blocks, io::stdout().lock())?;
                drop(lock);
            }
        }
    }

    Ok(())
}
