//! h2l CLI - HTML fragment to LaTeX converter

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use htmltex::{
    convert_file_into, convert_text_with_fetcher, input_dir, load_options, ConversionError,
    ConversionOptions, ConversionResult, HttpFetcher, ImageFetcher, NoopFetcher,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "h2l")]
#[command(version)]
#[command(about = "htmltex - convert HTML fragments to LaTeX", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input HTML file (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    options: OptionFlags,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML file into a .tex file beside it
    ConvertFile {
        /// Input HTML file
        input: PathBuf,

        /// Write <name>.tex instead of processed-<name>.tex
        #[arg(long = "overwrite", visible_alias = "ow")]
        overwrite: bool,

        /// Explicit output path
        #[arg(long = "output-file-path", visible_alias = "ofp")]
        output_file_path: Option<PathBuf>,

        #[command(flatten)]
        options: OptionFlags,
    },
}

/// Flags shared by the default action and `convert-file`.
#[cfg(feature = "cli")]
#[derive(Args, Debug, Default)]
struct OptionFlags {
    /// Load options from a TOML file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep line breaks as paragraph breaks
    #[arg(long)]
    keep_breaks: bool,

    /// Rewrite \( \) inline math to $ $
    #[arg(long)]
    prefer_dollar_math: bool,

    /// Do not promote equation-only paragraphs to display math
    #[arg(long)]
    skip_equation_wrap: bool,

    /// Emit a complete document with preamble
    #[arg(long)]
    document: bool,

    /// Document class for --document
    #[arg(long)]
    doc_class: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    author: Option<String>,

    /// Add \date{\today}
    #[arg(long)]
    date: bool,

    /// Package for \usepackage (repeatable; disables inference)
    #[arg(long = "package", value_name = "NAME")]
    packages: Vec<String>,

    /// Directory that receives images/
    #[arg(long, value_name = "DIR")]
    images_dir: Option<PathBuf>,

    #[arg(long)]
    image_width: Option<String>,

    #[arg(long)]
    image_height: Option<String>,

    #[arg(long)]
    keep_aspect_ratio: bool,

    #[arg(long)]
    no_center_images: bool,

    /// Keep original image file names instead of generated ones
    #[arg(long)]
    keep_image_names: bool,

    /// Never download remote images
    #[arg(long)]
    offline: bool,

    /// Verbose logging, including swallowed image failures
    #[arg(long)]
    debug: bool,
}

#[cfg(feature = "cli")]
impl OptionFlags {
    /// Start from the config file (or defaults) and apply explicit flags.
    fn resolve(&self) -> ConversionResult<ConversionOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => ConversionOptions::default(),
        };

        if self.keep_breaks {
            options.ignore_breaks = false;
        }
        if self.prefer_dollar_math {
            options.prefer_dollar_inline_math = true;
        }
        if self.skip_equation_wrap {
            options.skip_wrapping_equations = true;
        }
        if self.document {
            options.include_document_wrapper = true;
        }
        if let Some(class) = &self.doc_class {
            options.doc_class = class.clone();
        }
        if self.title.is_some() {
            options.title = self.title.clone();
        }
        if self.author.is_some() {
            options.author = self.author.clone();
        }
        if self.date {
            options.include_date = true;
        }
        if !self.packages.is_empty() {
            options.include_packages = Some(self.packages.clone());
        }
        if self.images_dir.is_some() {
            options.compilation_dir = self.images_dir.clone();
        }
        if self.image_width.is_some() {
            options.image_width = self.image_width.clone();
        }
        if self.image_height.is_some() {
            options.image_height = self.image_height.clone();
        }
        if self.keep_aspect_ratio {
            options.keep_image_aspect_ratio = true;
        }
        if self.no_center_images {
            options.center_images = false;
        }
        if self.keep_image_names {
            options.autogen_image_names = false;
        }
        if self.debug {
            options.debug = true;
        }
        Ok(options)
    }

    fn fetcher(&self) -> Box<dyn ImageFetcher> {
        if self.offline {
            Box::new(NoopFetcher)
        } else {
            Box::new(HttpFetcher::new())
        }
    }
}

#[cfg(feature = "cli")]
impl Cli {
    /// Option flags of whichever command was invoked.
    fn flags(&self) -> &OptionFlags {
        match &self.command {
            Some(Commands::ConvertFile { options, .. }) => options,
            None => &self.options,
        }
    }
}

/// Default filter when `RUST_LOG` is unset; follows the resolved options so a
/// config file can turn on debug output too.
#[cfg(feature = "cli")]
fn default_log_level(options: &ConversionOptions) -> &'static str {
    if options.debug {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(feature = "cli")]
fn init_logging(options: &ConversionOptions) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(options)),
    )
    .format_timestamp(None)
    .init();
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let resolved = cli.flags().resolve();
    let result = resolved.and_then(|options| {
        init_logging(&options);
        run(cli, options)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli, mut options: ConversionOptions) -> ConversionResult<()> {
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd, options);
    }

    let input = match &cli.input_file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| ConversionError::from(e).at_path(path))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if options.compilation_dir.is_none() {
        // Images sit next to the .tex they are referenced from.
        if let Some(out) = &cli.output {
            options.compilation_dir = Some(input_dir(out));
        }
    }

    let fetcher = cli.options.fetcher();
    let result = convert_text_with_fetcher(&input, &options, fetcher.as_ref());

    match cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(&path)
                .map_err(|e| ConversionError::from(e).at_path(&path))?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path.display());
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands, conversion: ConversionOptions) -> ConversionResult<()> {
    match cmd {
        Commands::ConvertFile {
            input,
            overwrite,
            output_file_path,
            options,
        } => {
            let fetcher = options.fetcher();
            let (dir, name) = match output_file_path {
                Some(path) => explicit_output(&path)?,
                None => (input_dir(&input), default_output_name(&input, overwrite)?),
            };
            let written = convert_file_into(&input, &dir, &name, &conversion, fetcher.as_ref())?;
            eprintln!("✓ {}", written.display());
            Ok(())
        }
    }
}

/// `processed-<stem>`, or `<stem>` when overwriting.
#[cfg(feature = "cli")]
fn default_output_name(input: &Path, overwrite: bool) -> ConversionResult<String> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| ConversionError::InvalidInput {
            message: format!("{} has no file name", input.display()),
        })?;
    Ok(if overwrite {
        stem
    } else {
        format!("processed-{}", stem)
    })
}

/// Split an explicit output path into directory and name; `.tex` is optional.
#[cfg(feature = "cli")]
fn explicit_output(path: &Path) -> ConversionResult<(PathBuf, String)> {
    let name = match path.extension().and_then(|ext| ext.to_str()) {
        Some("tex") => path.file_stem(),
        _ => path.file_name(),
    }
    .map(|s| s.to_string_lossy().into_owned())
    .ok_or_else(|| ConversionError::InvalidInput {
        message: format!("{} is not a file path", path.display()),
    })?;
    Ok((input_dir(path), name))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install htmltex --features cli");
    eprintln!("  h2l [OPTIONS] [INPUT_FILE]");
}
