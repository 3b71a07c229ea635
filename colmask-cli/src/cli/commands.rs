//! Argument parsing and command execution for the colmask CLI.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;
use colmask_core::{Locale, MaskError, MaskSummary, MaskerBuilder, RandomFakeData};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const MASKED_SUFFIX: &str = "_masked.csv";
const CSV_SUFFIX: &str = ".csv";

/// Command-line options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "colmask",
    about = "Replace the values of one CSV column with fabricated look-alikes."
)]
pub struct Cli {
    /// The CSV file to process.
    pub csv_file: PathBuf,

    /// Header name of the column to mask.
    pub column_name: String,

    /// Output CSV file (default: the input path with `.csv` replaced by `_masked.csv`).
    #[arg(short = 'o', long = "output_file", visible_alias = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Locale used for fabricated phone numbers (e.g. en_US, fr_FR).
    #[arg(short = 'l', long, default_value_t = Locale::default())]
    pub locale: Locale,

    /// Seed the fake-data generator to make output reproducible.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input CSV file does not exist.
    #[error("file `{path}` not found")]
    InputNotFound {
        /// Path supplied by the user.
        path: PathBuf,
    },
    /// Opening or creating a file failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The resolved output path would overwrite the input.
    #[error("output path `{path}` is the input file; pass --output_file to choose another")]
    OutputIsInput {
        /// Path shared by input and output.
        path: PathBuf,
    },
    /// The masking pipeline failed.
    #[error(transparent)]
    Mask(#[from] MaskError),
}

/// Summarises a completed run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Counters reported by the pipeline.
    pub summary: MaskSummary,
}

/// Executes the masking run described by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a file cannot be opened, the output would
/// overwrite the input, or the pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use colmask_cli::cli::{Cli, run_cli};
/// # use colmask_core::Locale;
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("people.csv");
/// std::fs::write(&input, "id,phone\n1,555-123-4567\n")?;
/// let cli = Cli {
///     csv_file: input,
///     column_name: "phone".into(),
///     output_file: None,
///     locale: Locale::default(),
///     seed: Some(1),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.output.ends_with("people_masked.csv"));
/// assert_eq!(summary.summary.rows(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(input = field::Empty, output = field::Empty, column = field::Empty, locale = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli {
        csv_file,
        column_name,
        output_file,
        locale,
        seed,
    } = cli;
    let output = output_file.unwrap_or_else(|| default_output_path(&csv_file));

    let span = Span::current();
    span.record("input", field::display(csv_file.display()));
    span.record("output", field::display(output.display()));
    span.record("column", field::display(&column_name));
    span.record("locale", field::display(locale));

    let masker = MaskerBuilder::new()
        .with_column(column_name)
        .with_locale(locale)
        .build();

    let reader = open_input(&csv_file)?;
    if is_same_file(&csv_file, &output) {
        return Err(CliError::OutputIsInput { path: output });
    }
    let writer = create_output(&output)?;

    let mut fake = seed.map_or_else(RandomFakeData::from_entropy, RandomFakeData::seeded);
    info!(seeded = seed.is_some(), "data masking started");
    let summary = masker.mask(reader, writer, &mut fake)?;

    info!(
        output = %output.display(),
        rows = summary.rows(),
        masked = summary.masked(),
        short_rows = summary.short_rows(),
        failed_rows = summary.failed_rows(),
        "data masking completed"
    );
    Ok(ExecutionSummary {
        input: csv_file,
        output,
        summary,
    })
}

/// Derives the default output path for `input`.
///
/// A trailing `.csv` is replaced by `_masked.csv`; any other path has
/// `_masked.csv` appended.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use colmask_cli::cli::default_output_path;
///
/// assert_eq!(default_output_path(Path::new("data.csv")), PathBuf::from("data_masked.csv"));
/// assert_eq!(default_output_path(Path::new("data.txt")), PathBuf::from("data.txt_masked.csv"));
/// ```
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let raw = input.as_os_str();
    if let Some(stem) = raw.to_str().and_then(|text| text.strip_suffix(CSV_SUFFIX)) {
        return PathBuf::from(format!("{stem}{MASKED_SUFFIX}"));
    }
    let mut owned = OsString::from(raw);
    owned.push(MASKED_SUFFIX);
    PathBuf::from(owned)
}

#[instrument(name = "cli.open_input", err, fields(path = field::Empty))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.create_output", err, fields(path = field::Empty))]
pub(super) fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

pub(super) fn is_same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}
