//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colmask_core::Locale;
use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_csv(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn cli_for(csv_file: &Path, column_name: &str) -> Cli {
    Cli {
        csv_file: csv_file.to_path_buf(),
        column_name: column_name.to_owned(),
        output_file: None,
        locale: Locale::default(),
        seed: Some(7),
    }
}

pub(super) fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("output must open");
    reader
        .records()
        .map(|record| {
            record
                .expect("output must parse")
                .iter()
                .map(str::to_owned)
                .collect()
        })
        .collect()
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
