use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::de::DeserializeOwned;

/// How a command renders its result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `value` in the requested format, followed by a newline.
    pub fn write_report<T>(&mut self, format: OutputFormat, value: &T) -> anyhow::Result<()>
    where
        T: fmt::Display + serde::Serialize,
    {
        match format {
            OutputFormat::Text => writeln!(&mut *self, "{value}")
                .with_context(|| format!("Failed to write report to {}", self.display_path()))?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *self, value)
                    .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
                writeln!(&mut *self).with_context(|| {
                    format!(
                        "Failed to write newline after JSON to {}",
                        self.display_path()
                    )
                })?;
            }
        }
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Deserializes every row of a headed CSV table.
///
/// Cells are trimmed and extra columns are ignored. A row that fails to parse
/// aborts the read with an error naming `source` and the row's line number.
pub fn read_csv_rows<T, R>(reader: R, source: &str) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = vec![];
    for result in reader.deserialize() {
        let row = result.with_context(|| format!("Failed to parse row in {source}"))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Opens `path` and reads its CSV rows, see [`read_csv_rows`].
pub fn read_csv_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    read_csv_rows(io::BufReader::new(file), &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        name: String,
        value: Option<u32>,
    }

    #[test]
    fn test_read_rows_trims_and_ignores_extra_columns() {
        let csv = "name, value, extra\n Alice , 3 ,x\nBob,,y\n";
        let rows: Vec<Row> = read_csv_rows(csv.as_bytes(), "test").unwrap();
        assert_eq!(
            rows,
            vec![
                Row {
                    name: "Alice".to_owned(),
                    value: Some(3)
                },
                Row {
                    name: "Bob".to_owned(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn test_malformed_number_names_source_and_line() {
        let csv = "name,value\nAlice,3\nBob,many\n";
        let err = read_csv_rows::<Row, _>(csv.as_bytes(), "people.csv").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("people.csv"), "{message}");
        assert!(message.contains("line: 3"), "{message}");
    }
}
