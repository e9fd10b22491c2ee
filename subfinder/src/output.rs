use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{models::ProbeResult, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Text,
        }
    }
}

/// `.json` gets the full records, anything else one host per line.
pub fn save(results: &[ProbeResult], path: &Path) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);

    match Format::from_path(path) {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, results)?;
            writeln!(writer)?;
        }
        Format::Text => {
            for result in results {
                writeln!(writer, "{}", result.host)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
