use super::WordEntry;
use crate::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parsed dictionary lines plus bookkeeping from the scan.
#[derive(Debug, Default)]
pub struct ParsedSource {
    pub entries: Vec<WordEntry>,
    pub lines_read: usize,
    pub skipped: usize,
}

/// Opens `path` and parses it. Any failure to open the source is reported as
/// `LoadError::NotFound`.
pub fn parse_file<P: AsRef<Path>>(path: P, separator: u8) -> Result<ParsedSource, LoadError> {
    let path = path.as_ref();
    debug!("   Loading Dictionary from: {:?}", path);

    let file = File::open(path).map_err(|e| {
        warn!("❌ Could not open dictionary at {:?}: {}", path, e);
        LoadError::NotFound(path.to_path_buf())
    })?;

    parse_reader(file, separator)
}

/// Parses `word<sep>frequency` lines. Malformed lines are skipped; an I/O
/// failure part-way through aborts with `LoadError::ParseFailure`.
pub fn parse_reader<R: Read>(reader: R, separator: u8) -> Result<ParsedSource, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut parsed = ParsedSource::default();

    for result in rdr.records() {
        parsed.lines_read += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) if e.is_io_error() => {
                return Err(LoadError::ParseFailure(e.to_string()));
            }
            Err(e) => {
                debug!("   ⚠️  [Line {}] Parse Error: {}", parsed.lines_read, e);
                parsed.skipped += 1;
                continue;
            }
        };

        // Space-separated sources yield empty fields between repeated separators.
        let mut fields = rec.iter().filter(|f| !f.is_empty());
        let (Some(word), Some(freq_raw)) = (fields.next(), fields.next()) else {
            parsed.skipped += 1;
            continue;
        };

        let Ok(frequency) = freq_raw.parse::<f64>() else {
            parsed.skipped += 1;
            continue;
        };

        match WordEntry::new(word, frequency) {
            Ok(entry) => parsed.entries.push(entry),
            Err(_) => parsed.skipped += 1,
        }
    }

    if parsed.skipped > 0 {
        info!(
            "   ⚠️  Skipped {} malformed dictionary lines.",
            parsed.skipped
        );
    }
    debug!(
        "   -> Scanned {} lines. Kept {} entries.",
        parsed.lines_read,
        parsed.entries.len()
    );

    Ok(parsed)
}
