//! Conversion steps shared by the CLI commands.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, info};

use sheet_model::{DestinationTree, SourceDocument};
use sheet_output::{ensure_output_dir, to_xml_string, write_xml_file};
use sheet_transform::transform;

/// Extension required on input files.
pub const INPUT_EXTENSION: &str = "json";

/// Prefix of the generated file name when no explicit name is given.
pub const DEFAULT_OUTPUT_PREFIX: &str = "1reconverted_";

/// A converted character: the node tree and its serialized XML.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub tree: DestinationTree,
    pub xml: String,
}

/// Reject inputs that do not carry a `.json` extension (any case).
pub fn ensure_json_input(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));
    if !is_json {
        bail!("input file must be a .json file: {}", path.display());
    }
    Ok(())
}

/// `<name>.xml` when a name is given, else `1reconverted_<input stem>.xml`.
pub fn output_file_name(input: &Path, output_file: Option<&str>) -> String {
    match output_file {
        Some(name) => format!("{name}.xml"),
        None => {
            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy())
                .unwrap_or_default();
            format!("{DEFAULT_OUTPUT_PREFIX}{stem}.xml")
        }
    }
}

/// Read and decode an actor export.
pub fn read_source(path: &Path) -> Result<SourceDocument> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            bail!("input file not found: {}", path.display())
        }
        Err(error) => return Err(error).with_context(|| format!("open {}", path.display())),
    };
    let source = SourceDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("decode {}", path.display()))?;
    debug!(path = %path.display(), character = source.name(), "read source document");
    Ok(source)
}

/// Transform and serialize one document. Nothing is returned on failure.
pub fn convert_document(source: &SourceDocument) -> Result<Conversion> {
    let tree = transform(source).context("convert character")?;
    let xml = to_xml_string(&tree).context("serialize character xml")?;
    Ok(Conversion { tree, xml })
}

/// Parsed JSON in, XML text out.
pub fn convert_json(value: Value) -> Result<String> {
    let source = SourceDocument::from_value(value).context("convert character")?;
    Ok(convert_document(&source)?.xml)
}

/// Write `xml` as `file_name` inside `output_dir`, creating the directory when
/// missing. Returns the path written.
pub fn write_output(output_dir: &Path, file_name: &str, xml: &str) -> Result<PathBuf> {
    if ensure_output_dir(output_dir)? {
        info!(dir = %output_dir.display(), "created output directory");
    }
    let path = output_dir.join(file_name);
    write_xml_file(&path, xml)?;
    Ok(path)
}
