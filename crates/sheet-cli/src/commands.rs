use std::path::absolute;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sheet_cli::pipeline::{
    convert_document, ensure_json_input, output_file_name, read_source, write_output,
};

use crate::cli::ConvertArgs;
use crate::types::ConvertResult;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let input = &args.input;
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    ensure_json_input(input)?;
    let output_dir = absolute(&args.output_dir)
        .with_context(|| format!("resolve {}", args.output_dir.display()))?;
    let file_name = output_file_name(input, args.output_file.as_deref());

    let start = Instant::now();
    let source = read_source(input)?;
    let conversion = convert_document(&source)?;
    info!(
        character = source.name(),
        bytes = conversion.xml.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );

    if args.dry_run {
        info!("dry run, output not written");
        let path = output_dir.join(&file_name);
        return Ok(ConvertResult::new(
            &conversion.tree,
            path,
            conversion.xml.len(),
            false,
        ));
    }

    let path = write_output(&output_dir, &file_name, &conversion.xml)?;
    info!(path = %path.display(), "converted JSON to XML");
    Ok(ConvertResult::new(
        &conversion.tree,
        path,
        conversion.xml.len(),
        true,
    ))
}
