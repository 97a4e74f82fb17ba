use anyhow::Result;
use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

use crate::config::Preset;
use crate::formatting::FormattingConfig;

/// Write a table of every built-in preset
pub fn write_presets<W: Write>(writer: &mut W, formatting: FormattingConfig) -> Result<()> {
    let mut table = Table::new();
    if formatting.ascii_tables {
        table.load_preset(presets::ASCII_FULL);
    } else {
        table.load_preset(presets::UTF8_FULL);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Description", "Matrix", "Input vector"]);

    for preset in Preset::ALL {
        let matrix = preset
            .matrix()
            .rows()
            .iter()
            .map(|row| crate::core::format_values(row))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            preset.as_str().to_string(),
            preset.description().to_string(),
            matrix,
            preset.input_vector().to_string(),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

pub fn list_presets(formatting: FormattingConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_presets(&mut handle, formatting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_preset() {
        let mut buffer = Vec::new();
        write_presets(&mut buffer, FormattingConfig::plain()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        for preset in Preset::ALL {
            assert!(text.contains(preset.as_str()), "missing {}", preset);
        }
    }
}
