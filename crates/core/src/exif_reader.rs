use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn extract_capture_date(path: &Path) -> Result<Option<String>> {
    let file = File::open(path)
        .with_context(|| format!("EXIF読み込み対象を開けませんでした: {}", path.display()))?;
    let mut buf = BufReader::new(file);
    let exif = match Reader::new().read_from_container(&mut buf) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("EXIFを解析できませんでした: {}", path.display()))
        }
    };

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    Ok(ascii_value(&field.value))
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(lines) => lines
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|v| !v.is_empty()),
        _ => None,
    }
}
