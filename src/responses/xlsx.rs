// responses/xlsx.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Spreadsheet bytes as a `data:` URI, so the page that previews a table can
/// offer that same table for download.
pub fn xlsx_data_uri(buffer: &[u8]) -> String {
    format!("data:{XLSX_MIME};base64,{}", STANDARD.encode(buffer))
}
