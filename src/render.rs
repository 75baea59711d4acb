//! Assembling the artifact text out of history records.

use url::Url;

use crate::history::HistoryRecord;
use crate::sanitize::sanitize;

/// Render the full artifact: a header line, then one line per record with a
/// non-empty title. Records without a title are not an error; Chrome keeps
/// plenty of title-less rows (redirects, downloads) and they are simply not
/// exported. Every line, the last one included, ends in a single newline.
pub fn render_artifact(records: &[HistoryRecord]) -> String {
    let mut out = String::from("Title, Address\n");
    for record in records {
        if record.title.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\"{}\" , \"{}\"\n",
            sanitize(&record.title),
            normalize_address(&record.address)
        ));
    }
    out
}

/// Reduce an address to scheme and authority; path, query and fragment are
/// deliberately discarded so the sheet never accumulates full URLs.
fn normalize_address(address: &Url) -> String {
    format!("{}://{}/", address.scheme(), address.authority())
}
