//! Plain-text rendering of record lists.

use cdshelf_core::Cd;

/// Render the catalog as aligned columns: id, title, artist, year.
pub fn catalog(records: &[Cd]) -> String {
    if records.is_empty() {
        return "no records".to_string();
    }

    // Char counts, not byte lengths: the formatter pads by chars, and
    // multi-byte titles would otherwise misalign the columns.
    let width = |s: &str| s.chars().count();
    let title_width = records.iter().map(|cd| width(&cd.title)).max().unwrap_or(0);
    let artist_width = records.iter().map(|cd| width(&cd.artist)).max().unwrap_or(0);

    let mut out = String::new();
    for cd in records {
        out.push_str(&format!(
            "{:>5}  {:<title_width$}  {:<artist_width$}  {}\n",
            cd.id, cd.title, cd.artist, cd.year
        ));
    }
    out.pop();
    out
}
