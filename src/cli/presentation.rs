//! CLI presentation: text formatters for commit and hash results.

use crate::digest::FileDigest;
use crate::invention::ProofOfInventionResult;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn digest_table(files: &[FileDigest]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "File", "Size", "Mime Type", "Content Hash"]);
    for (index, file) in files.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            file.filename.clone(),
            file.size.to_string(),
            file.mime_type.clone(),
            file.content_hash.clone(),
        ]);
    }
    table
}

/// Human-readable summary of a commitment.
pub fn format_commit_text(result: &ProofOfInventionResult, color: bool) -> String {
    let root = if color {
        result.root.green().bold().to_string()
    } else {
        result.root.clone()
    };

    let mut out = String::new();
    out.push_str(&format!("Root:      {}\n", root));
    out.push_str(&format!("Format:    {}\n", result.merkle_tree.format));
    out.push_str(&format!("Nodes:     {}\n", result.merkle_tree.tree.len()));
    out.push_str(&format!("Recipient: {}\n\n", result.transaction.recipient));
    out.push_str(&digest_table(&result.files).to_string());
    out
}

/// Human-readable table of file digests.
pub fn format_digests_text(files: &[FileDigest]) -> String {
    digest_table(files).to_string()
}
