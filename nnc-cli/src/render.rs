//! Text rendering of a board snapshot

use nnc_core::Symbol;

/// Render rows as a grid with row and column indices
pub fn render(rows: &[Vec<Symbol>]) -> String {
    let size = rows.len();
    let mut out = String::new();

    out.push_str("  ");
    for col in 0..size {
        out.push_str(&format!(" {} ", col));
        if col + 1 < size {
            out.push(' ');
        }
    }
    out.push('\n');

    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|s| format!(" {} ", s)).collect();
        out.push_str(&format!("{} {}\n", r, cells.join("|")));
        if r + 1 < size {
            out.push_str(&format!("  {}\n", vec!["---"; size].join("+")));
        }
    }

    out
}
