//! ASCII rendering of a [`LanguageReport`].
//!
//! ```text
//! +HeadHunter Moscow-----------+---------------------+----------------+
//! | Language | Vacancies found | Vacancies processed | Average salary |
//! +----------+-----------------+---------------------+----------------+
//! | Python   | 500             | 1                   | 108000         |
//! +----------+-----------------+---------------------+----------------+
//! ```

use crate::aggregate::LanguageReport;

pub const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render `report` sorted by `processed`, highest first. Ties keep report order.
pub fn render_table(title: &str, report: &LanguageReport) -> String {
    let mut rows: Vec<_> = report.iter().collect();
    rows.sort_by(|a, b| b.1.processed.cmp(&a.1.processed));

    let mut cells: Vec<[String; 4]> = vec![HEADER.map(String::from)];
    cells.extend(rows.into_iter().map(|(language, stats)| {
        [
            language.clone(),
            stats.found.to_string(),
            stats.processed.to_string(),
            stats.average.to_string(),
        ]
    }));

    let mut widths = [0usize; 4];
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();
    out.push_str(&titled_border(&border, title));
    out.push('\n');
    for (i, row) in cells.iter().enumerate() {
        out.push('|');
        for (width, cell) in widths.iter().zip(row) {
            let pad = width - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 1));
            out.push('|');
        }
        out.push('\n');
        if i == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);
    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overwrite the start of the top border with the title, if it fits.
fn titled_border(border: &str, title: &str) -> String {
    let border: Vec<char> = border.chars().collect();
    let title: Vec<char> = title.chars().collect();
    if title.is_empty() || title.len() + 2 > border.len() {
        return border.into_iter().collect();
    }

    let mut line = String::from("+");
    line.extend(title.iter());
    line.extend(border[title.len() + 1..].iter());
    line
}
