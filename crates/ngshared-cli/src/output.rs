//! Human-readable vector tables.

use indexmap::IndexMap;
use ngshared::{Complex64, VectorData, format_value};

const COLUMN_WIDTH: usize = 14;

pub fn print_table(plot: &str, vectors: &IndexMap<String, VectorData>) {
    let title = format!("Plot {} ({} vectors)", plot, vectors.len());
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();
    print!("{}", render_table(vectors));
}

/// Render vectors as columns, one row per sample.
///
/// Complex samples take two columns. Shorter vectors leave their cells blank.
pub fn render_table(vectors: &IndexMap<String, VectorData>) -> String {
    let mut header = String::new();
    for (name, data) in vectors {
        match data {
            VectorData::Real(_) => header.push_str(&cell(name)),
            VectorData::Complex(_) => {
                header.push_str(&cell(&format!("re {}", name)));
                header.push_str(&cell(&format!("im {}", name)));
            }
        }
    }

    let mut out = format!("{}\n{}\n", header, "-".repeat(header.len()));
    let rows = vectors.values().map(VectorData::len).max().unwrap_or(0);
    for row in 0..rows {
        let mut line = String::new();
        for data in vectors.values() {
            match data {
                VectorData::Real(values) => {
                    line.push_str(&cell(&values.get(row).map(|v| format_value(*v)).unwrap_or_default()))
                }
                VectorData::Complex(values) => {
                    let (re, im) = split(values.get(row));
                    line.push_str(&cell(&re));
                    line.push_str(&cell(&im));
                }
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!("\n{} points.\n", rows));
    out
}

fn split(value: Option<&Complex64>) -> (String, String) {
    value
        .map(|c| (format_value(c.re), format_value(c.im)))
        .unwrap_or_default()
}

fn cell(text: &str) -> String {
    format!("{:>width$}", text, width = COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_real_and_complex() {
        let mut vectors = IndexMap::new();
        vectors.insert("v-sweep".to_string(), VectorData::Real(vec![0.0, 0.5]));
        vectors.insert(
            "V(2)".to_string(),
            VectorData::Complex(vec![Complex64::new(1.0, -0.001)]),
        );

        let table = render_table(&vectors);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0].len(), 3 * COLUMN_WIDTH);
        assert!(lines[0].ends_with("im V(2)"));
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["0.0000", "1.0000", "-1.0000m"]);
        assert_eq!(lines[3].trim(), "500.0000m");
        assert!(table.ends_with("2 points.\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&IndexMap::new()), "\n\n\n0 points.\n");
    }
}
