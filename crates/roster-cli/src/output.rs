use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header. Cells beyond the header count are dropped.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = padded_line(headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&format!("{}\n", rule.join("  ")));
    for row in rows {
        out.push_str(&padded_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn padded_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(c, &w)| format!("{c:w$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["Chess Club".to_string(), "2/12".to_string()],
            vec!["Art".to_string(), "15/15".to_string()],
        ];
        let out = render_table(&["ACTIVITY", "ENROLLED"], &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ACTIVITY    ENROLLED");
        assert_eq!(lines[1], "----------  --------");
        assert_eq!(lines[2], "Chess Club  2/12");
        assert_eq!(lines[3], "Art         15/15");
    }

    #[test]
    fn empty_rows_print_header_only() {
        let out = render_table(&["A"], &[]);
        assert_eq!(out, "A\n-\n");
    }
}
