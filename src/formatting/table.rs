// src/formatting/table.rs
//! HTML table assembly from already-rendered cell text.

/// Builds `<table>` markup. The first row is the header row (`<th>`),
/// every later row uses `<td>`.
///
/// Cells are inserted verbatim; callers escape them first. An empty row
/// list yields an empty string.
pub fn assemble_table(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut html = String::from("<table>");
    for (index, row) in rows.iter().enumerate() {
        let tag = if index == 0 { "th" } else { "td" };
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<{tag}>{cell}</{tag}>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn first_row_is_the_header() {
        let html = assemble_table(&[row(&["a", "b"]), row(&["c", "d"])]);
        assert_eq!(
            html,
            "<table><tr><th>a</th><th>b</th></tr><tr><td>c</td><td>d</td></tr></table>"
        );
    }

    #[test]
    fn no_rows_renders_nothing() {
        assert_eq!(assemble_table(&[]), "");
    }
}
