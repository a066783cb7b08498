//! 输出层：ASCII 网格表格渲染
//! 核心只把 header/rows 交过来，渲染细节与数据无关

/// Render a grid table to stdout. Every row must match the header width.
pub fn render_table(header: &[String], rows: &[Vec<String>]) {
    print!("{}", format_table(header, rows));
}

pub fn format_table(header: &[String], rows: &[Vec<String>]) -> String {
    for row in rows {
        debug_assert_eq!(row.len(), header.len(), "row width must match header");
    }

    let widths = column_widths(header, rows);

    let mut out = String::new();
    out.push_str(&separator(&widths));
    out.push_str(&format_row(
        &header.iter().map(|h| h.to_uppercase()).collect::<Vec<_>>(),
        &widths,
    ));
    out.push_str(&separator(&widths));
    for row in rows {
        out.push_str(&format_row(row, &widths));
    }
    out.push_str(&separator(&widths));
    out
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

fn separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = *w));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_grid_with_uppercased_header() {
        let out = format_table(
            &strings(&["Container", "Engine"]),
            &[strings(&["web", "Podman"])],
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+-----------+--------+");
        assert_eq!(lines[1], "| CONTAINER | ENGINE |");
        assert_eq!(lines[3], "| web       | Podman |");
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[4]);
    }

    #[test]
    fn columns_widen_to_fit_cells() {
        let out = format_table(
            &strings(&["ID"]),
            &[strings(&["0123456789ab"])],
        );
        assert!(out.contains("| 0123456789ab |"));
        assert!(out.contains("| ID           |"));
    }

    #[test]
    fn multiple_rows_share_one_grid() {
        let out = format_table(
            &strings(&["Destination", "Type", "Source"]),
            &[
                strings(&["/proc", "proc", "proc"]),
                strings(&["/etc/hosts", "bind", "../x/etc-hosts"]),
            ],
        );
        // one top, one under header, one bottom
        assert_eq!(out.lines().filter(|l| l.starts_with('+')).count(), 3);
        assert_eq!(out.lines().filter(|l| l.starts_with('|')).count(), 3);
    }
}
