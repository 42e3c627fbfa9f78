#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = pad(&truncated, *width, numeric);
                if options.color {
                    colorize_status(&padded, &truncated)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color launch and agent statuses; `padded` keeps its alignment.
fn colorize_status(padded: &str, value: &str) -> String {
    let lower = value.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "go" | "go for launch" | "launch successful" | "success" | "active" | "up" => Some("32"),
        "tbd" | "tbc" | "to be determined" | "to be confirmed" | "on hold" | "hold"
        | "in flight" => Some("33"),
        "launch failure" | "failure" | "partial failure" | "deceased" | "down" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => padded.replacen(value, &format!("\u{1b}[{code}m{value}\u{1b}[0m"), 1),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["#", "name", "status"];
        let rows = vec![
            vec!["1".to_string(), "Falcon 9".to_string(), "Go".to_string()],
            vec![
                "12".to_string(),
                "Long March 2D".to_string(),
                "To Be Determined".to_string(),
            ],
        ];

        let table = render_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#   name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with(" 1  Falcon 9"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "name"];
        let rows = vec![vec!["1".to_string(), "a".repeat(60)]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn missing_cells_render_dash() {
        let table = render_table(&["a", "b"], &[vec!["x".to_string()]], PLAIN);
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn status_color_keeps_padding() {
        let colored = colorize_status("Go    ", "Go");
        assert!(colored.starts_with("\u{1b}[32mGo\u{1b}[0m"));
        assert!(colored.ends_with("    "));
    }
}
