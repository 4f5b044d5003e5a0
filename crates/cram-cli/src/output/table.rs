#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned text table with a header row and dashed divider.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = column_widths(headers, rows);
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let text = clip(header, *width);
            pad(&text, &text, *width, false)
        })
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                let plain = clip(&value, *width);
                let right_align = looks_numeric(&plain);
                let rendered = if options.color {
                    colorize(&plain)
                } else {
                    plain.clone()
                };
                pad(&rendered, &plain, *width, right_align)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect()
}

/// Shave the widest shrinkable column until the table fits, keeping each
/// column at least as wide as its header.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else { return };
    if widths.is_empty() {
        return;
    }
    let separators = widths.len().saturating_sub(1) * 2;

    loop {
        let total = widths.iter().sum::<usize>() + separators;
        if total <= max_width {
            return;
        }

        let mut widest: Option<usize> = None;
        for (index, width) in widths.iter().enumerate() {
            let floor = headers[index].len().max(6);
            if *width > floor && widest.is_none_or(|current| *width > widths[current]) {
                widest = Some(index);
            }
        }
        let Some(index) = widest else { return };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
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

/// Pad by the plain (uncolored) length so ANSI escapes do not skew alignment.
fn pad(rendered: &str, plain: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(plain.chars().count()));
    if right_align {
        format!("{fill}{rendered}")
    } else {
        format!("{rendered}{fill}")
    }
}

fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "true" | "success" | "authenticated" | "correct" => Some("32"),
        "uploading" | "taking" | "pending" => Some("33"),
        "false" | "error" | "failed" | "incorrect" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}
