use crate::strategy::{sum, Strategy};
use crate::timing::{POINT_INPUTS, RANGES};

/// The correctness line printed ahead of any timing: the iterative sum of
/// `0..=12345` next to the closed-form value, for eyeball comparison. The
/// line ends with a space before the newline; callers and tests rely on
/// that exact shape.
pub fn sanity_line() -> String {
    format!("{}, {} ", sum(12345), 12345 * 12346 / 2)
}

pub fn point_line(n: i64, nanos: f64) -> String {
    format!("n = {n}: {nanos:.3} ns")
}

pub fn range_line(start: i64, end: i64, nanos: f64) -> String {
    format!("range {start} to {end}: {nanos:.3} ns")
}

/// Timings for one strategy across the fixed point inputs and ranges, in
/// the order of [`POINT_INPUTS`] and [`RANGES`].
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    pub point_nanos: Vec<f64>,
    pub range_nanos: Vec<f64>,
}

/// Render comparison rows as a column-aligned markdown table: a `Function`
/// column of backticked strategy names, then one column per point input and
/// per range. Ends with a newline.
pub fn markdown_table(rows: &[ComparisonRow]) -> String {
    let mut headers = vec!["Function".to_string()];
    headers.extend(POINT_INPUTS.iter().map(|n| n.to_string()));
    headers.extend(RANGES.iter().map(|(start, end)| format!("range({start}, {end})")));

    let mut body = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = vec![format!("`{}`", row.strategy.name())];
        cells.extend(row.point_nanos.iter().map(|nanos| format!("{nanos:.3} ns")));
        cells.extend(row.range_nanos.iter().map(|nanos| format!("{nanos:.3} ns")));
        body.push(cells);
    }

    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for cells in &body {
        for (idx, cell) in cells.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.len());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &headers, &widths);
    push_separator(&mut output, &widths);
    for cells in &body {
        push_row(&mut output, cells, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String], widths: &[usize]) {
    output.push('|');
    for (idx, cell) in cells.iter().enumerate() {
        let width = widths[idx];
        if idx == 0 {
            output.push_str(&format!(" {cell:<width$} |"));
        } else {
            output.push_str(&format!(" {cell:>width$} |"));
        }
    }
    output.push('\n');
}

fn push_separator(output: &mut String, widths: &[usize]) {
    output.push('|');
    for (idx, width) in widths.iter().enumerate() {
        let dashes = "-".repeat(width.saturating_sub(1));
        if idx == 0 {
            output.push_str(&format!(" :{dashes} |"));
        } else {
            output.push_str(&format!(" {dashes}: |"));
        }
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::{markdown_table, point_line, range_line, sanity_line, ComparisonRow, Strategy};

    #[test]
    fn sanity_line_carries_the_trailing_space() {
        assert_eq!(sanity_line(), "76205685, 76205685 ");
    }

    #[test]
    fn timing_lines_use_three_decimal_places() {
        assert_eq!(point_line(14, 0.1234), "n = 14: 0.123 ns");
        assert_eq!(point_line(-15, 2.0), "n = -15: 2.000 ns");
        assert_eq!(range_line(-3, 3, 10.5), "range -3 to 3: 10.500 ns");
        assert_eq!(range_line(-20, 20, 0.0), "range -20 to 20: 0.000 ns");
    }

    #[test]
    fn markdown_table_is_aligned_and_complete() {
        let rows = vec![
            ComparisonRow {
                strategy: Strategy::Loop,
                point_nanos: vec![1.0, 2.0, 3.0, 4.0],
                range_nanos: vec![5.0, 6.0, 7.0],
            },
            ComparisonRow {
                strategy: Strategy::ClosedForm,
                point_nanos: vec![0.5; 4],
                range_nanos: vec![0.25; 3],
            },
        ];

        let table = markdown_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4, "header, separator, and one line per row");
        assert!(lines[0].starts_with("| Function"));
        assert!(lines[0].contains("range(-3, 3)"));
        assert!(lines[1].contains(":-"));
        assert!(lines[2].contains("`loop`"));
        assert!(lines[2].contains("1.000 ns"));
        assert!(lines[3].contains("`closed-form`"));

        let width = lines[0].len();
        assert!(
            lines.iter().all(|line| line.len() == width),
            "all rows should share one width:\n{table}"
        );
    }
}
