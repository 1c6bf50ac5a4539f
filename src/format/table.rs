//! Markdown table rendering

/// Render rows of cells as a markdown table
///
/// The first row is the header and is followed by a dash separator row.
/// Cells are padded to the widest cell of their column, counted in chars.
/// Returns an empty string when there are no rows, the header has no
/// cells, or any row has a different number of cells than the header.
///
/// # Example
///
/// ```rust
/// use media_db::format::markdown_table;
///
/// let table = markdown_table(&[vec!["a", "bb"], vec!["ccc", "d"]]);
/// assert_eq!(table, "| a   | bb |\n| --- | -- |\n| ccc | d  |\n");
/// ```
pub fn markdown_table<R, S>(rows: &[R]) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let Some(header) = rows.first() else {
        return String::new();
    };
    let columns = header.as_ref().len();
    if columns == 0 {
        return String::new();
    }
    if rows.iter().any(|row| row.as_ref().len() != columns) {
        return String::new();
    }

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .map(|row| row.as_ref()[col].as_ref().chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut table = String::new();
    for (i, row) in rows.iter().enumerate() {
        table.push('|');
        for (cell, width) in row.as_ref().iter().zip(&widths) {
            let cell = cell.as_ref();
            table.push(' ');
            table.push_str(cell);
            table.push_str(&" ".repeat(width - cell.chars().count()));
            table.push_str(" |");
        }
        table.push('\n');

        if i == 0 {
            table.push('|');
            for width in &widths {
                table.push(' ');
                table.push_str(&"-".repeat(*width));
                table.push_str(" |");
            }
            table.push('\n');
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two() {
        let table = markdown_table(&[vec!["a", "bb"], vec!["ccc", "d"]]);
        insta::assert_snapshot!(table, @r"
        | a   | bb |
        | --- | -- |
        | ccc | d  |
        ");
    }

    #[test]
    fn test_separator_only_after_header() {
        let rows = vec![
            vec!["Title".to_string(), "Year".to_string()],
            vec!["Blue".to_string(), "1971".to_string()],
            vec!["Hejira".to_string(), "1976".to_string()],
        ];
        let table = markdown_table(&rows);
        assert_eq!(table.lines().count(), 4);
        let separators: Vec<&str> = table.lines().filter(|l| l.starts_with("| -")).collect();
        assert_eq!(separators, vec!["| ------ | ---- |"]);
        assert_eq!(table.lines().nth(1), Some("| ------ | ---- |"));
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Vec<&str>> = vec![];
        assert_eq!(markdown_table(&rows), "");
    }

    #[test]
    fn test_zero_columns() {
        let rows: Vec<Vec<&str>> = vec![vec![]];
        assert_eq!(markdown_table(&rows), "");
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(markdown_table(&[vec!["a", "b"], vec!["a"]]), "");
    }

    #[test]
    fn test_width_counts_chars() {
        let table = markdown_table(&[vec!["é"], vec!["ab"]]);
        assert_eq!(table, "| é  |\n| -- |\n| ab |\n");
    }
}
