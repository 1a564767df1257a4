// Text layout helpers
//
// Width-aware padding and truncation for fixed-column text, plus the
// packing items table laid out on top of them.

use crate::trips::display::{PackingRow, PACKING_COLUMNS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SEPARATOR: &str = " │ ";

/// Truncate to at most `width` display columns, marking cuts with `…`
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad to exactly `width` display columns
pub fn fit(s: &str, width: usize) -> String {
    let mut out = truncate(s, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Rendered packing table
#[derive(Debug, Clone, PartialEq)]
pub struct TableText {
    pub header: String,
    pub separator: String,
    /// Body lines; a row with several buying options spans several lines
    pub body: Vec<String>,
}

/// Lay out packing rows under [`PACKING_COLUMNS`]
///
/// Columns grow to their widest cell; nothing is cut. Wide tables are
/// panned horizontally by the detail panel.
pub fn packing_table(rows: &[PackingRow]) -> TableText {
    let cells: Vec<([String; 5], Vec<String>)> = rows
        .iter()
        .map(|row| {
            let [name, weight, quantity, description, category, _] = row.cells();
            ([name, weight, quantity, description, category], row.shop_lines())
        })
        .collect();

    let mut widths: Vec<usize> = PACKING_COLUMNS.iter().map(|h| h.width()).collect();
    for (fixed, shops) in &cells {
        for (i, cell) in fixed.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
        for shop in shops {
            widths[5] = widths[5].max(shop.width());
        }
    }

    let join = |columns: Vec<String>| columns.join(COLUMN_SEPARATOR).trim_end().to_string();

    let header = join(
        PACKING_COLUMNS
            .iter()
            .zip(&widths)
            .map(|(h, w)| fit(h, *w))
            .collect(),
    );
    let separator = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");

    let mut body = Vec::new();
    for (fixed, shops) in &cells {
        for (line_no, shop) in shops.iter().enumerate() {
            let mut columns: Vec<String> = fixed
                .iter()
                .zip(&widths)
                .map(|(cell, w)| if line_no == 0 { fit(cell, *w) } else { fit("", *w) })
                .collect();
            columns.push(fit(shop, widths[5]));
            body.push(join(columns));
        }
    }

    TableText {
        header,
        separator,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, shops: Vec<&str>) -> PackingRow {
        PackingRow {
            name: name.to_string(),
            weight: "200".to_string(),
            quantity: "1".to_string(),
            description: "desc".to_string(),
            category: "BEACH".to_string(),
            shops: shops.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_truncate_and_fit() {
        assert_eq!(truncate("Sunscreen", 20), "Sunscreen");
        assert_eq!(truncate("Sunscreen", 4), "Sun…");
        assert_eq!(truncate("Sunscreen", 0), "");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("日本語", 5).width(), 5);
    }

    #[test]
    fn test_table_header_lists_columns() {
        let table = packing_table(&[row("Towel", vec![])]);
        for column in PACKING_COLUMNS {
            assert!(table.header.contains(column), "{}", column);
        }
        assert_eq!(
            table.separator.chars().filter(|c| *c == '┼').count(),
            PACKING_COLUMNS.len() - 1
        );
    }

    #[test]
    fn test_row_without_shops_shows_placeholder() {
        let table = packing_table(&[row("Towel", vec![])]);
        assert_eq!(table.body.len(), 1);
        assert!(table.body[0].starts_with("Towel"));
        assert!(table.body[0].ends_with("No buying options"));
    }

    #[test]
    fn test_each_shop_gets_a_line() {
        let table = packing_table(&[row("Sunscreen", vec!["A - 10 DKK", "B - 12 DKK"])]);
        assert_eq!(table.body.len(), 2);
        assert!(table.body[0].starts_with("Sunscreen"));
        assert!(table.body[0].ends_with("A - 10 DKK"));
        assert!(table.body[1].trim_start().starts_with("│"));
        assert!(table.body[1].ends_with("B - 12 DKK"));
    }

    #[test]
    fn test_long_cells_are_kept_whole() {
        let description = "Reef-safe mineral sunscreen, SPF 50, water resistant for 80 minutes";
        let shop = "Copenhagen Outdoor Supplies Flagship Store - 129.95 DKK";
        let mut long = row("Sunscreen", vec![shop]);
        long.description = description.to_string();

        let table = packing_table(&[long, row("Towel", vec![])]);
        assert!(table.body[0].contains(description));
        assert!(table.body[0].ends_with(shop));
        assert!(table.header.width() <= table.separator.width());
        assert_eq!(table.body[0].width(), table.separator.width());
    }
}
