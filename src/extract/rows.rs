// src/extract/rows.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extract::columns::ColumnMap;

static TH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table th").expect("table th selector should parse"));
static TR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tr").expect("table tr selector should parse"));
static TD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("td selector should parse"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("anchor selector should parse"));

/// One raw data row from the results table, before filtering and URL
/// resolution. `href` is as found in the document, possibly relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub class_name: String,
    pub section: String,
    pub instructor: String,
    pub href: String,
}

/// Parse the syllabus results table into raw rows, in document order.
///
/// The site emits bare `<tr>` elements with no `<thead>`/`<tbody>` wrappers
/// and sprinkles empty separator rows between data rows, so this walks every
/// `table tr` and filters rather than trusting the structure:
///   - rows without more `<td>` cells than the highest resolved column index
///     are dropped (covers the `<th>` header row and the separators);
///   - rows whose class cell is empty are dropped.
pub fn parse_results_table(doc: &Html) -> Vec<TableRow> {
    let headers: Vec<String> = doc.select(&TH_SELECTOR).map(|th| cell_text(&th)).collect();
    let cols = ColumnMap::resolve(&headers);

    let mut rows = Vec::new();
    for tr in doc.select(&TR_SELECTOR) {
        let cells: Vec<ElementRef> = tr.select(&TD_SELECTOR).collect();
        if cells.len() <= cols.max_index() {
            continue;
        }

        let class_name = cell_text(&cells[cols.class]);
        if class_name.is_empty() {
            continue;
        }

        let href = cells[cols.syllabus]
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .next()
            .unwrap_or("")
            .trim()
            .to_string();

        rows.push(TableRow {
            class_name,
            section: cell_text(&cells[cols.section]),
            instructor: cell_text(&cells[cols.instructor]),
            href,
        });
    }
    rows
}

/// First text node of a cell, trimmed. Matches reading the leading text of a
/// cell that may also contain markup.
fn cell_text(cell: &ElementRef) -> String {
    cell.text().next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Vec<TableRow> {
        parse_results_table(&Html::parse_document(html))
    }

    const RESULTS_PAGE: &str = r#"
        <html><body><table>
          <tr><th>Term</th><th>Class</th><th>Section</th><th>Instructor</th><th>Syllabi</th></tr>
          <tr>
            <td>Fall 2025</td><td>CSE 3666</td><td>001</td><td>Zhijie Shi</td>
            <td><a href="download.php?file=10|abc">PDF</a></td>
          </tr>
          <tr><td></td><td></td><td></td><td></td><td></td></tr>
          <tr>
            <td>Fall 2025</td><td>MATH 1131Q</td><td>002L</td><td>Jane Doe</td>
            <td><a href="download.php?file=11|def">PDF</a></td>
          </tr>
        </table></body></html>
    "#;

    #[test]
    fn parses_data_rows_in_document_order() {
        let rows = parse(RESULTS_PAGE);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            TableRow {
                class_name: "CSE 3666".into(),
                section: "001".into(),
                instructor: "Zhijie Shi".into(),
                href: "download.php?file=10|abc".into(),
            }
        );
        assert_eq!(rows[1].class_name, "MATH 1131Q");
    }

    #[test]
    fn skips_rows_with_too_few_cells() {
        let rows = parse(
            r#"<table>
                 <tr><th>Term</th><th>Class</th><th>Section</th><th>Instructor</th><th>Syllabi</th></tr>
                 <tr><td>short</td><td>CSE 1010</td></tr>
                 <tr></tr>
               </table>"#,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn skips_rows_with_empty_class_cell() {
        let rows = parse(
            r#"<table>
                 <tr><td>Fall</td><td>  </td><td>001</td><td>Someone</td><td><a href="x">PDF</a></td></tr>
               </table>"#,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_link_yields_empty_href() {
        let rows = parse(
            r#"<table>
                 <tr><td>Fall</td><td>HIST 1501</td><td>003</td><td>Someone</td><td>none</td></tr>
               </table>"#,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].href, "");
    }

    #[test]
    fn headerless_table_uses_positional_defaults() {
        let rows = parse(
            r#"<table>
                 <tr><td>Fall</td><td>CSE 3666</td><td>001</td><td>Zhijie Shi</td>
                     <td><a href="d.php?file=1|x">PDF</a></td></tr>
               </table>"#,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class_name, "CSE 3666");
        assert_eq!(rows[0].href, "d.php?file=1|x");
    }

    #[test]
    fn follows_reordered_headers() {
        let rows = parse(
            r#"<table>
                 <tr><th>Term</th><th>Instructor</th><th>Class</th><th>Section</th><th>Syllabi</th></tr>
                 <tr><td>Fall</td><td>Zhijie Shi</td><td>CSE 3666</td><td>001</td>
                     <td><a href="d.php?file=1|x">PDF</a></td></tr>
               </table>"#,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class_name, "CSE 3666");
        assert_eq!(rows[0].instructor, "Zhijie Shi");
        assert_eq!(rows[0].section, "001");
    }
}
