use similar::{Algorithm, DiffTag, capture_diff_slices};

/// Outcome of the line-based content comparison
#[derive(Debug, Clone)]
pub enum ContentDiffOutcome {
    /// The two documents are byte-identical; no report is generated
    Identical,

    /// The documents differ; the diff carries the full edit script
    Different(ContentDiff),
}

/// Kind of a single side-by-side report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// The line is present on both sides unchanged
    Unchanged,
    /// The line was replaced between the two documents
    Changed,
    /// The line only exists in the second document
    Inserted,
    /// The line only exists in the first document
    Deleted,
}

/// One row of the side-by-side report
#[derive(Debug, Clone)]
pub struct DiffRow {
    pub kind: RowKind,

    /// 1-based line number in the first document, if the row has a left side
    pub left_line: Option<usize>,
    pub left: Option<String>,

    /// 1-based line number in the second document, if the row has a right side
    pub right_line: Option<usize>,
    pub right: Option<String>,
}

/// Line-level diff between two documents, renderable as an HTML report
#[derive(Debug, Clone)]
pub struct ContentDiff {
    rows: Vec<DiffRow>,
}

/// Compares two documents line by line.
///
/// Byte-identical documents short-circuit to [`ContentDiffOutcome::Identical`]
/// without computing an edit script.
pub fn diff_documents(first: &str, second: &str) -> ContentDiffOutcome {
    if first == second {
        return ContentDiffOutcome::Identical;
    }

    let first_lines: Vec<&str> = first.lines().collect();
    let second_lines: Vec<&str> = second.lines().collect();
    let ops = capture_diff_slices(Algorithm::Myers, &first_lines, &second_lines);

    let mut rows = Vec::new();
    for op in &ops {
        let old = op.old_range();
        let new = op.new_range();
        match op.tag() {
            DiffTag::Equal => {
                for (i, j) in old.zip(new) {
                    rows.push(make_row(
                        RowKind::Unchanged,
                        Some(i),
                        &first_lines,
                        Some(j),
                        &second_lines,
                    ));
                }
            }
            DiffTag::Delete => {
                for i in old {
                    rows.push(make_row(RowKind::Deleted, Some(i), &first_lines, None, &second_lines));
                }
            }
            DiffTag::Insert => {
                for j in new {
                    rows.push(make_row(RowKind::Inserted, None, &first_lines, Some(j), &second_lines));
                }
            }
            DiffTag::Replace => {
                // Pair replaced lines positionally; leftovers on the longer
                // side become pure deletions or insertions
                for k in 0..old.len().max(new.len()) {
                    let i = (old.start + k < old.end).then_some(old.start + k);
                    let j = (new.start + k < new.end).then_some(new.start + k);
                    let kind = match (i, j) {
                        (Some(_), Some(_)) => RowKind::Changed,
                        (Some(_), None) => RowKind::Deleted,
                        _ => RowKind::Inserted,
                    };
                    rows.push(make_row(kind, i, &first_lines, j, &second_lines));
                }
            }
        }
    }

    ContentDiffOutcome::Different(ContentDiff { rows })
}

fn make_row(
    kind: RowKind,
    left_idx: Option<usize>,
    first_lines: &[&str],
    right_idx: Option<usize>,
    second_lines: &[&str],
) -> DiffRow {
    DiffRow {
        kind,
        left_line: left_idx.map(|i| i + 1),
        left: left_idx.map(|i| first_lines[i].to_string()),
        right_line: right_idx.map(|j| j + 1),
        right: right_idx.map(|j| second_lines[j].to_string()),
    }
}

const REPORT_STYLE: &str = "\
table { border-collapse: collapse; font-family: monospace; width: 100%; }\n\
th { background-color: #e0e0e0; text-align: left; padding: 2px 6px; }\n\
td { padding: 1px 6px; vertical-align: top; white-space: pre-wrap; }\n\
td.lineno { color: #888; text-align: right; user-select: none; }\n\
td.add { background-color: #aaffaa; }\n\
td.del { background-color: #ffaaaa; }\n\
td.chg { background-color: #ffff77; }\n\
td.empty { background-color: #f0f0f0; }\n";

impl ContentDiff {
    /// Rows of the side-by-side report, in document order
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    /// Number of rows that are not unchanged context
    pub fn changed_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.kind != RowKind::Unchanged)
            .count()
    }

    /// Renders the diff as a standalone side-by-side HTML report with inline
    /// markup highlighting insertions, deletions and changes
    pub fn to_html(&self, first_label: &str, second_label: &str) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Content differences</title>\n<style>\n");
        html.push_str(REPORT_STYLE);
        html.push_str("</style>\n</head>\n<body>\n<table>\n");
        html.push_str(&format!(
            "<tr><th></th><th>{}</th><th></th><th>{}</th></tr>\n",
            escape_html(first_label),
            escape_html(second_label)
        ));

        for row in &self.rows {
            let (left_class, right_class) = match row.kind {
                RowKind::Unchanged => ("", ""),
                RowKind::Changed => (" class=\"chg\"", " class=\"chg\""),
                RowKind::Deleted => (" class=\"del\"", " class=\"empty\""),
                RowKind::Inserted => (" class=\"empty\"", " class=\"add\""),
            };
            html.push_str(&format!(
                "<tr><td class=\"lineno\">{}</td><td{}>{}</td><td class=\"lineno\">{}</td><td{}>{}</td></tr>\n",
                lineno(row.left_line),
                left_class,
                cell(row.left.as_deref()),
                lineno(row.right_line),
                right_class,
                cell(row.right.as_deref()),
            ));
        }

        html.push_str("</table>\n</body>\n</html>\n");
        html
    }
}

fn lineno(line: Option<usize>) -> String {
    line.map(|n| n.to_string()).unwrap_or_default()
}

fn cell(content: Option<&str>) -> String {
    content.map(escape_html).unwrap_or_default()
}

/// Minimal HTML escaping for report cells
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
