//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! XML Spreadsheet 2003 reader (`TheRealLoc.xml`)
//!
//! The locale export is a `Workbook > Worksheet > Table > Row > Cell > Data`
//! document. Only the grid matters here: every row becomes a list of cells
//! addressed by `(row, col)`, and every cell keeps the text of its first child
//! element. Row and cell elements are matched by local name, so both the
//! default-namespace (`<Row>`) and prefixed (`<ss:Row>`) spellings work.

use super::read_source;
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Namespace of the XML Spreadsheet 2003 schema
pub const SPREADSHEET_NS: &str = "urn:schemas-microsoft-com:office:spreadsheet";

/// Column holding the translated text for a label in column 0
pub const VALUE_COLUMN: usize = 1;

/// Position of a cell in the workbook grid (rows across all worksheets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// A `<Cell>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Text of the first child element, `None` if the cell has no children
    pub text: Option<String>,
}

/// A `<Row>`, cells in element order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub rows: Vec<Row>,
}

impl Workbook {
    /// All cells that carry text, in document order
    pub fn text_cells(&self) -> impl Iterator<Item = (CellRef, &str)> {
        self.rows.iter().enumerate().flat_map(|(row, r)| {
            r.cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.text.as_deref().map(|text| (CellRef { row, col }, text))
            })
        })
    }

    /// Text of the cell at `at`
    pub fn text(&self, at: CellRef) -> Option<&str> {
        self.rows.get(at.row)?.cells.get(at.col)?.text.as_deref()
    }

    /// Translated text for a label cell: the value column of the label's row.
    ///
    /// Returns `None` when the row has no value cell (or the value cell has
    /// no data element). An empty data element yields `Some("")`.
    pub fn translation_for(&self, label: CellRef) -> Option<&str> {
        self.text(CellRef {
            row: label.row,
            col: VALUE_COLUMN,
        })
    }
}

/// Read a workbook from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let content = read_source(path.as_ref())?;
    parse_workbook(&content)
}

/// Parse a workbook from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_workbook(content: &str) -> Result<Workbook> {
    let mut reader = Reader::from_str(content);
    // Don't trim text - preserve whitespace in localized strings
    reader.trim_text(false);

    let mut grid = Grid::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => grid.start(&e, false)?,
            Ok(Event::Empty(e)) => grid.start(&e, true)?,
            Ok(Event::End(_)) => grid.end(),
            Ok(Event::Text(e)) => {
                if grid.capturing() {
                    let text = e.unescape().map_err(Error::XmlError)?;
                    grid.push_text(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if grid.capturing() {
                    grid.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    if !grid.namespaced {
        tracing::warn!("Locale workbook does not declare the {} namespace", SPREADSHEET_NS);
    }
    tracing::debug!("Parsed {} locale rows", grid.workbook.rows.len());
    Ok(grid.workbook)
}

/// Element depth bookkeeping while walking the workbook
#[derive(Default)]
struct Grid {
    workbook: Workbook,
    depth: usize,
    row_depth: Option<usize>,
    cell_depth: Option<usize>,
    /// Depth of the data element whose leading text is being collected
    capture_depth: Option<usize>,
    namespaced: bool,
}

impl Grid {
    fn start(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<()> {
        self.depth += 1;
        let depth = self.depth;

        if !self.namespaced {
            self.namespaced = e.attributes().flatten().any(|attr| {
                attr.key.as_ref().starts_with(b"xmlns") && attr.value.as_ref() == SPREADSHEET_NS.as_bytes()
            });
        }

        // Text after a nested element is not the cell's text
        self.capture_depth = None;

        match e.local_name().as_ref() {
            b"Row" if self.row_depth.is_none() => {
                self.workbook.rows.push(Row::default());
                self.row_depth = Some(depth);
            }
            b"Cell" if self.row_depth == Some(depth - 1) => {
                if let Some(row) = self.workbook.rows.last_mut() {
                    row.cells.push(Cell::default());
                }
                self.cell_depth = Some(depth);
            }
            _ if self.cell_depth == Some(depth - 1) => {
                if let Some(cell) = self.current_cell()
                    && cell.text.is_none()
                {
                    cell.text = Some(String::new());
                    self.capture_depth = Some(depth);
                }
            }
            _ => {}
        }

        if empty {
            self.end();
        }
        Ok(())
    }

    fn end(&mut self) {
        let depth = self.depth;
        if self.capture_depth == Some(depth) {
            self.capture_depth = None;
        }
        if self.cell_depth == Some(depth) {
            self.cell_depth = None;
        }
        if self.row_depth == Some(depth) {
            self.row_depth = None;
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn capturing(&self) -> bool {
        self.capture_depth == Some(self.depth)
    }

    fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.current_cell()
            && let Some(buf) = cell.text.as_mut()
        {
            buf.push_str(text);
        }
    }

    fn current_cell(&mut self) -> Option<&mut Cell> {
        self.workbook.rows.last_mut()?.cells.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
          xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
  <Worksheet ss:Name="Sheet1">
    <Table>
      <Row>
        <Cell><Data ss:Type="String">EMechTreeNode_FOO</Data></Cell>
        <Cell><Data ss:Type="String">Range &amp; Reach</Data></Cell>
      </Row>
      <Row>
        <Cell><Data ss:Type="String">Lonely</Data></Cell>
      </Row>
      <Row>
        <Cell><Data ss:Type="String">EMechTreeNode_BAR</Data></Cell>
        <Cell><Data ss:Type="String"/></Cell>
        <Cell/>
      </Row>
    </Table>
  </Worksheet>
</Workbook>"#;

    #[test]
    fn test_grid_coordinates() {
        let workbook = parse_workbook(SAMPLE).unwrap();
        assert_eq!(workbook.rows.len(), 3);
        assert_eq!(workbook.rows[2].cells.len(), 3);

        assert_eq!(workbook.text(CellRef { row: 0, col: 0 }), Some("EMechTreeNode_FOO"));
        assert_eq!(workbook.text(CellRef { row: 0, col: 1 }), Some("Range & Reach"));
        assert_eq!(workbook.text(CellRef { row: 2, col: 2 }), None);
    }

    #[test]
    fn test_translation_lookup() {
        let workbook = parse_workbook(SAMPLE).unwrap();
        let label = CellRef { row: 0, col: 0 };
        assert_eq!(workbook.translation_for(label), Some("Range & Reach"));

        // Row without a value cell
        assert_eq!(workbook.translation_for(CellRef { row: 1, col: 0 }), None);
        // Empty data element
        assert_eq!(workbook.translation_for(CellRef { row: 2, col: 0 }), Some(""));
    }

    #[test]
    fn test_text_cells_in_document_order() {
        let workbook = parse_workbook(SAMPLE).unwrap();
        let labels: Vec<_> = workbook.text_cells().map(|(_, text)| text).collect();
        assert_eq!(
            labels,
            vec!["EMechTreeNode_FOO", "Range & Reach", "Lonely", "EMechTreeNode_BAR", ""]
        );
    }

    #[test]
    fn test_prefixed_elements_match_by_local_name() {
        let xml = r#"<ss:Workbook xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
            <ss:Worksheet><ss:Table>
                <ss:Row>
                    <ss:Cell><ss:Data ss:Type="String">EMechTreeNode_FOO</ss:Data></ss:Cell>
                    <ss:Cell><ss:Data ss:Type="String">Foo</ss:Data></ss:Cell>
                </ss:Row>
            </ss:Table></ss:Worksheet>
        </ss:Workbook>"#;
        let workbook = parse_workbook(xml).unwrap();
        assert_eq!(workbook.rows.len(), 1);
        assert_eq!(workbook.translation_for(CellRef { row: 0, col: 0 }), Some("Foo"));
    }

    #[test]
    fn test_undeclared_namespace_still_read() {
        let xml = "<Workbook><Table><Row><Cell><Data>A</Data></Cell></Row></Table></Workbook>";
        let workbook = parse_workbook(xml).unwrap();
        assert_eq!(workbook.text(CellRef { row: 0, col: 0 }), Some("A"));
    }

    #[test]
    fn test_text_before_nested_element_only() {
        let xml = r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"><Table><Row>
            <Cell><ss:Data xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">Bold<B>er</B> tail</ss:Data></Cell>
        </Row></Table></Workbook>"#;
        let workbook = parse_workbook(xml).unwrap();
        assert_eq!(workbook.text(CellRef { row: 0, col: 0 }), Some("Bold"));
    }
}
