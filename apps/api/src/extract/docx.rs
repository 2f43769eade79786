use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use std::fs;
use std::path::Path;

use super::{Extraction, ExtractionFailure};

/// Extracts plain text from a DOCX document: paragraph and table text,
/// one line per paragraph. Layout, styling, and headers are dropped.
pub fn extract_text(path: &Path) -> Extraction {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return Extraction::Failure(ExtractionFailure::Io(e.to_string())),
    };

    match docx_rs::read_docx(&bytes) {
        Ok(docx) => {
            let mut out = String::new();
            for child in &docx.document.children {
                match child {
                    DocumentChild::Paragraph(p) => collect_paragraph(p, &mut out),
                    DocumentChild::Table(t) => collect_table(t, &mut out),
                    _ => {}
                }
            }
            Extraction::from_text(out)
        }
        Err(e) => Extraction::Failure(ExtractionFailure::Decode(e.to_string())),
    }
}

fn collect_paragraph(paragraph: &Paragraph, out: &mut String) {
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(text) = run_child {
                    out.push_str(&text.text);
                }
            }
        }
    }
    out.push('\n');
}

fn collect_table(table: &Table, out: &mut String) {
    for row in &table.rows {
        match row {
            TableChild::TableRow(row) => {
                for cell in &row.cells {
                    match cell {
                        TableRowChild::TableCell(cell) => {
                            for content in &cell.children {
                                if let TableCellContent::Paragraph(p) = content {
                                    collect_paragraph(p, out);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
