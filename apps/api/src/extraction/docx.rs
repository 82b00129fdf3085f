//! DOCX extraction via `docx-rs`.
//!
//! A .docx is a ZIP of XML parts. Only top-level body paragraphs are read:
//! Document → Paragraph → Run → Text. Runs nested in hyperlinks and
//! tracked insertions count as paragraph text. Tables and images are skipped.

use docx_rs::{read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};

/// Appends each paragraph's text followed by a newline, the last one included.
pub fn extract_text(data: &[u8]) -> String {
    let docx = match read_docx(data) {
        Ok(docx) => docx,
        Err(e) => {
            tracing::warn!("Error reading DOCX: {e:?}");
            return String::new();
        }
    };

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            text.push_str(&paragraph_text(para));
            text.push('\n');
        }
    }
    text
}

/// Runs within a paragraph are joined with no separator.
fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_children(&para.children, &mut out);
    out
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for ic in &insert.children {
                    if let InsertChild::Run(run) = ic {
                        push_run(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}
