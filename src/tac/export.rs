//! Plain-text, HTML and ODT renditions of a project, plus a gzipped tar
//! archive bundling several projects' JSON documents.
//!
//! These are string generators with thin file writers on top: no styles
//! engine, no schema validation. The ODT output is a single flat
//! `content.xml` document rather than a zipped package.

use crate::error::{Result, TacError};
use crate::model::Project;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render a project as plain text: name, underline, paragraphs separated by
/// blank lines, quote paragraphs tagged with their 1-based number.
pub fn to_txt(project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&project.name);
    out.push('\n');
    out.push_str(&"=".repeat(project.name.chars().count()));
    out.push_str("\n\n");

    for (i, paragraph) in project.paragraphs().iter().enumerate() {
        if paragraph.kind.is_quote() {
            out.push_str(&format!("[QUOTE {}]\n", i + 1));
        }
        out.push_str(&paragraph.content);
        out.push_str("\n\n");
    }

    out
}

/// Render a project as a standalone HTML page.
pub fn to_html(project: &Project) -> String {
    let mut out = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: 'Times New Roman', serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #fff;
        }}
        .paragraph {{
            margin-bottom: 1.5em;
            text-align: justify;
            text-indent: 2em;
        }}
        .citation {{
            margin: 2em 0;
            padding: 1em;
            border-left: 4px solid #ccc;
            background-color: #f9f9f9;
            font-style: italic;
        }}
        h1 {{
            text-align: center;
            margin-bottom: 2em;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
"#,
        title = escape_xml(&project.name)
    );

    for paragraph in project.paragraphs() {
        let content = escape_xml(&paragraph.content);
        if paragraph.kind.is_quote() {
            out.push_str(&format!("    <div class=\"citation\">{}</div>\n", content));
        } else {
            out.push_str(&format!("    <p class=\"paragraph\">{}</p>\n", content));
        }
    }

    out.push_str("</body>\n</html>");
    out
}

/// Render a project as OpenDocument `content.xml`. Quote paragraphs use the
/// `Citation` style, everything else `Standard`.
pub fn to_odt_content(project: &Project) -> String {
    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">
    <office:body>
        <office:text>
"#,
    );

    for paragraph in project.paragraphs() {
        let content = escape_xml(&paragraph.content);
        let style = if paragraph.kind.is_quote() {
            "Citation"
        } else {
            "Standard"
        };
        out.push_str(&format!(
            "            <text:p text:style-name=\"{}\">{}</text:p>\n",
            style, content
        ));
    }

    out.push_str(
        r#"        </office:text>
    </office:body>
</office:document-content>"#,
    );

    out
}

pub fn write_txt(project: &Project, path: &Path) -> Result<()> {
    fs::write(path, to_txt(project)).map_err(TacError::Io)
}

pub fn write_html(project: &Project, path: &Path) -> Result<()> {
    fs::write(path, to_html(project)).map_err(TacError::Io)
}

pub fn write_odt(project: &Project, path: &Path) -> Result<()> {
    fs::write(path, to_odt_content(project)).map_err(TacError::Io)
}

/// Bundle the projects' JSON documents into a gzipped tar stream, one entry
/// per project under `tac/`.
pub fn write_archive<W: Write>(writer: W, projects: &[Project]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for project in projects {
        let document = serde_json::to_string_pretty(&project.to_document())
            .map_err(TacError::Serialization)?;
        let entry_name = format!(
            "tac/{}-{}.json",
            sanitize_filename(&project.name),
            &project.id.to_string()[..8]
        );

        let mut header = tar::Header::new_gnu();
        header.set_size(document.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, document.as_bytes())
            .map_err(TacError::Io)?;
    }

    tar.finish().map_err(TacError::Io)?;
    Ok(())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParagraphKind;

    fn sample() -> Project {
        let mut project = Project::new("My Essay");
        project.add_paragraph(ParagraphKind::Topic, "Opening claim", None);
        project.add_paragraph(ParagraphKind::ArgumentQuote, "Quoted <source>", None);
        project.add_paragraph(ParagraphKind::Conclusion, "Closing & done", None);
        project
    }

    #[test]
    fn test_txt_layout() {
        let txt = to_txt(&sample());
        assert!(txt.starts_with("My Essay\n========\n\n"));
        assert!(txt.contains("[QUOTE 2]\nQuoted <source>"));
        assert!(txt.contains("Closing & done"));
    }

    #[test]
    fn test_html_escapes_and_classes() {
        let html = to_html(&sample());
        assert!(html.contains("<div class=\"citation\">Quoted &lt;source&gt;</div>"));
        assert!(html.contains("<p class=\"paragraph\">Closing &amp; done</p>"));
        assert!(html.contains("<h1>My Essay</h1>"));
    }

    #[test]
    fn test_odt_styles() {
        let xml = to_odt_content(&sample());
        assert!(xml.contains("<text:p text:style-name=\"Citation\">Quoted &lt;source&gt;</text:p>"));
        assert!(xml.contains("<text:p text:style-name=\"Standard\">Opening claim</text:p>"));
        assert!(xml.starts_with("<?xml version=\"1.0\""));
    }

    #[test]
    fn test_archive_is_gzip() {
        let mut buf = Vec::new();
        write_archive(&mut buf, &[sample()]).unwrap();
        assert!(!buf.is_empty());
        assert_eq!(buf[0], 0x1f);
        assert_eq!(buf[1], 0x8b);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_filename("Hello World"), "Hello World");
        assert_eq!(sanitize_filename("foo/bar"), "foo_bar");
        assert_eq!(sanitize_filename("essay: draft?"), "essay_ draft_");
    }
}
