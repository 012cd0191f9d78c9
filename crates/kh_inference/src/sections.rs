use kh_core::Section;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

const BULLET_MARKERS: [&str; 3] = ["- ", "\u{2022} ", "* "];

#[derive(PartialEq)]
enum Kind {
    Paragraph,
    Bullet,
    Numbered,
}

fn flush(sections: &mut Vec<Section>, kind: &Kind, buf: &mut Vec<String>) {
    if buf.is_empty() {
        return;
    }
    let content = std::mem::take(buf);
    sections.push(match kind {
        Kind::Paragraph => Section::Paragraph { lines: content },
        Kind::Bullet => Section::BulletList { items: content },
        Kind::Numbered => Section::NumberedList { items: content },
    });
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS.iter().find_map(|m| line.strip_prefix(m))
}

/// Parse a loosely markdown-formatted model reply into typed sections.
///
/// Total over any input: malformed text lands in paragraphs, empty or
/// blank-only input yields no sections. A blank line or a change of section
/// type closes the open node; headers are emitted immediately, one per line.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut kind = Kind::Paragraph;
    let mut buf: Vec<String> = Vec::new();

    for line in text.lines() {
        let stripped = line.trim();

        if stripped.is_empty() {
            flush(&mut sections, &kind, &mut buf);
            kind = Kind::Paragraph;
            continue;
        }

        if let Some(text) = stripped.strip_prefix("### ") {
            flush(&mut sections, &kind, &mut buf);
            sections.push(Section::Header {
                level: 3,
                text: text.to_string(),
            });
            kind = Kind::Paragraph;
            continue;
        }
        if let Some(text) = stripped.strip_prefix("## ") {
            flush(&mut sections, &kind, &mut buf);
            sections.push(Section::Header {
                level: 2,
                text: text.to_string(),
            });
            kind = Kind::Paragraph;
            continue;
        }

        if let Some(item) = strip_bullet(stripped) {
            if kind != Kind::Bullet {
                flush(&mut sections, &kind, &mut buf);
                kind = Kind::Bullet;
            }
            buf.push(item.to_string());
            continue;
        }

        if NUMBERED_MARKER.is_match(stripped) {
            if kind != Kind::Numbered {
                flush(&mut sections, &kind, &mut buf);
                kind = Kind::Numbered;
            }
            buf.push(NUMBERED_MARKER.replace(stripped, "").into_owned());
            continue;
        }

        if kind != Kind::Paragraph {
            flush(&mut sections, &kind, &mut buf);
            kind = Kind::Paragraph;
        }
        // keep the raw line so the renderer can still apply inline emphasis
        buf.push(line.to_string());
    }

    flush(&mut sections, &kind, &mut buf);
    sections
}

/// Render sections back to canonical markdown-like text. Parsing the output
/// again yields the same sections.
pub fn render_sections(sections: &[Section]) -> String {
    let blocks: Vec<String> = sections
        .iter()
        .map(|section| match section {
            Section::Header { level: 2, text } => format!("## {}", text),
            Section::Header { text, .. } => format!("### {}", text),
            Section::Paragraph { lines } => lines.join("\n"),
            Section::BulletList { items } => items
                .iter()
                .map(|i| format!("- {}", i))
                .collect::<Vec<_>>()
                .join("\n"),
            Section::NumberedList { items } => items
                .iter()
                .enumerate()
                .map(|(n, i)| format!("{}. {}", n + 1, i))
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect();
    blocks.join("\n\n")
}
