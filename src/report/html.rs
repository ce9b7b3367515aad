//! Static HTML rendering of a [`Report`].

use std::io::{self, Write};

use super::{Block, Report};

const STYLE: &str = "\
body {
    font-family: arial,sans-serif;
    color: #333;
}
div.maxheight {
    border: 1px solid #e0e0e0;
    max-height: 200px;
    overflow: auto;
}
h1 {
    margin-top: 50px;
    padding-bottom: 10px;
    border-bottom: 1px solid #333;
}
h2 {
    margin-top: 30px;
}
table {
    border-spacing: 0;
    border-collapse: collapse;
    font-size: 14px;
    width: 100%;
}
tr {
    margin: 0;
    padding: 0;
}
th {
    text-align: left;
    margin: 0;
    padding: 5px 15px 5px 5px;
}
td {
    margin: 0;
    padding: 5px 15px 5px 5px;
}
tr:nth-child(odd){
  background-color: #e0e0e0;
}
";

/// Write `report` as a complete HTML document.
///
/// Each aggregator block becomes one table inside a fixed-height scrolling `div.maxheight`.
/// All report text is escaped; an absent listing value renders as an empty cell.
pub fn render_html<W: Write>(report: &Report, mut out: W) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html><head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<style>\n{STYLE}</style>")?;
    writeln!(out, "</head><body>")?;

    for block in &report.blocks {
        render_block(block, &mut out)?;
    }

    writeln!(out, "</body></html>")?;
    out.flush()
}

fn render_block<W: Write>(block: &Block, out: &mut W) -> io::Result<()> {
    match block {
        Block::Line { text } => writeln!(out, "<p>{}</p>", escape(text)),
        Block::Heading { level, title } => {
            let level = (*level).clamp(1, 6);
            writeln!(out, "<h{level}>{}</h{level}>", escape(title))
        }
        Block::Stats { stats } => table(out, |out| {
            for s in stats {
                writeln!(out, "<tr><td>{}</td><td>{}</td></tr>", escape(&s.label), s.count)?;
            }
            Ok(())
        }),
        Block::YesNo { tally } => table(out, |out| {
            writeln!(out, "<tr><th>Yes</th><th>No</th></tr>")?;
            writeln!(out, "<tr><td>{}</td><td>{}</td></tr>", tally.yes, tally.no)
        }),
        Block::Ranges { buckets } => table(out, |out| {
            writeln!(out, "<tr>")?;
            for b in buckets {
                writeln!(out, "<th>{}</th>", b.label())?;
            }
            writeln!(out, "</tr>")?;
            writeln!(out, "<tr>")?;
            for b in buckets {
                writeln!(out, "<td>{}</td>", b.count)?;
            }
            writeln!(out, "</tr>")
        }),
        Block::Listing { rows } => table(out, |out| {
            for row in rows {
                writeln!(out, "<tr>")?;
                for value in row {
                    writeln!(out, "<td>{}</td>", escape(value.as_deref().unwrap_or("")))?;
                }
                writeln!(out, "</tr>")?;
            }
            Ok(())
        }),
    }
}

fn table<W, F>(out: &mut W, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out, "<div class=\"maxheight\">")?;
    writeln!(out, "<table>")?;
    body(out)?;
    writeln!(out, "</table>")?;
    writeln!(out, "</div>")
}

/// Escape text for use in HTML element content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
