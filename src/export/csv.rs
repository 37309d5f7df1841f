//! Delimited-text export.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ExportResult;
use crate::types::Work;

use super::row::{CSV_HEADERS, ExportRow};

/// Write `works` as comma-separated text: one header line, then one line per work.
///
/// Fields holding a comma, quote or line break are quoted, with embedded quotes doubled. An empty
/// collection still produces the header line.
pub fn export_csv<W: Write>(works: &[Work], writer: W) -> ExportResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for work in works {
        wtr.write_record(ExportRow::from_work(work).csv_record())?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::export_csv;
    use crate::fixtures::{unavailable, with_fandoms, work};

    fn render(works: &[crate::types::Work]) -> String {
        let mut out = Vec::new();
        export_csv(works, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_collection_is_header_only() {
        let text = render(&[]);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Title,Author,Fandoms,Word Count,"));
        assert!(text.trim_end().ends_with(",Work ID"));
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let w = with_fandoms(work("1", r#"Say "When""#, "a"), &["A", "B"]);
        let text = render(&[w]);
        let line = text.lines().nth(1).unwrap();
        assert!(line.starts_with(r#""Say ""When""",a,"A, B",1000,"#), "{line}");
    }

    #[test]
    fn unavailable_title_is_replaced() {
        let text = render(&[work("1", "Here", "a"), unavailable()]);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(2).unwrap().starts_with("Deleted Work,Unknown,"));
    }
}
