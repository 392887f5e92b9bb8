//! `${field}` substitution for service metadata templates.

use crate::catalog_record::RecordResult;

const OPEN: &str = "${";
const CLOSE: char = '}';

fn record_field<'a>(record: &'a RecordResult, name: &str) -> Option<&'a str> {
    match name {
        "title" => Some(&record.title),
        "description" => Some(&record.description),
        "identifier" => Some(record.identifier.as_deref().unwrap_or("")),
        _ => None,
    }
}

pub fn escape_html(text: &str) -> String {
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

/// Expands known placeholders with the escaped record field. Unknown or
/// unterminated placeholders are kept as written.
pub fn render_metadata_template(template: &str, record: &RecordResult) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after_open[..end].trim();
        match record_field(record, name) {
            Some(value) => out.push_str(&escape_html(value)),
            None => out.push_str(&rest[start..start + OPEN.len() + end + 1]),
        }
        rest = &after_open[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_fields() {
        let record = RecordResult::new("title", "description");
        assert_eq!(
            render_metadata_template("<p>${title} and ${description}</p>", &record),
            "<p>title and description</p>"
        );
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let record = RecordResult::new("t", "d");
        assert_eq!(render_metadata_template("${abstract} / ${ title }", &record), "${abstract} / t");
    }

    #[test]
    fn keeps_unterminated_placeholder() {
        let record = RecordResult::new("t", "d");
        assert_eq!(render_metadata_template("a ${title} ${desc", &record), "a t ${desc");
    }

    #[test]
    fn escapes_field_values() {
        let record = RecordResult::new("<b>Roads & \"Rails\"</b>", "");
        assert_eq!(
            render_metadata_template("<h4>${title}</h4>", &record),
            "<h4>&lt;b&gt;Roads &amp; &quot;Rails&quot;&lt;/b&gt;</h4>"
        );
    }

    #[test]
    fn missing_identifier_renders_empty() {
        let record = RecordResult::new("t", "d");
        assert_eq!(render_metadata_template("[${identifier}]", &record), "[]");
    }
}
