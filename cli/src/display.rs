//! Plain text and JSON rendering of session state.

use pages_link_converter::{Conversion, ConversionError, Notice};
use serde_json::{json, Value};

/// Formats a notice as one or two lines of text.
pub fn format_notice(notice: &Notice) -> String {
    let mut text = format!("{} {}", notice.level.symbol(), notice.text);
    if let Some(detail) = &notice.detail {
        text.push_str("\n  ");
        text.push_str(detail);
    }
    text
}

/// Builds the JSON record printed for one input in `--json` mode.
pub fn json_record(
    input: &str,
    result: Result<&Conversion, &ConversionError>,
    notice: Option<&Notice>,
) -> Value {
    match result {
        Ok(conversion) => json!({
            "ok": true,
            "conversion": conversion,
            "notice": notice,
        }),
        Err(e) => json!({
            "ok": false,
            "input": input,
            "error": e.to_string(),
            "notice": notice,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pages_link_converter::{convert, NoticeLevel};

    #[test]
    fn formats_notice_with_detail() {
        let notice = Notice::new(NoticeLevel::Error, "Bad link").with_detail("try again");
        assert_eq!(format_notice(&notice), "✖ Bad link\n  try again");
    }

    #[test]
    fn formats_notice_without_detail() {
        let notice = Notice::new(NoticeLevel::Info, "Opening link in browser...");
        assert_eq!(format_notice(&notice), "i Opening link in browser...");
    }

    #[test]
    fn json_record_for_success() {
        let conversion = convert("https://alice.github.io/site/a.html").unwrap();
        let record = json_record(&conversion.input, Ok(&conversion), None);

        assert_eq!(record["ok"], true);
        assert_eq!(
            record["conversion"]["output"],
            "https://github.com/alice/site/blob/main/a.html"
        );
        assert!(record["notice"].is_null());
    }

    #[test]
    fn json_record_for_failure() {
        let record = json_record("nope", Err(&ConversionError::UnrecognizedFormat), None);

        assert_eq!(record["ok"], false);
        assert_eq!(record["input"], "nope");
        assert!(record["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid GitHub link format"));
    }
}
