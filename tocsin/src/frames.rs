use serde::{Deserialize, Serialize};

// Placeholder for frames we can't put any real name on - there's no consistent
// function name in a raw trace, and a map token doesn't always carry one.
pub const UNKNOWN_FUNCTION: &str = "unknown_func";

// One entry of an extracted stack trace, as the extractor hands it to us.
// `source` is a free-form label for the frame, used as the last-resort
// function-name hint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawFrame {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "lineNumber")]
    pub line: Option<u32>,
    #[serde(rename = "columnNumber")]
    pub column: Option<u32>,
    pub source: Option<String>,
}

// What the symbolicator had to say about one raw frame. All fields are absent
// when no source map is active, or when the position is unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub source: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub name: Option<String>,
}

// The frame shape the reporting sink accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFrame {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "lineNumber")]
    pub line_number: Option<u32>,
    #[serde(rename = "columnNumber")]
    pub column_number: Option<u32>,
    #[serde(rename = "functionName")]
    pub function_name: String,
}

impl From<(&RawFrame, ResolvedLocation)> for ReportFrame {
    fn from((raw, loc): (&RawFrame, ResolvedLocation)) -> Self {
        let function_name = match &loc.source {
            Some(source) => format!(
                "{}@{} {}:{}",
                loc.name.as_deref().unwrap_or(UNKNOWN_FUNCTION),
                source,
                loc.line.unwrap_or_default(),
                loc.column.unwrap_or_default(),
            ),
            None => raw
                .source
                .clone()
                .unwrap_or_else(|| UNKNOWN_FUNCTION.to_string()),
        };

        // Presence-based fallback, not truthiness - a resolved line or column
        // of 0 is a real location and must not fall through to the raw frame.
        Self {
            file_name: loc.source.or_else(|| raw.file_name.clone()),
            line_number: loc.line.or(raw.line),
            column_number: loc.column.or(raw.column),
            function_name,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn falls_back_to_raw_frame_fields() {
        let raw = RawFrame {
            file_name: Some("a.js".to_string()),
            line: Some(10),
            column: Some(5),
            source: None,
        };

        let frame = ReportFrame::from((&raw, ResolvedLocation::default()));

        assert_eq!(frame.file_name.as_deref(), Some("a.js"));
        assert_eq!(frame.line_number, Some(10));
        assert_eq!(frame.column_number, Some(5));
        assert_eq!(frame.function_name, UNKNOWN_FUNCTION);
    }

    #[test]
    fn raw_source_label_names_unresolved_frames() {
        let raw = RawFrame {
            source: Some("at foo (a.js:10:5)".to_string()),
            ..Default::default()
        };

        let frame = ReportFrame::from((&raw, ResolvedLocation::default()));

        assert_eq!(frame.function_name, "at foo (a.js:10:5)");
    }

    #[test]
    fn resolved_location_wins() {
        let raw = RawFrame {
            file_name: Some("bundle.min.js".to_string()),
            line: Some(10),
            column: Some(5),
            source: None,
        };
        let loc = ResolvedLocation {
            source: Some("orig.js".to_string()),
            line: Some(3),
            column: Some(1),
            name: Some("foo".to_string()),
        };

        let frame = ReportFrame::from((&raw, loc));

        assert_eq!(frame.file_name.as_deref(), Some("orig.js"));
        assert_eq!(frame.line_number, Some(3));
        assert_eq!(frame.column_number, Some(1));
        assert_eq!(frame.function_name, "foo@orig.js 3:1");
    }

    #[test]
    fn zero_line_and_column_are_respected() {
        let raw = RawFrame {
            file_name: Some("bundle.min.js".to_string()),
            line: Some(10),
            column: Some(5),
            source: None,
        };
        let loc = ResolvedLocation {
            source: Some("orig.js".to_string()),
            line: Some(0),
            column: Some(0),
            name: Some("foo".to_string()),
        };

        let frame = ReportFrame::from((&raw, loc));

        assert_eq!(frame.line_number, Some(0));
        assert_eq!(frame.column_number, Some(0));
        assert_eq!(frame.function_name, "foo@orig.js 0:0");
    }

    #[test]
    fn resolved_token_without_name_still_shows_the_location() {
        let loc = ResolvedLocation {
            source: Some("orig.js".to_string()),
            line: Some(3),
            column: Some(1),
            name: None,
        };

        let frame = ReportFrame::from((&RawFrame::default(), loc));

        assert_eq!(frame.function_name, "unknown_func@orig.js 3:1");
    }

    #[test]
    fn report_frame_wire_shape() {
        let frame = ReportFrame {
            file_name: Some("x.js".to_string()),
            line_number: Some(1),
            column_number: Some(2),
            function_name: UNKNOWN_FUNCTION.to_string(),
        };

        assert_eq!(
            serde_json::to_value(&frame).unwrap(),
            json!({
                "fileName": "x.js",
                "lineNumber": 1,
                "columnNumber": 2,
                "functionName": "unknown_func",
            })
        );
    }
}
