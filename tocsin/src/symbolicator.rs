use sourcemap::SourceMap;

use crate::{
    error::Error,
    frames::{RawFrame, ResolvedLocation},
};

// Maps raw frame positions back to original source positions. Built exactly
// once, at init time - either a passthrough, when no map was supplied, or a
// consumer over the parsed map.
pub enum Symbolicator {
    Passthrough,
    Map(SourceMap),
}

impl Symbolicator {
    pub fn new(source_map: Option<&str>) -> Result<Self, Error> {
        match source_map {
            None => Ok(Symbolicator::Passthrough),
            Some(raw) => Ok(Symbolicator::Map(SourceMap::from_slice(raw.as_bytes())?)),
        }
    }

    pub fn resolve(&self, frame: &RawFrame) -> ResolvedLocation {
        let Symbolicator::Map(map) = self else {
            return ResolvedLocation::default();
        };

        let (Some(line), Some(column)) = (frame.line, frame.column) else {
            return ResolvedLocation::default();
        };

        // Stack trace lines are 1-indexed and the map is 0-indexed, so we
        // subtract one on the way in and add it back on the way out. A line of
        // 0 can't have come from a real trace, and maps to nothing.
        if line == 0 {
            return ResolvedLocation::default();
        }

        let Some(token) = map.lookup_token(line - 1, column) else {
            return ResolvedLocation::default();
        };

        ResolvedLocation {
            source: token.get_source().map(|s| s.to_string()),
            line: Some(token.get_src_line() + 1),
            column: Some(token.get_src_col()),
            name: token.get_name().map(|n| n.to_string()),
        }
    }
}
