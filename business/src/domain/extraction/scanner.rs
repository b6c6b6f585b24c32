use serde_json::{Map, Value};

use super::errors::ExtractionError;
use super::model::ReceiptExtraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingOpen,
    Accumulating { start: usize, depth: usize },
}

/// Returns the first top-level brace-balanced span of `text`.
///
/// Braces are counted without any awareness of JSON string literals, so a
/// `{` or `}` inside a quoted value shifts the depth. Closing braces before
/// the first `{` are ignored. Returns `None` when no span closes.
pub fn first_balanced_object(text: &str) -> Option<&str> {
    let mut state = ScanState::SeekingOpen;

    for (offset, ch) in text.char_indices() {
        state = match (state, ch) {
            (ScanState::SeekingOpen, '{') => ScanState::Accumulating {
                start: offset,
                depth: 1,
            },
            (ScanState::SeekingOpen, _) => ScanState::SeekingOpen,
            (ScanState::Accumulating { start, depth: 1 }, '}') => {
                return Some(&text[start..=offset]);
            }
            (ScanState::Accumulating { start, depth }, '{') => ScanState::Accumulating {
                start,
                depth: depth + 1,
            },
            (ScanState::Accumulating { start, depth }, '}') => ScanState::Accumulating {
                start,
                depth: depth - 1,
            },
            (accumulating, _) => accumulating,
        };
    }

    None
}

/// Isolates and parses the JSON object embedded in a model response.
pub fn parse_model_output(text: &str) -> Result<ReceiptExtraction, ExtractionError> {
    let object = first_balanced_object(text).ok_or_else(|| {
        ExtractionError::MalformedModelOutput("no balanced JSON object".to_string())
    })?;

    let fields: Map<String, Value> = serde_json::from_str(object)
        .map_err(|e| ExtractionError::MalformedModelOutput(e.to_string()))?;

    Ok(ReceiptExtraction::new(fields))
}
