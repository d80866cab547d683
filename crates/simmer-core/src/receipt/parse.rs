//! Repair of AI receipt responses into a list of raw JSON items.

use serde_json::{Deserializer, Value};

use crate::error::{Result, SimmerError};

/// Extract the item array from a model response.
///
/// Models often wrap JSON in markdown fences or add a sentence before or
/// after it; both are stripped. Every `[` is tried as the start of the
/// array and anything after the array is ignored, so bracketed prose such
/// as "I found [3] items" does not get in the way. An array holding at
/// least one object (or an empty one) wins over an array of bare values.
/// An object such as `{"items": [...]}` also works.
pub fn extract_items(text: &str) -> Result<Vec<Value>> {
    let body = strip_code_fence(text.trim());

    let mut fallback = None;
    let mut last_error = None;
    for (start, _) in body.match_indices('[') {
        let mut stream = Deserializer::from_str(&body[start..]).into_iter::<Vec<Value>>();
        match stream.next() {
            Some(Ok(items)) if items.is_empty() || items.iter().any(Value::is_object) => {
                return Ok(items);
            }
            Some(Ok(items)) => {
                fallback.get_or_insert(items);
            }
            Some(Err(e)) => last_error = Some(e),
            None => {}
        }
    }

    if let Some(items) = fallback {
        return Ok(items);
    }
    Err(match last_error {
        Some(e) => SimmerError::receipt_format(format!("failed to parse grocery items: {e}")),
        None => SimmerError::receipt_format("expected a JSON array of grocery items"),
    })
}

/// Content between the first pair of markdown code fences, or the input
/// unchanged.
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after_open = &text[open + 3..];
    // Skip the language tag on the opening fence line
    let content = match after_open.find('\n') {
        Some(newline) => &after_open[newline + 1..],
        None => after_open,
    };
    match content.find("```") {
        Some(close) => &content[..close],
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_array() {
        let items = extract_items(r#"[{"name": "Milk"}]"#).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_fenced_array_with_prose() {
        let text = "Here are the items:\n```json\n[{\"name\": \"Milk\"}, {\"name\": \"Eggs\"}]\n```\nLet me know!";
        let items = extract_items(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["name"], "Eggs");
    }

    #[test]
    fn test_wrapped_in_object() {
        let items = extract_items(r#"{"items": [{"name": "Bread"}]}"#).unwrap();
        assert_eq!(items[0]["name"], "Bread");
    }

    #[test]
    fn test_bracketed_prose_before_array() {
        let text = "I found [3] items:\n[{\"name\": \"Milk\", \"category\": \"Dairy\"}]";
        let items = extract_items(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Milk");
    }

    #[test]
    fn test_bracketed_prose_after_array() {
        let text = "[{\"name\": \"Eggs\"}, {\"name\": \"Flour\"}]\n(see note [1])";
        let items = extract_items(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["name"], "Flour");
    }

    #[test]
    fn test_empty_array_is_accepted() {
        assert!(extract_items("Nothing edible here: []").unwrap().is_empty());
    }

    #[test]
    fn test_array_of_bare_values_used_as_last_resort() {
        let items = extract_items("Items: [\"Milk\", \"Eggs\"]").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_no_array_is_an_error() {
        let err = extract_items("I could not read this receipt.").unwrap_err();
        assert!(matches!(err, SimmerError::ReceiptFormat { .. }));
    }

    #[test]
    fn test_broken_json_is_an_error() {
        let err = extract_items(r#"[{"name": "Milk",]"#).unwrap_err();
        assert!(err.to_string().contains("failed to parse grocery items"));
    }
}
