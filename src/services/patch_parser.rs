use std::num::NonZeroUsize;
use serde_json::{Map, Value};
use crate::errors::parse_error::ParseError;
use crate::structs::patch_spec::PatchSpec;

const FILE_PATH_FIELD: &str = "file_path";
const LINE_NUMBER_FIELD: &str = "line_number";
const CURRENT_CODE_FIELD: &str = "current_code";
const FIXED_CODE_FIELD: &str = "fixed_code";
const EXPLANATION_FIELD: &str = "explanation";

/// Turns raw model output into a `PatchSpec`.
///
/// The whole response must be one JSON object. Prose around it, markdown
/// fences included, is rejected rather than repaired.
pub struct PatchParser;

impl PatchParser {
    pub fn parse(raw_response: &str) -> Result<PatchSpec, ParseError> {
        let json: Value = serde_json::from_str(raw_response.trim()).map_err(ParseError::InvalidJson)?;

        let fields = match json {
            Value::Object(fields) => fields,
            other => {
                return Err(ParseError::NotAnObject {
                    found: json_type_name(&other),
                })
            }
        };

        let file_path = Self::required_string(&fields, FILE_PATH_FIELD)?;
        let line_number = Self::required_line_number(&fields)?;
        let fixed_code = Self::required_string(&fields, FIXED_CODE_FIELD)?;
        let explanation = Self::required_string(&fields, EXPLANATION_FIELD)?;
        let current_code = Self::optional_string(&fields, CURRENT_CODE_FIELD)?.unwrap_or_default();

        if fixed_code.contains(['\n', '\r']) {
            return Err(ParseError::InvalidField {
                field: FIXED_CODE_FIELD,
                expected: "a single line of code",
                found: "a multi-line string".to_string(),
            });
        }

        Ok(PatchSpec::new(file_path, line_number, current_code, fixed_code, explanation))
    }

    fn required_string(fields: &Map<String, Value>, field: &'static str) -> Result<String, ParseError> {
        Self::optional_string(fields, field)?.ok_or(ParseError::MissingField { field })
    }

    fn optional_string(fields: &Map<String, Value>, field: &'static str) -> Result<Option<String>, ParseError> {
        match fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(ParseError::InvalidField {
                field,
                expected: "a string",
                found: json_type_name(other).to_string(),
            }),
        }
    }

    fn required_line_number(fields: &Map<String, Value>) -> Result<NonZeroUsize, ParseError> {
        let value = match fields.get(LINE_NUMBER_FIELD) {
            None | Some(Value::Null) => {
                return Err(ParseError::MissingField {
                    field: LINE_NUMBER_FIELD,
                })
            }
            Some(value) => value,
        };

        value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| ParseError::InvalidField {
                field: LINE_NUMBER_FIELD,
                expected: "a positive integer",
                found: value.to_string(),
            })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"file_path": "calc.py", "line_number": 10, "current_code": "return 4", "fixed_code": "return 5", "explanation": "fix return value"}"#;

    #[test]
    fn test_parses_complete_response() {
        let spec = PatchParser::parse(VALID).unwrap();
        assert_eq!(spec.file_path(), "calc.py");
        assert_eq!(spec.line_number(), 10);
        assert_eq!(spec.current_code(), "return 4");
        assert_eq!(spec.fixed_code(), "return 5");
        assert_eq!(spec.explanation(), "fix return value");
    }

    #[test]
    fn test_current_code_is_optional() {
        let spec = PatchParser::parse(
            r#"{"file_path": "a.py", "line_number": 1, "fixed_code": "x = 1", "explanation": "e"}"#,
        )
        .unwrap();
        assert_eq!(spec.current_code(), "");
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert!(PatchParser::parse(&format!("\n  {VALID}\n")).is_ok());
    }

    #[test]
    fn test_prose_is_rejected() {
        let err = PatchParser::parse("The fix is to return 5 instead of 4.").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn test_fenced_json_is_not_repaired() {
        let fenced = format!("```json\n{VALID}\n```");
        assert!(matches!(PatchParser::parse(&fenced), Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_non_object_json() {
        assert!(matches!(
            PatchParser::parse("[1, 2]"),
            Err(ParseError::NotAnObject { found: "an array" })
        ));
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in ["file_path", "line_number", "fixed_code", "explanation"] {
            let mut json: Value = serde_json::from_str(VALID).unwrap();
            json.as_object_mut().unwrap().remove(field);

            match PatchParser::parse(&json.to_string()) {
                Err(ParseError::MissingField { field: missing }) => assert_eq!(missing, field),
                other => panic!("expected missing {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let cases = [
            r#"{"file_path": 3, "line_number": 1, "fixed_code": "x", "explanation": "e"}"#,
            r#"{"file_path": "a", "line_number": "10", "fixed_code": "x", "explanation": "e"}"#,
            r#"{"file_path": "a", "line_number": 1, "fixed_code": ["x"], "explanation": "e"}"#,
            r#"{"file_path": "a", "line_number": 1, "fixed_code": "x", "explanation": false}"#,
            r#"{"file_path": "a", "line_number": 1, "current_code": 4, "fixed_code": "x", "explanation": "e"}"#,
        ];

        for case in cases {
            assert!(
                matches!(PatchParser::parse(case), Err(ParseError::InvalidField { .. })),
                "should reject {case}"
            );
        }
    }

    #[test]
    fn test_line_number_must_be_positive_integer() {
        for line in ["0", "-3", "2.5"] {
            let raw = format!(
                r#"{{"file_path": "a", "line_number": {line}, "fixed_code": "x", "explanation": "e"}}"#
            );
            assert!(
                matches!(
                    PatchParser::parse(&raw),
                    Err(ParseError::InvalidField { field: "line_number", .. })
                ),
                "should reject line_number {line}"
            );
        }
    }

    #[test]
    fn test_multi_line_fix_is_rejected() {
        let raw = r#"{"file_path": "a", "line_number": 1, "fixed_code": "x = 1\ny = 2", "explanation": "e"}"#;
        assert!(matches!(
            PatchParser::parse(raw),
            Err(ParseError::InvalidField { field: "fixed_code", .. })
        ));
    }
}
