use super::*;

#[test]
fn can_display_format_error_without_details() {
    let error = FormatError::new("E0001".to_string(), "invalid activity count".to_string(), "fix it".to_string());

    assert_eq!(error.to_string(), "E0001, cause: 'invalid activity count', action: 'fix it'.");
}

#[test]
fn can_display_format_error_with_details() {
    let error = FormatError::new_with_details(
        "E0004".to_string(),
        "invalid activity".to_string(),
        "fix it".to_string(),
        "line 3".to_string(),
    );

    assert_eq!(error.to_string(), "E0004, cause: 'invalid activity', action: 'fix it'. details: 'line 3'");
}

#[test]
fn can_format_many_errors() {
    let errors = vec![
        FormatError::new("E0001".to_string(), "a".to_string(), "b".to_string()),
        FormatError::new("E0002".to_string(), "c".to_string(), "d".to_string()),
    ];

    let result = FormatError::format_many(errors.as_slice(), "\n");

    assert_eq!(result, "E0001, cause: 'a', action: 'b'.\nE0002, cause: 'c', action: 'd'.");
}

#[test]
fn can_serialize_error_to_json() {
    let error = FormatError::new("E0003".to_string(), "negative constraints".to_string(), "fix it".to_string());

    let json = error.to_json();

    assert!(json.contains("\"code\": \"E0003\""));
    assert!(!json.contains("details"));
}

parameterized_test! {can_parse_number, (token, expected), {
    assert_eq!(parse_number(token), expected);
}}

can_parse_number! {
    case01_zero: ("0", Ok(0)),
    case02_positive: ("42", Ok(42)),
    case03_negative: ("-1", Err(NumberError::Negative)),
    case04_float: ("1.5", Err(NumberError::Malformed)),
    case05_text: ("abc", Err(NumberError::Malformed)),
    case06_empty: ("", Err(NumberError::Malformed)),
    case07_plus_sign: ("+7", Ok(7)),
}
