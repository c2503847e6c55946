use anyhow::Result;
use roman_convert::adapters::api::{handle_convert, ApiResponse};
use roman_convert::app::{RunSettings, RunSummary, Runner, Task};
use roman_convert::utils::validation::Validate;
use roman_convert::{
    convert, ConversionRequest, ConversionService, ConvertUseCase, Direction, DomainError,
    OutputFormat, RequestedDirection, TomlConfig,
};
use serde_json::{json, Value};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_auto_detection_end_to_end() {
    let result = convert(&ConversionRequest::new("42")).unwrap();
    assert_eq!(result.direction, Direction::ToRoman);
    assert_eq!(result.output, "XLII");

    let result = convert(&ConversionRequest::new("XLII")).unwrap();
    assert_eq!(result.direction, Direction::ToNumeric);
    assert_eq!(result.output, "42");

    assert!(matches!(
        convert(&ConversionRequest::new("12X")),
        Err(DomainError::Validation { .. })
    ));
    assert!(convert(&ConversionRequest::new("")).unwrap_err().is_validation());
    assert!(convert(&ConversionRequest::new("   ")).unwrap_err().is_validation());

    assert_eq!(convert(&ConversionRequest::new("  XIV  ")).unwrap().output, "14");
}

#[test]
fn test_behaviour_is_identical_across_callers() {
    let request = ConversionRequest::new(" 1994 ").with_direction(RequestedDirection::ToRoman);
    let direct = convert(&request).unwrap();
    let via_service = ConvertUseCase::new().convert(&request).unwrap();
    assert_eq!(direct, via_service);

    let response = handle_convert(
        &ConvertUseCase::new(),
        &serde_json::to_string(&request).unwrap(),
        "/api/convert",
    );
    assert_eq!(response.body, serde_json::to_value(&direct).unwrap());
}

#[test]
fn test_problem_details_for_each_failure_kind() {
    let cases = [
        (r#"{"input": "   "}"#, 422, "/problems/validation-error"),
        (r#"{"input": "0"}"#, 422, "/problems/range-error"),
        (r#"{"input": "MMMM"}"#, 422, "/problems/invalid-numeral"),
        (r#"{"input": ""}"#, 400, "/problems/malformed-request"),
        (r#"{"input": "42", "direction": "toArabic"}"#, 400, "/problems/malformed-request"),
    ];

    for (body, status, type_uri) in cases {
        let response: ApiResponse = handle_convert(&ConvertUseCase::new(), body, "/api/convert");
        assert_eq!(response.status, status, "{}", body);
        assert_eq!(response.body["type"], type_uri, "{}", body);
        assert_eq!(response.body["status"], json!(status));
        assert_eq!(response.body["instance"], "/api/convert");
        assert_eq!(response.content_type(), "application/problem+json");
    }
}

#[test]
fn test_runner_with_config_file() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    writeln!(
        config_file,
        r#"
[conversion]
default_direction = "toRoman"

[output]
format = "json"

[api]
convert_instance = "/v1/convert"
"#
    )?;

    let config = TomlConfig::from_file(config_file.path())?;
    config.validate()?;

    let settings = RunSettings::from_config(&config);
    assert_eq!(settings.format, OutputFormat::Json);

    let runner = Runner::new(ConvertUseCase::new(), settings);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = runner.run(
        &Task::Convert(vec!["3999".to_string(), "XIV".to_string()]),
        Cursor::new(Vec::new()),
        &mut out,
        &mut err,
    )?;

    assert_eq!(summary, RunSummary { processed: 2, failed: 1 });

    let lines: Vec<Value> = String::from_utf8(out)?
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(
        lines[0],
        json!({"input": "3999", "output": "MMMCMXCIX", "direction": "toRoman"})
    );
    assert_eq!(lines[1]["type"], "/problems/validation-error");
    assert_eq!(lines[1]["instance"], "/v1/convert");

    Ok(())
}
