use crate::adapters::api::{
    handle_arabic_to_roman, handle_convert, handle_roman_to_arabic, respond_convert, ApiResponse,
};
use crate::config::toml_config::{
    TomlConfig, DEFAULT_ARABIC_TO_ROMAN_INSTANCE, DEFAULT_CONVERT_INSTANCE,
    DEFAULT_ROMAN_TO_ARABIC_INSTANCE,
};
use crate::config::OutputFormat;
use crate::domain::model::{ConversionRequest, RequestedDirection};
use crate::domain::ports::ConversionService;
use crate::utils::error::Result;
use serde_json::Value;
use std::io::{BufRead, Write};

/// One unit of work for the runner, independent of how it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Convert(Vec<String>),
    ArabicToRoman(String),
    RomanToArabic(String),
    /// JSON request bodies read line by line.
    Batch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub direction: RequestedDirection,
    pub format: OutputFormat,
    pub pretty: bool,
    pub convert_instance: String,
    pub arabic_to_roman_instance: String,
    pub roman_to_arabic_instance: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            direction: RequestedDirection::Auto,
            format: OutputFormat::Text,
            pretty: false,
            convert_instance: DEFAULT_CONVERT_INSTANCE.to_string(),
            arabic_to_roman_instance: DEFAULT_ARABIC_TO_ROMAN_INSTANCE.to_string(),
            roman_to_arabic_instance: DEFAULT_ROMAN_TO_ARABIC_INSTANCE.to_string(),
        }
    }
}

impl RunSettings {
    pub fn from_config(config: &TomlConfig) -> Self {
        Self {
            direction: config.default_direction(),
            format: config.output_format(),
            pretty: config.pretty(),
            convert_instance: config.convert_instance().to_string(),
            arabic_to_roman_instance: config.arabic_to_roman_instance().to_string(),
            roman_to_arabic_instance: config.roman_to_arabic_instance().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

pub struct Runner<S: ConversionService> {
    service: S,
    settings: RunSettings,
}

impl<S: ConversionService> Runner<S> {
    pub fn new(service: S, settings: RunSettings) -> Self {
        Self { service, settings }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Runs `task`, writing results to `out` and (text mode) failures to `err`.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &self,
        task: &Task,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        match task {
            Task::Convert(inputs) => {
                for raw in inputs {
                    let request = ConversionRequest::new(raw.as_str())
                        .with_direction(self.settings.direction);
                    let response =
                        respond_convert(&self.service, &request, &self.settings.convert_instance);
                    self.emit(&response, &mut summary, out, err)?;
                }
            }
            Task::ArabicToRoman(arabic) => {
                let response = handle_arabic_to_roman(
                    Some(arabic.as_str()),
                    &self.settings.arabic_to_roman_instance,
                );
                self.emit(&response, &mut summary, out, err)?;
            }
            Task::RomanToArabic(roman) => {
                let response = handle_roman_to_arabic(
                    Some(roman.as_str()),
                    &self.settings.roman_to_arabic_instance,
                );
                self.emit(&response, &mut summary, out, err)?;
            }
            Task::Batch => {
                for line in input.lines() {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    let response =
                        handle_convert(&self.service, &line, &self.settings.convert_instance);
                    self.emit(&response, &mut summary, out, err)?;
                }
            }
        }

        tracing::debug!(
            processed = summary.processed,
            failed = summary.failed,
            "Run finished"
        );
        Ok(summary)
    }

    fn emit<W: Write, E: Write>(
        &self,
        response: &ApiResponse,
        summary: &mut RunSummary,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        summary.processed += 1;
        if !response.is_success() {
            summary.failed += 1;
        }

        match self.settings.format {
            OutputFormat::Json => {
                let rendered = if self.settings.pretty {
                    serde_json::to_string_pretty(&response.body)?
                } else {
                    serde_json::to_string(&response.body)?
                };
                writeln!(out, "{}", rendered)?;
            }
            OutputFormat::Text if response.is_success() => {
                writeln!(out, "{}", success_text(&response.body))?;
            }
            OutputFormat::Text => {
                writeln!(err, "❌ {}", failure_text(&response.body))?;
            }
        }
        Ok(())
    }
}

fn success_text(body: &Value) -> String {
    ["output", "roman", "arabic"]
        .iter()
        .find_map(|key| body.get(*key))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| body.to_string())
}

fn failure_text(body: &Value) -> String {
    let title = body.get("title").and_then(Value::as_str).unwrap_or("Error");
    match body.get("detail").and_then(Value::as_str) {
        Some(detail) => format!("{}: {}", title, detail),
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConvertUseCase;
    use std::io::Cursor;

    fn run_text(task: Task, stdin: &str) -> (RunSummary, String, String) {
        run_with(RunSettings::default(), task, stdin)
    }

    fn run_with(settings: RunSettings, task: Task, stdin: &str) -> (RunSummary, String, String) {
        let runner = Runner::new(ConvertUseCase, settings);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = runner
            .run(&task, Cursor::new(stdin.to_string()), &mut out, &mut err)
            .unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_convert_text_output() {
        let task = Task::Convert(vec!["42".into(), "  XIV  ".into(), "12X".into()]);
        let (summary, out, err) = run_text(task, "");

        assert_eq!(summary, RunSummary { processed: 3, failed: 1 });
        assert_eq!(out, "XLII\n14\n");
        assert_eq!(
            err,
            "❌ Validation Error: Input is neither a valid number nor a valid Roman numeral\n"
        );
    }

    #[test]
    fn test_convert_respects_direction_setting() {
        let settings = RunSettings {
            direction: RequestedDirection::ToNumeric,
            ..RunSettings::default()
        };
        let (summary, _, err) = run_with(settings, Task::Convert(vec!["42".into()]), "");
        assert_eq!(summary.failed, 1);
        assert!(err.contains("valid Roman numeral for conversion to numeric"));
    }

    #[test]
    fn test_quick_tasks() {
        let (_, out, _) = run_text(Task::ArabicToRoman("1994".into()), "");
        assert_eq!(out, "MCMXCIV\n");

        let (_, out, _) = run_text(Task::RomanToArabic("mcmxciv".into()), "");
        assert_eq!(out, "1994\n");
    }

    #[test]
    fn test_batch_json_output() {
        let settings = RunSettings {
            format: OutputFormat::Json,
            ..RunSettings::default()
        };
        let stdin = "{\"input\": \"58\"}\n\n{\"input\": \"VV\", \"direction\": \"toNumeric\"}\nnot json\n";
        let (summary, out, err) = run_with(settings, Task::Batch, stdin);

        assert_eq!(summary, RunSummary { processed: 3, failed: 2 });
        assert!(err.is_empty());

        let lines: Vec<Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines[0]["output"], "LVIII");
        assert_eq!(lines[1]["type"], "/problems/invalid-numeral");
        assert_eq!(lines[2]["type"], "/problems/malformed-request");
    }
}
