use std::fmt::Display;

use anyhow::Context;
use log::warn;
use serde::Serialize;

use crate::daysteps::{day_action_info, day_action_summary};
use crate::models::BodyProfile;
use crate::training::training_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn render<T: Serialize + Display>(report: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report).context("serializing report")?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Dagsrapport. Uten `strict` gjelder den gamle kontrakten: tom utskrift ved feil.
pub fn run_day(
    record: &str,
    profile: &BodyProfile,
    strict: bool,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if !strict && format == OutputFormat::Text {
        return Ok(day_action_info(record, profile.weight_kg, profile.height_m));
    }
    match day_action_summary(record, profile.weight_kg, profile.height_m) {
        Ok(report) => render(&report, format),
        Err(err) if !strict => {
            warn!("day: {err}");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("day record {record:?}")),
    }
}

pub fn run_training(
    record: &str,
    profile: &BodyProfile,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let report = training_summary(record, profile.weight_kg, profile.height_m)
        .with_context(|| format!("training record {record:?}"))?;
    render(&report, format)
}
