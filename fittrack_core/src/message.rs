//! Workout summary records and their rendering.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Summary of one computed workout
///
/// Built once from a calculator and never modified afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

/// Label language for text reports
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(Error::Config(format!("unknown language: {}", other))),
        }
    }
}

/// Output format for report lines
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::Config(format!("unknown report format: {}", other))),
        }
    }
}

impl InfoMessage {
    /// Render the summary line in the given language
    ///
    /// Every number is shown with exactly three decimals.
    pub fn get_message(&self, language: Language) -> String {
        match language {
            Language::En => format!(
                "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Avg speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Language::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }

    /// Render in the requested format (text line or single-line JSON object)
    pub fn render(&self, format: ReportFormat, language: Language) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.get_message(language)),
            ReportFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message(Language::En))
    }
}
