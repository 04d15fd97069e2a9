//! Participant response record and the partial-merge update applied to it

use super::attendance::Attendance;
use super::budget::BudgetRange;
use crate::core::error::DomainError;
use crate::core::id::ParticipantId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything one participant has told us about one plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub participant: ParticipantId,
    pub attendance: Option<Attendance>,
    /// ISO `YYYY-MM-DD` candidates in the order given
    pub dates: Vec<String>,
    pub area: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    /// Comma-separated free text, tokenized only at aggregation time
    pub cuisine: Option<String>,
}

impl ParticipantResponse {
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            attendance: None,
            dates: Vec::new(),
            area: None,
            budget_min: None,
            budget_max: None,
            cuisine: None,
        }
    }

    /// Merge `update` into this record
    ///
    /// Fields not present in the update keep their value. `dates`, when
    /// present, replaces the whole list. The update is validated before
    /// anything is written, so a failed merge leaves the record untouched.
    pub fn apply(&mut self, update: ResponseUpdate) -> Result<(), DomainError> {
        let dates = update.dates.map(DatesInput::into_list).transpose()?;

        if let Some(attendance) = update.attendance {
            self.attendance = Some(attendance);
        }
        if let Some(dates) = dates {
            self.dates = dates;
        }
        if let Some(area) = update.area {
            self.area = Some(area);
        }
        if let Some(min) = update.budget_min {
            self.budget_min = Some(min);
        }
        if let Some(max) = update.budget_max {
            self.budget_max = Some(max);
        }
        if let Some(cuisine) = update.cuisine {
            self.cuisine = Some(cuisine);
        }
        Ok(())
    }

    pub fn is_eligible(&self) -> bool {
        self.attendance.is_some_and(|a| a.is_eligible())
    }

    /// Both budget bounds, when the participant has given both
    pub fn budget(&self) -> Option<BudgetRange> {
        Some(BudgetRange::new(self.budget_min?, self.budget_max?))
    }

    /// Cuisine text split on commas, trimmed, empties dropped
    pub fn cuisine_tokens(&self) -> impl Iterator<Item = &str> {
        self.cuisine
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Dates as they arrive from upstream parsing: a list, or comma-separated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatesInput {
    List(Vec<String>),
    Text(String),
}

impl DatesInput {
    /// Normalize into a list, splitting text on commas and trimming
    pub fn into_list(self) -> Result<Vec<String>, DomainError> {
        match self {
            DatesInput::List(dates) => Ok(dates),
            DatesInput::Text(text) => Ok(split_dates(&text)),
        }
    }

    /// Accept a JSON array of strings or a comma-separated JSON string
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        match value {
            Value::String(text) => Ok(DatesInput::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(DomainError::InvalidInput(format!(
                        "date entries must be strings (got {})",
                        other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(DatesInput::List),
            other => Err(DomainError::InvalidInput(format!(
                "dates must be a list or comma-separated text (got {})",
                other
            ))),
        }
    }
}

fn split_dates(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

/// A partial update to a [`ParticipantResponse`]
///
/// `None` means "not supplied"; the stored value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseUpdate {
    pub attendance: Option<Attendance>,
    pub dates: Option<DatesInput>,
    pub area: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub cuisine: Option<String>,
}

impl ResponseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = Some(attendance);
        self
    }

    pub fn dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = Some(DatesInput::List(dates.into_iter().map(Into::into).collect()));
        self
    }

    pub fn dates_text(mut self, text: impl Into<String>) -> Self {
        self.dates = Some(DatesInput::Text(text.into()));
        self
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn budget(mut self, budget: BudgetRange) -> Self {
        self.budget_min = Some(budget.min);
        self.budget_max = Some(budget.max);
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build an update from a loosely-typed JSON object
    ///
    /// Unknown keys and `null` values are ignored. `dates` may be an array
    /// of strings or comma-separated text; budgets must be integers.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let Value::Object(map) = value else {
            return Err(DomainError::InvalidInput(
                "response update must be a JSON object".to_string(),
            ));
        };

        let mut update = Self::default();
        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "attendance" => update.attendance = Some(json_str(key, value)?.parse()?),
                "dates" => update.dates = Some(DatesInput::from_json(value)?),
                "area" => update.area = Some(json_str(key, value)?.to_string()),
                "budget_min" => update.budget_min = Some(json_int(key, value)?),
                "budget_max" => update.budget_max = Some(json_int(key, value)?),
                "cuisine" => update.cuisine = Some(json_str(key, value)?.to_string()),
                _ => {}
            }
        }
        Ok(update)
    }
}

fn json_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, DomainError> {
    value
        .as_str()
        .ok_or_else(|| DomainError::InvalidInput(format!("{} must be a string", key)))
}

fn json_int(key: &str, value: &Value) -> Result<i64, DomainError> {
    value
        .as_i64()
        .ok_or_else(|| DomainError::InvalidInput(format!("{} must be an integer", key)))
}
