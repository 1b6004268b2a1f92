//! Form wizard definitions
//!
//! A wizard is an ordered list of steps; each step lists the draft fields it
//! owns and the rules they must satisfy before the user may move on.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use crate::models::{ConferenceStatus, ConferenceType, RegistrationType, WebinarStatus, WebinarType};
use crate::normalize::label_key;
use crate::utils::errors::{EventDeskError, Result, ValidationErrors};
use crate::utils::helpers::{is_valid_email, is_valid_phone, is_valid_url, parse_date, parse_time};

pub const CONFERENCE_WIZARD: &str = "conference";
pub const WEBINAR_WIZARD: &str = "webinar";
pub const REGISTRATION_WIZARD: &str = "registration";

/// "90", "60 minutes", "1.5 hours", "2h"
const DURATION_PATTERN: &str = r"(?i)^\d+(\.\d+)?\s*(m|min|mins|minutes|h|hr|hrs|hour|hours)?$";

/// A multi-step form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wizard {
    /// Wizard identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Steps in the order they are shown
    pub steps: Vec<WizardStep>,
    /// Values a new draft starts with
    pub initial_values: Map<String, Value>,
}

/// One page of a wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardStep {
    pub id: String,
    pub name: String,
    /// Draft fields edited on this step
    pub fields: Vec<FieldRule>,
    /// Rules spanning several fields of this step
    pub checks: Vec<CrossCheck>,
}

/// Validation rules for one draft field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Canonical (camelCase) draft key
    pub field: String,
    pub label: String,
    pub input_type: InputType,
    pub required: bool,
    /// Minimum length (for text inputs)
    pub min_length: Option<usize>,
    /// Maximum length (for text inputs)
    pub max_length: Option<usize>,
    /// Pattern to match (regex)
    pub pattern: Option<String>,
    /// Custom validation message
    pub error_message: Option<String>,
}

/// Types of input a field accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    Text,
    Number,
    Date,
    Time,
    Email,
    Phone,
    Url,
    Choice(Vec<String>),
    /// List of strings, such as tags
    List,
    /// List of objects, such as speakers; rows with every key blank are ignored
    Items { required_keys: Vec<String> },
}

/// Rules involving more than one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossCheck {
    /// `end` must not be before `start`
    DateOrder { start: String, end: String },
}

impl FieldRule {
    pub fn new(field: &str, label: &str, input_type: InputType) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            input_type,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            error_message: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn pattern(mut self, pattern: &str, message: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self.error_message = Some(message.to_string());
        self
    }

    /// Check one value; `Ok(None)` when it is acceptable. A rule whose
    /// pattern does not compile is a configuration error.
    pub fn check(&self, value: Option<&Value>) -> Result<Option<String>> {
        let value = match value {
            Some(value) if !is_blank(Some(value), &self.input_type) => value,
            _ => return Ok(self.required.then(|| format!("{} is required", self.label))),
        };

        match &self.input_type {
            InputType::List => Ok(None),
            InputType::Items { required_keys } => Ok(self.check_items(value, required_keys)),
            _ => self.check_scalar(&scalar_text(value)),
        }
    }

    fn check_scalar(&self, input: &str) -> Result<Option<String>> {
        let input = input.trim();
        let length = input.chars().count();

        if let Some(min_length) = self.min_length {
            if length < min_length {
                return Ok(Some(self.error_message.clone().unwrap_or_else(|| {
                    format!("{} must be at least {} characters", self.label, min_length)
                })));
            }
        }

        if let Some(max_length) = self.max_length {
            if length > max_length {
                return Ok(Some(self.error_message.clone().unwrap_or_else(|| {
                    format!("{} must be at most {} characters", self.label, max_length)
                })));
            }
        }

        if let Some(pattern) = &self.pattern {
            let regex = regex::Regex::new(pattern)
                .map_err(|e| EventDeskError::Config(format!("Invalid pattern for {}: {}", self.field, e)))?;
            if !regex.is_match(input) {
                return Ok(Some(self.error_message.clone().unwrap_or_else(|| format!("{} format is invalid", self.label))));
            }
        }

        let message = match &self.input_type {
            InputType::Number => match input.parse::<f64>() {
                Ok(n) if n.is_finite() && n >= 0.0 => None,
                _ => Some(format!("{} must be a non-negative number", self.label)),
            },
            InputType::Date => parse_date(input)
                .is_none()
                .then(|| "Invalid date format (YYYY-MM-DD)".to_string()),
            InputType::Time => parse_time(input)
                .is_none()
                .then(|| "Invalid time format (HH:MM)".to_string()),
            InputType::Email => (!is_valid_email(input)).then(|| "Invalid email format".to_string()),
            InputType::Phone => (!is_valid_phone(input)).then(|| "Invalid phone number".to_string()),
            InputType::Url => (!is_valid_url(input)).then(|| format!("{} must be a valid URL", self.label)),
            InputType::Choice(choices) => {
                let key = label_key(input);
                (!choices.iter().any(|choice| label_key(choice) == key))
                    .then(|| format!("Invalid choice. Available options: {}", choices.join(", ")))
            }
            _ => None,
        };
        Ok(message)
    }

    fn check_items(&self, value: &Value, required_keys: &[String]) -> Option<String> {
        let rows = value.as_array()?;
        for (index, row) in rows.iter().enumerate() {
            let Some(row) = row.as_object() else {
                continue;
            };
            if row_is_blank(row) {
                continue;
            }
            for key in required_keys {
                if text_of(row.get(key)).trim().is_empty() {
                    return Some(format!("{} #{}: {} is required", self.label, index + 1, key));
                }
            }
        }
        None
    }
}

impl CrossCheck {
    /// Returns the offending field and message
    pub fn check(&self, values: &Map<String, Value>) -> Option<(String, String)> {
        match self {
            CrossCheck::DateOrder { start, end } => {
                let start_date = parse_date(&text_of(values.get(start)))?;
                let end_date = parse_date(&text_of(values.get(end)))?;
                (end_date < start_date).then(|| (end.clone(), "End date must not be before start date".to_string()))
            }
        }
    }
}

impl WizardStep {
    fn new(id: &str, name: &str, fields: Vec<FieldRule>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fields,
            checks: Vec::new(),
        }
    }

    fn with_check(mut self, check: CrossCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Validate the fields of this step against the draft values
    pub fn validate(&self, values: &Map<String, Value>) -> Result<ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for rule in &self.fields {
            if let Some(message) = rule.check(values.get(&rule.field))? {
                errors.add(&rule.field, message);
            }
        }
        for check in &self.checks {
            if let Some((field, message)) = check.check(values) {
                errors.add(&field, message);
            }
        }
        Ok(errors)
    }

    pub fn is_review(&self) -> bool {
        self.fields.is_empty() && self.checks.is_empty()
    }
}

impl Wizard {
    pub fn step(&self, index: usize) -> Option<&WizardStep> {
        self.steps.get(index)
    }

    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate every step; used on submit
    pub fn validate_all(&self, values: &Map<String, Value>) -> Result<ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for step in &self.steps {
            for (field, message) in step.validate(values)?.fields {
                errors.add(&field, message);
            }
        }
        Ok(errors)
    }
}

/// Registry of the wizards the application offers
#[derive(Debug, Clone)]
pub struct WizardManager {
    wizards: HashMap<String, Wizard>,
}

impl WizardManager {
    /// Create a new wizard manager with the default wizards
    pub fn new() -> Self {
        let mut manager = Self {
            wizards: HashMap::new(),
        };
        manager.register(create_conference_wizard());
        manager.register(create_webinar_wizard());
        manager.register(create_registration_wizard());
        manager
    }

    pub fn register(&mut self, wizard: Wizard) {
        self.wizards.insert(wizard.id.clone(), wizard);
    }

    pub fn get(&self, id: &str) -> Option<&Wizard> {
        self.wizards.get(id)
    }

    /// Like [`get`](Self::get), failing for unknown ids
    pub fn wizard(&self, id: &str) -> Result<&Wizard> {
        self.get(id)
            .ok_or_else(|| EventDeskError::InvalidInput(format!("Unknown wizard: {}", id)))
    }
}

impl Default for WizardManager {
    fn default() -> Self {
        Self::new()
    }
}

fn choices<I: IntoIterator<Item = &'static str>>(values: I) -> InputType {
    InputType::Choice(values.into_iter().map(str::to_string).collect())
}

/// Create the conference create/edit wizard
pub fn create_conference_wizard() -> Wizard {
    let basic_info = WizardStep::new(
        "basic_info",
        "Basic Information",
        vec![
            FieldRule::new("title", "Title", InputType::Text).required().length(Some(3), Some(200)),
            FieldRule::new("description", "Description", InputType::Text)
                .required()
                .length(Some(10), Some(5000)),
            FieldRule::new("type", "Conference type", choices(ConferenceType::ALL.iter().map(|t| t.as_str())))
                .required(),
        ],
    );

    let schedule = WizardStep::new(
        "schedule",
        "Date & Location",
        vec![
            FieldRule::new("startDate", "Start date", InputType::Date).required(),
            FieldRule::new("endDate", "End date", InputType::Date).required(),
            FieldRule::new("startTime", "Start time", InputType::Time),
            FieldRule::new("endTime", "End time", InputType::Time),
            FieldRule::new("location", "Location", InputType::Text).required().length(Some(2), Some(200)),
            FieldRule::new("venue", "Venue", InputType::Text).length(None, Some(200)),
        ],
    )
    .with_check(CrossCheck::DateOrder {
        start: "startDate".to_string(),
        end: "endDate".to_string(),
    });

    let speakers = WizardStep::new(
        "speakers",
        "Speakers & Sessions",
        vec![
            FieldRule::new("speakers", "Speaker", InputType::Items { required_keys: vec!["name".to_string()] }),
            FieldRule::new("sessions", "Session", InputType::Items { required_keys: vec!["title".to_string()] }),
        ],
    );

    let registration = WizardStep::new(
        "registration",
        "Registration",
        vec![
            FieldRule::new("capacity", "Capacity", InputType::Number).required(),
            FieldRule::new("earlyBirdFee", "Early bird fee", InputType::Number),
            FieldRule::new("regularFee", "Regular fee", InputType::Number),
            FieldRule::new("studentFee", "Student fee", InputType::Number),
            FieldRule::new("status", "Status", choices(ConferenceStatus::ALL.iter().map(|s| s.as_str()))).required(),
            FieldRule::new("highlights", "Highlights", InputType::List),
            FieldRule::new("imageUrl", "Image", InputType::Url),
        ],
    );

    Wizard {
        id: CONFERENCE_WIZARD.to_string(),
        name: "Conference".to_string(),
        steps: vec![basic_info, schedule, speakers, registration, WizardStep::new("review", "Review", vec![])],
        initial_values: initial_values(json!({
            "type": ConferenceType::default().as_str(),
            "status": ConferenceStatus::default().as_str(),
            "speakers": [],
            "sessions": [],
            "highlights": [],
        })),
    }
}

/// Create the webinar create/edit wizard
pub fn create_webinar_wizard() -> Wizard {
    let basic_info = WizardStep::new(
        "basic_info",
        "Basic Information",
        vec![
            FieldRule::new("title", "Title", InputType::Text).required().length(Some(3), Some(200)),
            FieldRule::new("category", "Category", InputType::Text).required(),
            FieldRule::new("description", "Description", InputType::Text)
                .required()
                .length(Some(10), Some(5000)),
            FieldRule::new("type", "Webinar type", choices(WebinarType::ALL.iter().map(|t| t.label()))).required(),
        ],
    );

    let schedule = WizardStep::new(
        "schedule",
        "Schedule",
        vec![
            FieldRule::new("date", "Date", InputType::Date).required(),
            FieldRule::new("time", "Time", InputType::Time).required(),
            FieldRule::new("duration", "Duration", InputType::Text)
                .required()
                .length(None, Some(50))
                .pattern(DURATION_PATTERN, "Duration must be minutes or hours, e.g. 60 minutes or 1.5 hours"),
        ],
    );

    let speakers = WizardStep::new(
        "speakers",
        "Speakers",
        vec![FieldRule::new("speakers", "Speaker", InputType::Items { required_keys: vec!["name".to_string()] })
            .required()],
    );

    let details = WizardStep::new(
        "details",
        "Details",
        vec![
            FieldRule::new("tags", "Tags", InputType::List),
            FieldRule::new("languages", "Languages", InputType::List),
            FieldRule::new("targetAudience", "Target audience", InputType::List),
            FieldRule::new("learningObjectives", "Learning objectives", InputType::List),
            FieldRule::new("capacity", "Capacity", InputType::Number),
            FieldRule::new("status", "Status", choices(WebinarStatus::ALL.iter().map(|s| s.label()))).required(),
            FieldRule::new("imageUrl", "Image", InputType::Url),
            FieldRule::new("meetingLink", "Meeting link", InputType::Url),
        ],
    );

    Wizard {
        id: WEBINAR_WIZARD.to_string(),
        name: "Webinar".to_string(),
        steps: vec![basic_info, schedule, speakers, details, WizardStep::new("review", "Review", vec![])],
        initial_values: initial_values(json!({
            "type": WebinarType::default().label(),
            "status": WebinarStatus::default().label(),
            "speakers": [],
            "tags": [],
            "languages": ["English"],
        })),
    }
}

/// Create the public event registration form
pub fn create_registration_wizard() -> Wizard {
    let attendee = WizardStep::new(
        "attendee",
        "Your Details",
        vec![
            FieldRule::new("name", "Name", InputType::Text).required().length(Some(2), Some(100)),
            FieldRule::new("email", "Email", InputType::Email).required(),
            FieldRule::new("phone", "Phone", InputType::Phone),
            FieldRule::new("organization", "Organization", InputType::Text).length(None, Some(200)),
            FieldRule::new(
                "registrationType",
                "Registration type",
                choices(RegistrationType::ALL.iter().map(|t| t.as_str())),
            )
            .required(),
        ],
    );

    Wizard {
        id: REGISTRATION_WIZARD.to_string(),
        name: "Registration".to_string(),
        steps: vec![attendee],
        initial_values: initial_values(json!({
            "registrationType": RegistrationType::default().as_str(),
        })),
    }
}

fn initial_values(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn text_of(value: Option<&Value>) -> String {
    value.map(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn row_is_blank(row: &Map<String, Value>) -> bool {
    row.values().all(|v| scalar_text(v).trim().is_empty())
}

fn is_blank(value: Option<&Value>, input_type: &InputType) -> bool {
    match (value, input_type) {
        (None, _) | (Some(Value::Null), _) => true,
        (Some(Value::Array(items)), InputType::Items { .. }) => items
            .iter()
            .all(|row| row.as_object().map(row_is_blank).unwrap_or(true)),
        (Some(Value::Array(items)), _) => items.iter().all(|item| scalar_text(item).trim().is_empty()),
        (Some(value), _) => scalar_text(value).trim().is_empty(),
    }
}
