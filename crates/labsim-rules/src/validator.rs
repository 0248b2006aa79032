use labsim_core::item::ItemTable;
use labsim_core::practice::Practice;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate item ID '{0}'")]
    DuplicateItemId(String),
    #[error("Duplicate practice ID '{0}'")]
    DuplicatePracticeId(String),
    #[error("Practice '{practice}' has no steps")]
    NoSteps { practice: String },
    #[error("Practice '{practice}' declares vessel '{vessel}' more than once")]
    DuplicateVesselId { practice: String, vessel: String },
    #[error("Practice '{practice}' declares step '{step}' more than once")]
    DuplicateStepId { practice: String, step: String },
    #[error("Practice '{practice}' declares reaction '{rule}' more than once")]
    DuplicateRuleId { practice: String, rule: String },
    #[error("Practice '{practice}': {context} references unknown item '{id}'")]
    UnknownItemRef {
        practice: String,
        context: String,
        id: String,
    },
    #[error("Practice '{practice}': step '{step}' references unknown vessel '{vessel}'")]
    UnknownVesselRef {
        practice: String,
        step: String,
        vessel: String,
    },
    #[error("Practice '{practice}': reaction '{rule}' has no reactants")]
    EmptyReactants { practice: String, rule: String },
    #[error("Practice '{practice}': reaction '{rule}' has an empty observation")]
    EmptyObservation { practice: String, rule: String },
    #[error("Practice '{practice}': vessel '{vessel}' holds a negative volume of '{item}'")]
    NegativeVolume {
        practice: String,
        vessel: String,
        item: String,
    },
    #[error("Practice '{practice}': vessel '{vessel}' has non-positive max_volume {value}")]
    InvalidCapacity {
        practice: String,
        vessel: String,
        value: f64,
    },
}

/// Validate the item table for id uniqueness.
pub fn validate_items(items: &ItemTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for item in items.iter() {
        if !seen_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::DuplicateItemId(item.id.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate one practice against the item table.
pub fn validate_practice(practice: &Practice, items: &ItemTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let pid = || practice.id.clone();

    let unknown_item = |context: String, id: &str, errors: &mut Vec<ValidationError>| {
        if !items.contains(id) {
            errors.push(ValidationError::UnknownItemRef {
                practice: pid(),
                context,
                id: id.to_string(),
            });
        }
    };

    if practice.steps.is_empty() {
        errors.push(ValidationError::NoSteps { practice: pid() });
    }

    // Vessel template
    let mut vessel_ids = HashSet::new();
    for vessel in &practice.initial_vessels {
        if !vessel_ids.insert(vessel.id.as_str()) {
            errors.push(ValidationError::DuplicateVesselId {
                practice: pid(),
                vessel: vessel.id.clone(),
            });
        }
        if vessel.max_volume <= 0.0 {
            errors.push(ValidationError::InvalidCapacity {
                practice: pid(),
                vessel: vessel.id.clone(),
                value: vessel.max_volume,
            });
        }
        for content in &vessel.contents {
            unknown_item(format!("vessel '{}'", vessel.id), &content.item_id, &mut errors);
            if content.volume_ml < 0.0 {
                errors.push(ValidationError::NegativeVolume {
                    practice: pid(),
                    vessel: vessel.id.clone(),
                    item: content.item_id.clone(),
                });
            }
        }
    }

    // Steps
    let mut step_ids = HashSet::new();
    for step in &practice.steps {
        if !step_ids.insert(step.id.as_str()) {
            errors.push(ValidationError::DuplicateStepId {
                practice: pid(),
                step: step.id.clone(),
            });
        }
        for id in &step.available_items {
            unknown_item(format!("step '{}'", step.id), id, &mut errors);
        }
        for required in &step.required_actions {
            if let Some(id) = &required.item_id {
                unknown_item(format!("step '{}' required action", step.id), id, &mut errors);
            }
            if let Some(vessel) = &required.vessel_id {
                if !vessel_ids.contains(vessel.as_str()) {
                    errors.push(ValidationError::UnknownVesselRef {
                        practice: pid(),
                        step: step.id.clone(),
                        vessel: vessel.clone(),
                    });
                }
            }
        }
    }

    // Rulebook
    let mut rule_ids = HashSet::new();
    for rule in &practice.reactions {
        if !rule_ids.insert(rule.id.as_str()) {
            errors.push(ValidationError::DuplicateRuleId {
                practice: pid(),
                rule: rule.id.clone(),
            });
        }
        if rule.reactants.is_empty() {
            errors.push(ValidationError::EmptyReactants {
                practice: pid(),
                rule: rule.id.clone(),
            });
        }
        if rule.result.observation.trim().is_empty() {
            errors.push(ValidationError::EmptyObservation {
                practice: pid(),
                rule: rule.id.clone(),
            });
        }
        for id in &rule.reactants {
            unknown_item(format!("reaction '{}'", rule.id), id, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate every practice and check practice id uniqueness.
pub fn validate_practices(
    practices: &[Practice],
    items: &ItemTable,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for practice in practices {
        if !seen_ids.insert(practice.id.as_str()) {
            errors.push(ValidationError::DuplicatePracticeId(practice.id.clone()));
        }
        if let Err(mut practice_errors) = validate_practice(practice, items) {
            errors.append(&mut practice_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
