//! Submitted security-question answers and their shape check.
//!
//! The accepted shape is fixed: a JSON array whose items are objects with
//! exactly one string property, `answer`. Every violation is reported with a
//! JSON pointer to the offending value so clients can fix the whole payload in
//! one round trip.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::domain::SecurityQuestion;

const ANSWER_FIELD: &str = "answer";

/// Shape rule that a submitted value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKeyword {
    /// Value has the wrong JSON type.
    Type,
    /// An item is missing `answer`.
    Required,
    /// An item carries a property other than `answer`.
    AdditionalProperties,
}

/// One shape violation.
///
/// Serialises as
/// `{"instancePath":"/0","schemaPath":"#/items/required","keyword":"required",
/// "params":{"missingProperty":"answer"},"message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeViolation {
    instance_path: String,
    schema_path: &'static str,
    keyword: ShapeKeyword,
    params: Value,
    message: String,
}

impl ShapeViolation {
    fn wrong_type(instance_path: String, schema_path: &'static str, expected: &str) -> Self {
        Self {
            instance_path,
            schema_path,
            keyword: ShapeKeyword::Type,
            params: json!({ "type": expected }),
            message: format!("must be {expected}"),
        }
    }

    fn missing_answer(instance_path: String) -> Self {
        Self {
            instance_path,
            schema_path: "#/items/required",
            keyword: ShapeKeyword::Required,
            params: json!({ "missingProperty": ANSWER_FIELD }),
            message: format!("must have required property '{ANSWER_FIELD}'"),
        }
    }

    fn extra_property(instance_path: String, property: &str) -> Self {
        Self {
            instance_path,
            schema_path: "#/items/additionalProperties",
            keyword: ShapeKeyword::AdditionalProperties,
            params: json!({ "additionalProperty": property }),
            message: "must NOT have additional properties".to_owned(),
        }
    }

    /// JSON pointer to the offending value (`""` for the root).
    pub fn instance_path(&self) -> &str {
        self.instance_path.as_str()
    }

    /// Rule that was broken.
    pub fn keyword(&self) -> ShapeKeyword {
        self.keyword
    }
}

/// Ordered answers that passed the shape check.
///
/// # Examples
/// ```
/// use in_n_out_books::domain::SecurityAnswers;
/// use serde_json::json;
///
/// let answers = SecurityAnswers::from_json(&json!([{ "answer": "Hedwig" }]))
///     .expect("valid shape");
/// assert_eq!(answers.len(), 1);
///
/// let violations = SecurityAnswers::from_json(&json!([{ "ans": "x" }]))
///     .expect_err("wrong key");
/// assert_eq!(violations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityAnswers(Vec<String>);

impl SecurityAnswers {
    /// Check `value` against the answer shape.
    pub fn from_json(value: &Value) -> Result<Self, Vec<ShapeViolation>> {
        let Some(items) = value.as_array() else {
            return Err(vec![ShapeViolation::wrong_type(
                String::new(),
                "#/type",
                "array",
            )]);
        };

        let mut answers = Vec::with_capacity(items.len());
        let mut violations = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match check_item(index, item) {
                Ok(answer) => answers.push(answer),
                Err(mut found) => violations.append(&mut found),
            }
        }

        if violations.is_empty() {
            Ok(Self(answers))
        } else {
            Err(violations)
        }
    }

    /// Number of submitted answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no answers were submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positional, case-sensitive comparison against stored questions.
    ///
    /// A different number of answers never matches.
    pub fn matches(&self, stored: &[SecurityQuestion]) -> bool {
        self.0.len() == stored.len()
            && self
                .0
                .iter()
                .zip(stored)
                .all(|(given, expected)| given.as_str() == expected.answer())
    }
}

fn check_item(index: usize, item: &Value) -> Result<String, Vec<ShapeViolation>> {
    let path = format!("/{index}");
    let Some(object) = item.as_object() else {
        return Err(vec![ShapeViolation::wrong_type(
            path,
            "#/items/type",
            "object",
        )]);
    };

    let mut violations = Vec::new();
    let answer = match object.get(ANSWER_FIELD) {
        None => {
            violations.push(ShapeViolation::missing_answer(path.clone()));
            None
        }
        Some(Value::String(answer)) => Some(answer.clone()),
        Some(_) => {
            violations.push(ShapeViolation::wrong_type(
                format!("{path}/{ANSWER_FIELD}"),
                "#/items/properties/answer/type",
                "string",
            ));
            None
        }
    };
    violations.extend(extra_properties(&path, object));

    match answer {
        Some(answer) if violations.is_empty() => Ok(answer),
        _ => Err(violations),
    }
}

fn extra_properties(path: &str, object: &Map<String, Value>) -> Vec<ShapeViolation> {
    object
        .keys()
        .filter(|key| key.as_str() != ANSWER_FIELD)
        .map(|key| ShapeViolation::extra_property(path.to_owned(), key))
        .collect()
}

#[cfg(test)]
mod tests {
    //! Shape check and comparison coverage.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> Vec<SecurityQuestion> {
        vec![
            SecurityQuestion::new("correct-answer-1"),
            SecurityQuestion::new("correct-answer-2"),
        ]
    }

    #[rstest]
    fn accepts_well_formed_answers() {
        let answers = SecurityAnswers::from_json(&json!([
            { "answer": "correct-answer-1" },
            { "answer": "correct-answer-2" }
        ]))
        .expect("valid shape");
        assert_eq!(answers.len(), 2);
    }

    #[rstest]
    fn empty_array_is_well_formed() {
        let answers = SecurityAnswers::from_json(&json!([])).expect("valid shape");
        assert!(answers.is_empty());
    }

    #[rstest]
    #[case(json!({ "answer": "x" }), "", ShapeKeyword::Type)]
    #[case(json!("answer"), "", ShapeKeyword::Type)]
    #[case(json!(["x"]), "/0", ShapeKeyword::Type)]
    #[case(json!([{ "answer": 1 }]), "/0/answer", ShapeKeyword::Type)]
    #[case(json!([{ "answer": "a" }, {}]), "/1", ShapeKeyword::Required)]
    #[case(
        json!([{ "answer": "a", "question": "q" }]),
        "/0",
        ShapeKeyword::AdditionalProperties
    )]
    fn reports_single_violation(
        #[case] body: Value,
        #[case] path: &str,
        #[case] keyword: ShapeKeyword,
    ) {
        let violations = SecurityAnswers::from_json(&body).expect_err("invalid shape");
        assert_eq!(violations.len(), 1);
        let violation = violations.first().expect("one violation");
        assert_eq!(violation.instance_path(), path);
        assert_eq!(violation.keyword(), keyword);
    }

    #[rstest]
    fn wrong_key_reports_missing_and_extra() {
        let violations =
            SecurityAnswers::from_json(&json!([{ "ans": "incorrect-key" }])).expect_err("invalid");
        let keywords: Vec<ShapeKeyword> = violations.iter().map(ShapeViolation::keyword).collect();
        assert_eq!(
            keywords,
            [ShapeKeyword::Required, ShapeKeyword::AdditionalProperties]
        );
    }

    #[rstest]
    fn violation_serialises_with_pointer_and_params() {
        let violations =
            SecurityAnswers::from_json(&json!([{ "ans": "x" }])).expect_err("invalid shape");
        let value = serde_json::to_value(&violations).expect("serialise");
        assert_eq!(
            value.get(0),
            Some(&json!({
                "instancePath": "/0",
                "schemaPath": "#/items/required",
                "keyword": "required",
                "params": { "missingProperty": "answer" },
                "message": "must have required property 'answer'"
            }))
        );
    }

    #[rstest]
    #[case(json!([{ "answer": "correct-answer-1" }, { "answer": "correct-answer-2" }]), true)]
    #[case(json!([{ "answer": "correct-answer-2" }, { "answer": "correct-answer-1" }]), false)]
    #[case(json!([{ "answer": "Correct-Answer-1" }, { "answer": "correct-answer-2" }]), false)]
    #[case(json!([{ "answer": "correct-answer-1" }]), false)]
    #[case(
        json!([
            { "answer": "correct-answer-1" },
            { "answer": "correct-answer-2" },
            { "answer": "extra" }
        ]),
        false
    )]
    fn matches_positionally(
        stored: Vec<SecurityQuestion>,
        #[case] body: Value,
        #[case] expected: bool,
    ) {
        let answers = SecurityAnswers::from_json(&body).expect("valid shape");
        assert_eq!(answers.matches(&stored), expected);
    }
}
