//! The assessment form and its validated answers.
//!
//! `AssessmentForm` is exactly what the form collects: thirteen strings.
//! `AssessmentAnswers` is a form that passed validation; it keeps the raw
//! strings for storage (stored verbatim, string for string) next to a typed
//! [`ClinicalProfile`] decoded from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::codes::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, Gender, MajorVessels, RestingEcg, StSlope,
    Thallium,
};
use super::ranges::{AGE, BLOOD_PRESSURE, CHOLESTEROL, MAX_HEART_RATE, ST_DEPRESSION};
use crate::domain::foundation::ValidationError;

/// Raw assessment form values, keyed by their storage names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssessmentForm {
    pub age: String,
    pub gender: String,
    pub chest_pain_type: String,
    pub blood_pressure: String,
    pub cholesterol: String,
    pub fasting_blood_sugar: String,
    #[serde(rename = "restingECG")]
    pub resting_ecg: String,
    pub max_heart_rate: String,
    pub exercise_angina: String,
    pub st_depression: String,
    pub st_slope: String,
    pub major_vessels: String,
    pub thallium: String,
}

impl AssessmentForm {
    /// Storage names of all thirteen fields, in form order.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "age",
        "gender",
        "chestPainType",
        "bloodPressure",
        "cholesterol",
        "fastingBloodSugar",
        "restingECG",
        "maxHeartRate",
        "exerciseAngina",
        "stDepression",
        "stSlope",
        "majorVessels",
        "thallium",
    ];

    /// Sets a field by its storage name.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        *self.slot_mut(field)? = value.into();
        Ok(())
    }

    /// Reads a field by its storage name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "age" => &self.age,
            "gender" => &self.gender,
            "chestPainType" => &self.chest_pain_type,
            "bloodPressure" => &self.blood_pressure,
            "cholesterol" => &self.cholesterol,
            "fastingBloodSugar" => &self.fasting_blood_sugar,
            "restingECG" => &self.resting_ecg,
            "maxHeartRate" => &self.max_heart_rate,
            "exerciseAngina" => &self.exercise_angina,
            "stDepression" => &self.st_depression,
            "stSlope" => &self.st_slope,
            "majorVessels" => &self.major_vessels,
            "thallium" => &self.thallium,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn slot_mut(&mut self, field: &str) -> Result<&mut String, ValidationError> {
        Ok(match field {
            "age" => &mut self.age,
            "gender" => &mut self.gender,
            "chestPainType" => &mut self.chest_pain_type,
            "bloodPressure" => &mut self.blood_pressure,
            "cholesterol" => &mut self.cholesterol,
            "fastingBloodSugar" => &mut self.fasting_blood_sugar,
            "restingECG" => &mut self.resting_ecg,
            "maxHeartRate" => &mut self.max_heart_rate,
            "exerciseAngina" => &mut self.exercise_angina,
            "stDepression" => &mut self.st_depression,
            "stSlope" => &mut self.st_slope,
            "majorVessels" => &mut self.major_vessels,
            "thallium" => &mut self.thallium,
            other => {
                return Err(ValidationError::invalid_format(
                    "assessment",
                    format!("unknown field '{}'", other),
                ))
            }
        })
    }
}

/// Typed view of a validated assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalProfile {
    pub age: u16,
    pub gender: Gender,
    pub chest_pain_type: ChestPainType,
    pub resting_blood_pressure: u16,
    pub cholesterol: u16,
    pub fasting_blood_sugar: FastingBloodSugar,
    pub resting_ecg: RestingEcg,
    pub max_heart_rate: u16,
    pub exercise_angina: ExerciseAngina,
    pub st_depression: f64,
    pub st_slope: StSlope,
    pub major_vessels: MajorVessels,
    pub thallium: Thallium,
}

/// A complete, validated assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentAnswers {
    form: AssessmentForm,
    profile: ClinicalProfile,
}

/// Why stored assessment data could not be read back.
#[derive(Debug, Error)]
pub enum AnswersDecodeError {
    #[error("Stored assessment is not valid JSON for the form: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Stored assessment failed validation: {0}")]
    Invalid(#[from] ValidationError),
}

impl AssessmentAnswers {
    /// Validates a submitted form.
    ///
    /// # Errors
    ///
    /// Returns the first failing field in form order: blank fields as
    /// `EmptyField`, unknown option codes and non-numbers as `InvalidFormat`,
    /// numbers outside the input limits as `OutOfRange`.
    pub fn from_form(form: AssessmentForm) -> Result<Self, ValidationError> {
        for name in AssessmentForm::FIELD_NAMES {
            if form.get(name).map_or(true, |v| v.trim().is_empty()) {
                return Err(ValidationError::empty_field(name));
            }
        }

        let profile = ClinicalProfile {
            age: AGE.check_whole(&form.age)?,
            gender: Gender::from_code(&form.gender)?,
            chest_pain_type: ChestPainType::from_code(&form.chest_pain_type)?,
            resting_blood_pressure: BLOOD_PRESSURE.check_whole(&form.blood_pressure)?,
            cholesterol: CHOLESTEROL.check_whole(&form.cholesterol)?,
            fasting_blood_sugar: FastingBloodSugar::from_code(&form.fasting_blood_sugar)?,
            resting_ecg: RestingEcg::from_code(&form.resting_ecg)?,
            max_heart_rate: MAX_HEART_RATE.check_whole(&form.max_heart_rate)?,
            exercise_angina: ExerciseAngina::from_code(&form.exercise_angina)?,
            st_depression: ST_DEPRESSION.check(&form.st_depression)?,
            st_slope: StSlope::from_code(&form.st_slope)?,
            major_vessels: MajorVessels::from_code(&form.major_vessels)?,
            thallium: Thallium::from_code(&form.thallium)?,
        };

        Ok(Self { form, profile })
    }

    /// Decodes answers from their stored JSON form, re-validating them.
    pub fn from_json(json: &str) -> Result<Self, AnswersDecodeError> {
        let form: AssessmentForm = serde_json::from_str(json)?;
        Ok(Self::from_form(form)?)
    }

    /// Encodes the raw answers for storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.form)
    }

    /// The answers exactly as submitted.
    pub fn form(&self) -> &AssessmentForm {
        &self.form
    }

    pub fn profile(&self) -> &ClinicalProfile {
        &self.profile
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::complete_form;
    use super::*;

    #[test]
    fn complete_form_validates_into_typed_profile() {
        let answers = AssessmentAnswers::from_form(complete_form()).unwrap();
        let profile = answers.profile();
        assert_eq!(profile.age, 54);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.chest_pain_type, ChestPainType::NonAnginalPain);
        assert_eq!(profile.resting_ecg, RestingEcg::LeftVentricularHypertrophy);
        assert_eq!(profile.thallium, Thallium::Normal);
        assert!((profile.st_depression - 1.4).abs() < 1e-12);
    }

    #[test]
    fn blank_field_is_reported_by_storage_name() {
        let mut form = complete_form();
        form.resting_ecg = String::new();
        let err = AssessmentAnswers::from_form(form).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("restingECG"));
    }

    #[test]
    fn first_blank_field_wins() {
        let form = AssessmentForm::default();
        let err = AssessmentAnswers::from_form(form).unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let mut form = complete_form();
        form.thallium = "5".to_string();
        let err = AssessmentAnswers::from_form(form).unwrap_err();
        assert_eq!(err.field(), "thallium");
    }

    #[test]
    fn json_uses_exact_storage_keys_in_form_order() {
        let answers = AssessmentAnswers::from_form(complete_form()).unwrap();
        let json = answers.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"age":"54","gender":"1","chestPainType":"3","bloodPressure":"130","cholesterol":"246","fastingBloodSugar":"0","restingECG":"2","maxHeartRate":"150","exerciseAngina":"0","stDepression":"1.4","stSlope":"2","majorVessels":"0","thallium":"3"}"#
        );
    }

    #[test]
    fn raw_strings_are_kept_verbatim() {
        let mut form = complete_form();
        form.st_depression = "1.40".to_string();
        let answers = AssessmentAnswers::from_form(form).unwrap();
        assert_eq!(answers.form().st_depression, "1.40");
        let decoded = AssessmentAnswers::from_json(&answers.to_json().unwrap()).unwrap();
        assert_eq!(decoded.form().st_depression, "1.40");
    }

    #[test]
    fn from_json_rejects_missing_and_extra_keys() {
        assert!(matches!(
            AssessmentAnswers::from_json(r#"{"age":"54"}"#),
            Err(AnswersDecodeError::Malformed(_))
        ));

        let mut value = serde_json::to_value(complete_form()).unwrap();
        value["extra"] = serde_json::json!("1");
        assert!(AssessmentAnswers::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn from_json_rejects_non_string_values() {
        let mut value = serde_json::to_value(complete_form()).unwrap();
        value["age"] = serde_json::json!(54);
        assert!(AssessmentAnswers::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn from_json_revalidates_values() {
        let mut form = complete_form();
        form.cholesterol = "9000".to_string();
        let json = serde_json::to_string(&form).unwrap();
        assert!(matches!(
            AssessmentAnswers::from_json(&json),
            Err(AnswersDecodeError::Invalid(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn set_and_get_by_storage_name() {
        let mut form = AssessmentForm::default();
        form.set("maxHeartRate", "171").unwrap();
        assert_eq!(form.get("maxHeartRate"), Some("171"));
        assert_eq!(form.max_heart_rate, "171");
        assert!(form.set("heartRate", "1").is_err());
        assert_eq!(form.get("heartRate"), None);
    }
}
