//! Assessment module - the thirteen-field clinical questionnaire.
//!
//! - `answers` - raw form, validated answers, typed clinical profile
//! - `codes` - enumerated option codes for select inputs
//! - `ranges` - min/max/step limits for numeric inputs

mod answers;
mod codes;
mod macros;
pub mod ranges;

pub use answers::{AnswersDecodeError, AssessmentAnswers, AssessmentForm, ClinicalProfile};
pub use codes::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, Gender, MajorVessels, RestingEcg, StSlope,
    Thallium,
};

#[cfg(test)]
pub(crate) use answers::fixtures;
