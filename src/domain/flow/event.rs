//! User-driven events the page flow reacts to.

use crate::domain::assessment::AssessmentForm;
use crate::domain::auth::{LoginForm, RegistrationForm};

/// Something the visitor did on the current page.
#[derive(Debug)]
pub enum FlowEvent {
    /// Landing: "Get Started".
    GetStarted,
    /// Landing: "Sign In".
    SignIn,
    SubmitRegistration(RegistrationForm),
    SubmitLogin(LoginForm),
    /// Home: "Begin Assessment".
    BeginAssessment,
    Logout,
    SubmitAssessment(AssessmentForm),
    /// Assessment: "Cancel" / back.
    CancelAssessment,
    /// Results: "Take New Assessment".
    TakeNewAssessment,
    /// Results: "Back to Home".
    BackToHome,
}

impl FlowEvent {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::GetStarted => "get_started",
            FlowEvent::SignIn => "sign_in",
            FlowEvent::SubmitRegistration(_) => "submit_registration",
            FlowEvent::SubmitLogin(_) => "submit_login",
            FlowEvent::BeginAssessment => "begin_assessment",
            FlowEvent::Logout => "logout",
            FlowEvent::SubmitAssessment(_) => "submit_assessment",
            FlowEvent::CancelAssessment => "cancel_assessment",
            FlowEvent::TakeNewAssessment => "take_new_assessment",
            FlowEvent::BackToHome => "back_to_home",
        }
    }
}
