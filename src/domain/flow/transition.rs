//! The transition table: (page, event) → (session action, next page).
//!
//! Entry guards of the destination page are not applied here; see
//! [`entry_guard`](super::entry_guard).

use super::{FlowError, FlowEvent, Page};
use crate::domain::assessment::AssessmentAnswers;
use crate::domain::auth::AuthState;

/// Session write performed when a transition is taken.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowAction {
    None,
    WriteAuth(AuthState),
    ClearAuth,
    WriteAnswers(AssessmentAnswers),
    ClearAnswers,
}

/// A transition chosen from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub action: FlowAction,
    pub to: Page,
}

impl Transition {
    fn to(page: Page) -> Self {
        Self {
            action: FlowAction::None,
            to: page,
        }
    }

    fn with(action: FlowAction, page: Page) -> Self {
        Self { action, to: page }
    }
}

/// Looks up the transition for `event` on `page`.
///
/// Form events validate their payload first; a failed guard leaves the
/// visitor where they are and writes nothing.
///
/// # Errors
///
/// - `FlowError::Validation` when a submitted form is rejected
/// - `FlowError::EventNotAllowed` when `event` does not belong to `page`
pub fn transition(page: Page, event: &FlowEvent) -> Result<Transition, FlowError> {
    use FlowEvent::*;

    let transition = match (page, event) {
        (Page::Landing, GetStarted) => Transition::to(Page::Register),
        (Page::Landing, SignIn) => Transition::to(Page::Login),

        (Page::Register, SubmitRegistration(form)) => {
            Transition::with(FlowAction::WriteAuth(form.validate()?), Page::Home)
        }
        (Page::Login, SubmitLogin(form)) => {
            Transition::with(FlowAction::WriteAuth(form.validate()?), Page::Home)
        }

        (Page::Home, BeginAssessment) => Transition::to(Page::Assessment),
        (Page::Home, Logout) => Transition::with(FlowAction::ClearAuth, Page::Landing),

        (Page::Assessment, SubmitAssessment(form)) => {
            let answers = AssessmentAnswers::from_form(form.clone())?;
            Transition::with(FlowAction::WriteAnswers(answers), Page::Results)
        }
        (Page::Assessment, CancelAssessment) => Transition::to(Page::Home),

        (Page::Results, TakeNewAssessment) => {
            Transition::with(FlowAction::ClearAnswers, Page::Assessment)
        }
        (Page::Results, BackToHome) => Transition::to(Page::Home),

        (page, event) => return Err(FlowError::event_not_allowed(page, event.name())),
    };

    Ok(transition)
}
