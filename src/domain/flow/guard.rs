//! Entry guards: what must be in the session before a page may be shown.

use std::fmt;

use super::Page;

/// The parts of session state the guards look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub logged_in: bool,
    /// A readable assessment is stored. Corrupt data counts as absent.
    pub has_assessment: bool,
}

/// Tunable guard behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardPolicy {
    /// Gate the Assessment page on the login flag like Home and Results.
    pub require_login_for_assessment: bool,
}

/// Why the visitor was sent somewhere other than where they asked to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    NotLoggedIn,
    NoAssessment,
}

impl RedirectReason {
    /// Notice a presentation layer may show instead of redirecting silently.
    pub fn notice(&self) -> &'static str {
        match self {
            RedirectReason::NotLoggedIn => "Please log in to continue.",
            RedirectReason::NoAssessment => "Please complete the assessment first.",
        }
    }
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RedirectReason::NotLoggedIn => "not_logged_in",
            RedirectReason::NoAssessment => "no_assessment",
        };
        write!(f, "{}", s)
    }
}

/// A guard decision to send the visitor elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub from: Page,
    pub to: Page,
    pub reason: RedirectReason,
}

/// Checks `page`'s entry preconditions against the session.
///
/// Returns `None` when the visitor may stay on `page`.
pub fn entry_guard(page: Page, session: SessionSnapshot, policy: GuardPolicy) -> Option<Redirect> {
    let redirect = |to, reason| Some(Redirect { from: page, to, reason });

    match page {
        Page::Home if !session.logged_in => redirect(Page::Login, RedirectReason::NotLoggedIn),
        Page::Assessment if policy.require_login_for_assessment && !session.logged_in => {
            redirect(Page::Login, RedirectReason::NotLoggedIn)
        }
        Page::Results if !session.logged_in => redirect(Page::Login, RedirectReason::NotLoggedIn),
        Page::Results if !session.has_assessment => {
            redirect(Page::Assessment, RedirectReason::NoAssessment)
        }
        _ => None,
    }
}
