//! The pages a visitor can be on.

use std::fmt;

use crate::domain::foundation::StateMachine;

/// A page of the application.
///
/// `Landing` is the initial page. No page is terminal: the flow loops for as
/// long as the session lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Register,
    Home,
    Assessment,
    Results,
}

impl Page {
    /// Every page, in route table order.
    pub const ALL: [Page; 6] = [
        Page::Landing,
        Page::Login,
        Page::Register,
        Page::Home,
        Page::Assessment,
        Page::Results,
    ];

    /// The path this page is served at.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Home => "/home",
            Page::Assessment => "/assessment",
            Page::Results => "/results",
        }
    }

    /// Returns true for pages whose entry guard may read session state.
    ///
    /// Public pages are entered without touching the store.
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Home | Page::Assessment | Page::Results)
    }
}

/// Moves the flow itself can make, by event or by entry redirect.
///
/// Typing a path is not constrained by this: any page can be requested
/// directly and is then subject to its entry guard.
impl StateMachine for Page {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Page::*;
        match self {
            Landing => vec![Register, Login],
            Login => vec![Home],
            Register => vec![Home],
            Home => vec![Login, Assessment, Landing],
            Assessment => vec![Login, Results, Home],
            Results => vec![Login, Assessment, Home],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Page::Landing => "Landing",
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Home => "Home",
            Page::Assessment => "Assessment",
            Page::Results => "Results",
        };
        write!(f, "{}", s)
    }
}
