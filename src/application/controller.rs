//! Page Flow Controller.
//!
//! Owns the current page and drives it from two inputs: a typed path
//! (`navigate`) and a user action on the current page (`dispatch`). Every
//! arrival on a page runs that page's entry guards, and arriving on Results
//! starts a prediction task that is aborted as soon as the page is left.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use super::{ResultsView, SessionState};
use crate::domain::assessment::AssessmentAnswers;
use crate::domain::flow::{
    entry_guard, resolve, transition, FlowAction, FlowError, FlowEvent, GuardPolicy, Page,
    Redirect, RouteMatch, Transition,
};
use crate::domain::foundation::{PredictionRequestId, StateMachine};
use crate::ports::{PredictionProvider, PredictionRequest, SessionStore};

/// Where a navigation or event ended up, and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// The page now shown.
    pub page: Page,
    /// Guard redirects applied on the way, in order.
    pub redirects: Vec<Redirect>,
    /// The requested path matched no route.
    pub unknown_path: bool,
}

impl NavigationOutcome {
    pub fn redirected(&self) -> bool {
        self.unknown_path || !self.redirects.is_empty()
    }

    /// Notice explaining why the visitor is not where they asked to be.
    pub fn notice(&self) -> Option<&'static str> {
        if let Some(redirect) = self.redirects.last() {
            return Some(redirect.reason.notice());
        }
        self.unknown_path.then_some("That page does not exist.")
    }
}

/// Prediction running for the current Results visit.
struct PredictionTask {
    id: PredictionRequestId,
    handle: JoinHandle<()>,
    view: watch::Receiver<ResultsView>,
}

/// Drives the page flow over a session store and a prediction provider.
///
/// Must be used from within a tokio runtime: entering Results spawns a task.
pub struct PageFlowController {
    session: SessionState,
    provider: Arc<dyn PredictionProvider>,
    policy: GuardPolicy,
    page: Page,
    prediction: Option<PredictionTask>,
}

impl PageFlowController {
    /// Creates a controller on the Landing page.
    pub fn new(
        store: Arc<dyn SessionStore>,
        provider: Arc<dyn PredictionProvider>,
        policy: GuardPolicy,
    ) -> Self {
        Self {
            session: SessionState::new(store),
            provider,
            policy,
            page: Page::Landing,
            prediction: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Goes to the page served at `path`.
    ///
    /// Unknown paths land on Landing. Guard redirects are followed and
    /// reported in the outcome, never as errors.
    pub async fn navigate(&mut self, path: &str) -> Result<NavigationOutcome, FlowError> {
        let route = resolve(path);
        let unknown_path = route == RouteMatch::Fallback;
        if unknown_path {
            info!(path = %path, "Unknown path, falling back to landing page");
        }

        let (page, redirects) = self.enter(route.page())?;
        Ok(NavigationOutcome {
            page,
            redirects,
            unknown_path,
        })
    }

    /// Handles a user action on the current page.
    ///
    /// # Errors
    ///
    /// - `FlowError::Validation` when a submitted form is rejected
    /// - `FlowError::EventNotAllowed` when the event does not belong here
    /// - `FlowError::Store` when the session cannot be read or written
    ///
    /// On error the page does not change.
    pub async fn dispatch(&mut self, event: FlowEvent) -> Result<NavigationOutcome, FlowError> {
        let from = self.page;
        let Transition { action, to } = transition(from, &event).map_err(|e| {
            debug!(page = %from, event = event.name(), error = %e, "Event rejected");
            e
        })?;
        from.transition_to(to).map_err(FlowError::InvalidTransition)?;

        self.apply(action)?;
        info!(from = %from, event = event.name(), to = %to, "Flow event handled");

        let (page, redirects) = self.enter(to)?;
        Ok(NavigationOutcome {
            page,
            redirects,
            unknown_path: false,
        })
    }

    /// Current state of the Results page.
    pub fn results_view(&self) -> ResultsView {
        match &self.prediction {
            Some(task) => task.view.borrow().clone(),
            None => ResultsView::Idle,
        }
    }

    /// Waits until the running prediction settles and returns the view.
    ///
    /// Returns immediately when no prediction is running.
    pub async fn wait_for_results(&self) -> ResultsView {
        let Some(task) = &self.prediction else {
            return ResultsView::Idle;
        };

        let mut view = task.view.clone();
        loop {
            let current = view.borrow_and_update().clone();
            if !current.is_loading() {
                return current;
            }
            if view.changed().await.is_err() {
                // Task ended without publishing
                return view.borrow().clone();
            }
        }
    }

    fn apply(&self, action: FlowAction) -> Result<(), FlowError> {
        match action {
            FlowAction::None => {}
            FlowAction::WriteAuth(state) => self.session.save_auth_state(&state)?,
            FlowAction::ClearAuth => self.session.clear_auth_state()?,
            FlowAction::WriteAnswers(answers) => self.session.save_assessment(&answers)?,
            FlowAction::ClearAnswers => self.session.clear_assessment()?,
        }
        Ok(())
    }

    /// Arrives on `requested`, following entry guards until one lets the
    /// visitor stay.
    fn enter(&mut self, requested: Page) -> Result<(Page, Vec<Redirect>), FlowError> {
        self.cancel_prediction();

        let mut page = requested;
        let mut redirects = Vec::new();
        if requested.is_protected() {
            let snapshot = self.session.snapshot()?;
            while let Some(redirect) = entry_guard(page, snapshot, self.policy) {
                debug!(
                    from = %redirect.from,
                    to = %redirect.to,
                    reason = %redirect.reason,
                    "Entry guard redirect"
                );
                page = redirect.to;
                redirects.push(redirect);
            }
        }

        self.page = page;
        info!(page = %page, requested = %requested, "Page entered");

        if page == Page::Results {
            match self.session.assessment()? {
                Some(answers) => self.start_prediction(answers),
                None => warn!("Results entered without a readable assessment"),
            }
        }

        Ok((page, redirects))
    }

    fn start_prediction(&mut self, answers: AssessmentAnswers) {
        let request = PredictionRequest::new(answers);
        let id = request.id;
        let (tx, rx) = watch::channel(ResultsView::Loading { request_id: id });

        let provider = Arc::clone(&self.provider);
        let info = provider.provider_info();
        let span = info_span!(
            "prediction",
            request_id = %id,
            provider = %info.name,
            model = %info.model
        );

        let handle = tokio::spawn(
            async move {
                let view = match provider.generate(request).await {
                    Ok(result) => {
                        info!(risk = %result.risk, confidence = %result.confidence, "Prediction ready");
                        ResultsView::Ready(result)
                    }
                    Err(e) => {
                        warn!(error = %e, code = %e.code(), "Prediction failed");
                        ResultsView::Failed(e)
                    }
                };
                if tx.send(view).is_err() {
                    debug!("Results view closed before prediction finished");
                }
            }
            .instrument(span),
        );

        debug!(request_id = %id, "Prediction started");
        self.prediction = Some(PredictionTask {
            id,
            handle,
            view: rx,
        });
    }

    fn cancel_prediction(&mut self) {
        if let Some(task) = self.prediction.take() {
            if !task.handle.is_finished() {
                task.handle.abort();
                warn!(request_id = %task.id, "Prediction cancelled on page departure");
            }
        }
    }
}

impl Drop for PageFlowController {
    fn drop(&mut self) {
        if let Some(task) = self.prediction.take() {
            task.handle.abort();
        }
    }
}

impl std::fmt::Debug for PageFlowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFlowController")
            .field("page", &self.page)
            .field("policy", &self.policy)
            .field("prediction", &self.prediction.as_ref().map(|t| t.id))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, MockPredictionProvider};
    use crate::domain::assessment::fixtures::complete_form;
    use crate::domain::auth::{LoginForm, RegistrationForm};
    use crate::domain::flow::RedirectReason;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::session::SessionKey;
    use crate::ports::SessionStoreError;
    use std::time::Duration;

    fn controller_with(store: Arc<InMemorySessionStore>) -> PageFlowController {
        let provider = MockPredictionProvider::new().with_delay(Duration::ZERO);
        PageFlowController::new(store, Arc::new(provider), GuardPolicy::default())
    }

    fn controller() -> (PageFlowController, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        (controller_with(store.clone()), store)
    }

    #[tokio::test]
    async fn starts_on_landing() {
        let (flow, _) = controller();
        assert_eq!(flow.page(), Page::Landing);
        assert_eq!(flow.results_view(), ResultsView::Idle);
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_landing() {
        let (mut flow, _) = controller();
        flow.navigate("/login").await.unwrap();

        let outcome = flow.navigate("/nowhere").await.unwrap();

        assert_eq!(outcome.page, Page::Landing);
        assert!(outcome.unknown_path);
        assert_eq!(outcome.notice(), Some("That page does not exist."));
    }

    #[tokio::test]
    async fn home_without_login_redirects_to_login() {
        let (mut flow, _) = controller();

        let outcome = flow.navigate("/home").await.unwrap();

        assert_eq!(outcome.page, Page::Login);
        assert_eq!(outcome.redirects.len(), 1);
        assert_eq!(outcome.redirects[0].reason, RedirectReason::NotLoggedIn);
        assert_eq!(outcome.notice(), Some("Please log in to continue."));
    }

    #[tokio::test]
    async fn login_writes_flag_and_email_only() {
        let (mut flow, store) = controller();
        flow.dispatch(FlowEvent::SignIn).await.unwrap();

        let outcome = flow
            .dispatch(FlowEvent::SubmitLogin(LoginForm::new("bo@example.com", "pw")))
            .await
            .unwrap();

        assert_eq!(outcome.page, Page::Home);
        assert_eq!(store.get(SessionKey::IsLoggedIn).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(SessionKey::UserName).unwrap(), None);
        assert_eq!(flow.session().display_name().unwrap(), "bo");
    }

    #[tokio::test]
    async fn rejected_registration_stays_and_writes_nothing() {
        let (mut flow, store) = controller();
        flow.dispatch(FlowEvent::GetStarted).await.unwrap();

        let err = flow
            .dispatch(FlowEvent::SubmitRegistration(RegistrationForm::new(
                "Ana", "ana@example.com", "secret1", "secret2",
            )))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Mismatch);
        assert_eq!(flow.page(), Page::Register);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn event_from_wrong_page_is_rejected() {
        let (mut flow, _) = controller();

        let err = flow.dispatch(FlowEvent::Logout).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::EventNotAllowed);
        assert_eq!(flow.page(), Page::Landing);
    }

    #[tokio::test]
    async fn submitting_assessment_shows_results() {
        let store = Arc::new(
            InMemorySessionStore::new()
                .with_value(SessionKey::IsLoggedIn, "true")
                .with_value(SessionKey::UserEmail, "ana@example.com"),
        );
        let mut flow = controller_with(store);
        flow.navigate("/assessment").await.unwrap();

        let outcome = flow
            .dispatch(FlowEvent::SubmitAssessment(complete_form()))
            .await
            .unwrap();

        assert_eq!(outcome.page, Page::Results);
        let view = flow.wait_for_results().await;
        assert_eq!(view.result().unwrap().confidence.value(), 85);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_results_cancels_prediction() {
        let provider = Arc::new(MockPredictionProvider::new());
        let store = Arc::new(
            InMemorySessionStore::new()
                .with_value(SessionKey::IsLoggedIn, "true")
                .with_value(SessionKey::UserEmail, "ana@example.com"),
        );
        let mut flow = PageFlowController::new(store, provider.clone(), GuardPolicy::default());
        flow.navigate("/assessment").await.unwrap();
        flow.dispatch(FlowEvent::SubmitAssessment(complete_form()))
            .await
            .unwrap();
        assert!(flow.results_view().is_loading());

        flow.dispatch(FlowEvent::BackToHome).await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(flow.page(), Page::Home);
        assert_eq!(flow.results_view(), ResultsView::Idle);
        assert_eq!(provider.call_count(), 1);
    }

    /// Store whose every call fails, like an unreachable profile directory.
    struct UnreachableStore;

    impl SessionStore for UnreachableStore {
        fn get(&self, _key: SessionKey) -> Result<Option<String>, SessionStoreError> {
            Err(SessionStoreError::io("profile directory is gone"))
        }

        fn set(&self, _key: SessionKey, _value: &str) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::io("profile directory is gone"))
        }

        fn remove(&self, _key: SessionKey) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::io("profile directory is gone"))
        }
    }

    #[tokio::test]
    async fn public_pages_do_not_read_the_store() {
        let provider = MockPredictionProvider::new().with_delay(Duration::ZERO);
        let mut flow = PageFlowController::new(
            Arc::new(UnreachableStore),
            Arc::new(provider),
            GuardPolicy::default(),
        );

        assert_eq!(flow.navigate("/").await.unwrap().page, Page::Landing);
        assert!(flow.navigate("/nowhere").await.unwrap().unknown_path);
        assert_eq!(flow.dispatch(FlowEvent::SignIn).await.unwrap().page, Page::Login);

        let err = flow.navigate("/home").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::SessionStoreUnavailable);
        assert_eq!(flow.page(), Page::Login);
    }

    #[tokio::test]
    async fn debug_output_omits_session_internals() {
        let (flow, _) = controller();
        let rendered = format!("{:?}", flow);
        assert!(rendered.contains("Landing"));
    }
}
