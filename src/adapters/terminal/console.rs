//! Plain-text console over the page flow controller.
//!
//! Stands in for the presentation layer: every command becomes a flow event
//! or navigation, and the outcome is written as short status lines.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use super::command::{Command, Fields};
use crate::application::{NavigationOutcome, PageFlowController, ResultsView};
use crate::domain::assessment::AssessmentForm;
use crate::domain::auth::{LoginForm, RegistrationForm};
use crate::domain::flow::{FlowError, FlowEvent, Page};
use crate::domain::prediction::{PredictionResult, EXPORT_FILE_NAME};

/// Whether the console should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Runs commands against a controller and writes what a page would show.
pub struct Console<W: Write> {
    flow: PageFlowController,
    out: W,
    show_notices: bool,
}

impl<W: Write> Console<W> {
    pub fn new(flow: PageFlowController, out: W, show_notices: bool) -> Self {
        Self {
            flow,
            out,
            show_notices,
        }
    }

    pub fn flow(&self) -> &PageFlowController {
        &self.flow
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Shows the current page. Used once at startup.
    pub fn greet(&mut self) -> io::Result<()> {
        self.render_page(self.flow.page())
    }

    /// Parses and runs one input line.
    pub async fn run_line(&mut self, line: &str) -> io::Result<Control> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Ok(Control::Continue),
            Err(e) => {
                writeln!(self.out, "error: {}", e)?;
                Ok(Control::Continue)
            }
        }
    }

    /// Runs one command.
    ///
    /// Flow errors are shown to the visitor; only output failures are
    /// returned.
    pub async fn execute(&mut self, command: Command) -> io::Result<Control> {
        debug!(command = command.name(), page = %self.flow.page(), "Console command");

        let result = match command {
            Command::Goto { path } => self.flow.navigate(&path).await,
            Command::GetStarted => self.flow.dispatch(FlowEvent::GetStarted).await,
            Command::SignIn => self.flow.dispatch(FlowEvent::SignIn).await,
            Command::Register { fields } => {
                let form = RegistrationForm::new(
                    field(&fields, "fullName"),
                    field(&fields, "email"),
                    field(&fields, "password"),
                    field(&fields, "confirmPassword"),
                );
                self.flow.dispatch(FlowEvent::SubmitRegistration(form)).await
            }
            Command::Login { fields } => {
                let form = LoginForm::new(field(&fields, "email"), field(&fields, "password"));
                self.flow.dispatch(FlowEvent::SubmitLogin(form)).await
            }
            Command::Begin => self.flow.dispatch(FlowEvent::BeginAssessment).await,
            Command::Logout => self.flow.dispatch(FlowEvent::Logout).await,
            Command::Submit { fields } => match assessment_form(&fields) {
                Ok(form) => self.flow.dispatch(FlowEvent::SubmitAssessment(form)).await,
                Err(e) => Err(e),
            },
            Command::Cancel => self.flow.dispatch(FlowEvent::CancelAssessment).await,
            Command::New => self.flow.dispatch(FlowEvent::TakeNewAssessment).await,
            Command::Home => self.flow.dispatch(FlowEvent::BackToHome).await,
            Command::Wait => {
                let view = self.flow.wait_for_results().await;
                self.render_results(&view)?;
                return Ok(Control::Continue);
            }
            Command::Export { file } => {
                self.export(file).await?;
                return Ok(Control::Continue);
            }
            Command::WhoAmI => {
                self.whoami()?;
                return Ok(Control::Continue);
            }
            Command::Help { command } => {
                writeln!(self.out, "{}", Command::help_text(command.as_deref()).trim_end())?;
                return Ok(Control::Continue);
            }
            Command::Quit => return Ok(Control::Quit),
        };

        match result {
            Ok(outcome) => self.render_outcome(&outcome)?,
            Err(e) => self.render_error(&e)?,
        }
        Ok(Control::Continue)
    }

    fn render_outcome(&mut self, outcome: &NavigationOutcome) -> io::Result<()> {
        if self.show_notices {
            if let Some(notice) = outcome.notice() {
                writeln!(self.out, "notice: {}", notice)?;
            }
        }
        self.render_page(outcome.page)
    }

    fn render_page(&mut self, page: Page) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", page, page.path())?;
        match page {
            Page::Home => {
                let name = self.flow.session().display_name().unwrap_or_default();
                writeln!(self.out, "Welcome back, {}!", name)?;
            }
            Page::Results => {
                let view = self.flow.results_view();
                self.render_results(&view)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn render_results(&mut self, view: &ResultsView) -> io::Result<()> {
        match view {
            ResultsView::Idle => writeln!(self.out, "No results to show."),
            ResultsView::Loading { .. } => writeln!(self.out, "Analyzing your health data..."),
            ResultsView::Ready(result) => self.render_prediction(result),
            ResultsView::Failed(e) => writeln!(self.out, "error [{}]: {}", e.code(), e),
        }
    }

    fn render_prediction(&mut self, result: &PredictionResult) -> io::Result<()> {
        writeln!(self.out, "Risk level: {}", result.risk)?;
        writeln!(self.out, "Confidence: {}", result.confidence)?;
        for (title, items) in [
            ("Recommendations", &result.recommendations),
            ("Precautions", &result.precautions),
            ("Lifestyle", &result.lifestyle),
        ] {
            writeln!(self.out, "{}:", title)?;
            for item in items {
                writeln!(self.out, "  - {}", item)?;
            }
        }
        Ok(())
    }

    fn render_error(&mut self, error: &FlowError) -> io::Result<()> {
        writeln!(self.out, "error [{}]: {}", error.code(), error)?;
        if let Some(invalid) = error.validation() {
            writeln!(self.out, "  field: {}", invalid.field())?;
        }
        Ok(())
    }

    async fn export(&mut self, path: Option<PathBuf>) -> io::Result<()> {
        let view = self.flow.results_view();
        let Some(result) = view.result() else {
            return writeln!(self.out, "error: no results to export");
        };

        let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
        let json = result
            .to_export_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        match tokio::fs::write(&path, json).await {
            Ok(()) => writeln!(self.out, "Saved results to {}", path.display()),
            Err(e) => writeln!(self.out, "error: could not write {}: {}", path.display(), e),
        }
    }

    fn whoami(&mut self) -> io::Result<()> {
        match self.flow.session().auth_state() {
            Ok(Some(state)) => writeln!(
                self.out,
                "Signed in as {} <{}>",
                state.display_name(),
                state.email()
            ),
            Ok(None) => writeln!(self.out, "Not signed in"),
            Err(e) => writeln!(self.out, "error: {}", e),
        }
    }
}

fn field(fields: &Fields, name: &str) -> String {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

fn assessment_form(fields: &Fields) -> Result<AssessmentForm, FlowError> {
    let mut form = AssessmentForm::default();
    for (name, value) in fields {
        form.set(name, value.as_str())?;
    }
    Ok(form)
}
