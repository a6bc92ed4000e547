//! State of one upload-to-result cycle.
//!
//! The session is generic over the file handle `F` and the preview reference
//! `P` so it can be driven by browser objects in the client and by plain
//! values in tests. Dropping a `P` is what releases a preview.

use crate::api::Prediction;
use crate::display::{Outcome, ResultView};
use crate::error::AnalysisError;
use crate::mime::ImageMime;

/// Identifies one prediction call. Only the ticket of the outstanding call
/// can resolve the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Selection<F, P> {
    file: F,
    preview: P,
    mime: ImageMime,
}

impl<F, P> Selection<F, P> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Submitting(Ticket),
    Succeeded(Prediction),
    Failed(AnalysisError),
}

/// Handed out when a submission starts.
#[derive(Debug)]
pub struct Submission<F> {
    pub ticket: Ticket,
    pub file: F,
}

#[derive(Debug)]
pub struct AnalysisSession<F, P> {
    selection: Option<Selection<F, P>>,
    phase: Phase,
    next_ticket: u64,
}

impl<F, P> Default for AnalysisSession<F, P> {
    fn default() -> Self {
        Self {
            selection: None,
            phase: Phase::Idle,
            next_ticket: 0,
        }
    }
}

impl<F, P> AnalysisSession<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a file from any intake source.
    ///
    /// Any stale result or error is cleared first and an outstanding call is
    /// orphaned. An unsupported type records the validation error and keeps
    /// the previous selection. Otherwise the previous preview is dropped
    /// before `make_preview` creates the new one.
    pub fn select<M>(&mut self, file: F, declared_mime: &str, make_preview: M) -> Result<(), AnalysisError>
    where
        M: FnOnce(&F) -> P,
    {
        self.phase = Phase::Idle;

        let Some(mime) = ImageMime::parse(declared_mime) else {
            log::info!("Rejected file with unsupported type {declared_mime:?}");
            let err = AnalysisError::UnsupportedType {
                mime: declared_mime.to_string(),
            };
            self.phase = Phase::Failed(err.clone());
            return Err(err);
        };

        self.selection = None;
        let preview = make_preview(&file);
        self.selection = Some(Selection { file, preview, mime });
        log::debug!("Selected {mime:?} image");
        Ok(())
    }

    /// Drops the selection, its preview and any outcome.
    pub fn discard(&mut self) {
        self.selection = None;
        self.phase = Phase::Idle;
        log::debug!("Session reset");
    }

    /// Starts a submission. Returns `None` without a selection or while a
    /// call is already outstanding.
    pub fn begin_submit(&mut self) -> Option<Submission<F>>
    where
        F: Clone,
    {
        if self.is_submitting() {
            return None;
        }
        let file = self.selection.as_ref()?.file.clone();

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = Phase::Submitting(ticket);
        log::info!("Submitting image for analysis ({ticket:?})");
        Some(Submission { ticket, file })
    }

    /// Applies the outcome of the call identified by `ticket`. Outcomes of
    /// superseded calls are ignored and `false` is returned.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<Prediction, AnalysisError>) -> bool {
        if self.phase != Phase::Submitting(ticket) {
            log::debug!("Ignoring stale outcome for {ticket:?}");
            return false;
        }

        self.phase = match outcome {
            Ok(prediction) => {
                log::info!(
                    "Prediction {:?} at {}",
                    prediction.label,
                    prediction.confidence
                );
                Phase::Succeeded(prediction)
            }
            Err(err) => {
                log::warn!("Analysis failed: {err:?}");
                Phase::Failed(err)
            }
        };
        true
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selection(&self) -> Option<&Selection<F, P>> {
        self.selection.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_submitting()
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        match self.phase {
            Phase::Submitting(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.phase {
            Phase::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn view(&self) -> Outcome {
        match &self.phase {
            Phase::Succeeded(prediction) => Outcome::Result(ResultView::from(prediction)),
            Phase::Failed(err) => Outcome::Error(err.to_string()),
            Phase::Idle | Phase::Submitting(_) => Outcome::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::api::interpret_response;

    /// Preview double that tracks how many previews are alive.
    #[derive(Debug)]
    struct Preview {
        live: Rc<Cell<usize>>,
    }

    impl Preview {
        fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self { live: Rc::clone(live) }
        }
    }

    impl Drop for Preview {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    type Session = AnalysisSession<&'static str, Preview>;

    fn session_with(file: &'static str, live: &Rc<Cell<usize>>) -> Session {
        let mut session = Session::new();
        session
            .select(file, "image/png", |_| Preview::new(live))
            .unwrap();
        session
    }

    fn glioma() -> Result<Prediction, AnalysisError> {
        interpret_response(200, r#"{"predicted_label":"glioma","confidence":94}"#)
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(session.selection().is_none());
        assert!(!session.is_submitting());
        assert!(!session.can_submit());
        assert_eq!(session.view(), Outcome::Nothing);
    }

    #[test]
    fn non_image_type_is_rejected_without_preview() {
        let live = Rc::new(Cell::new(0));
        let mut session = Session::new();

        let err = session
            .select("notes.pdf", "application/pdf", |_| Preview::new(&live))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(live.get(), 0);
        assert!(session.selection().is_none());
        assert_eq!(
            session.view(),
            Outcome::Error("Please upload a valid image (JPG, JPEG, PNG)".into())
        );
    }

    #[test]
    fn rejected_type_keeps_previous_selection_but_clears_result() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);
        let submission = session.begin_submit().unwrap();
        session.resolve(submission.ticket, glioma());

        assert!(session.select("clip.gif", "image/gif", |_| Preview::new(&live)).is_err());

        assert_eq!(session.selection().map(|s| *s.file()), Some("scan.png"));
        assert_eq!(live.get(), 1);
        assert!(session.prediction().is_none());
        assert!(session.error().is_some());
    }

    #[test]
    fn accepted_type_creates_exactly_one_preview() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("a.png", &live);
        assert_eq!(live.get(), 1);

        session
            .select("b.jpg", "image/jpeg", |_| Preview::new(&live))
            .unwrap();
        assert_eq!(live.get(), 1);
        let selection = session.selection().unwrap();
        assert_eq!(*selection.file(), "b.jpg");
        assert_eq!(selection.mime(), ImageMime::Jpeg);
    }

    #[test]
    fn superseded_preview_is_released_before_the_new_one_exists() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("a.png", &live);

        session
            .select("a.png", "image/png", |_| {
                assert_eq!(live.get(), 0, "old preview still alive");
                Preview::new(&live)
            })
            .unwrap();
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn accepted_type_clears_prior_error() {
        let live = Rc::new(Cell::new(0));
        let mut session = Session::new();
        let _ = session.select("x.txt", "text/plain", |_| Preview::new(&live));
        assert!(session.error().is_some());

        session
            .select("scan.png", "image/png", |_| Preview::new(&live))
            .unwrap();
        assert!(session.error().is_none());
        assert_eq!(session.view(), Outcome::Nothing);
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut session = Session::new();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.phase(), &Phase::Idle);
    }

    #[test]
    fn submit_is_blocked_while_a_call_is_outstanding() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);

        let first = session.begin_submit().unwrap();
        assert_eq!(first.file, "scan.png");
        assert!(session.is_submitting());
        assert!(!session.can_submit());
        assert!(session.begin_submit().is_none());
        assert_eq!(session.pending_ticket(), Some(first.ticket));

        assert!(session.resolve(first.ticket, glioma()));
        assert!(!session.is_submitting());
        assert!(session.can_submit());
    }

    #[test]
    fn success_shows_label_and_percent() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);
        let submission = session.begin_submit().unwrap();
        session.resolve(submission.ticket, glioma());

        assert!(session.error().is_none());
        assert_eq!(session.prediction().map(|p| p.label.as_str()), Some("glioma"));
        match session.view() {
            Outcome::Result(view) => {
                assert_eq!(view.label, "Glioma");
                assert_eq!(view.confidence_text, "94%");
            }
            other => panic!("expected a result, got {other:?}"),
        }
    }

    #[test]
    fn server_error_replaces_previous_result() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);
        let first = session.begin_submit().unwrap();
        session.resolve(first.ticket, glioma());

        let second = session.begin_submit().unwrap();
        assert_eq!(session.view(), Outcome::Nothing);
        session.resolve(
            second.ticket,
            interpret_response(413, r#"{"error":"file too large"}"#),
        );

        assert!(session.prediction().is_none());
        assert_eq!(session.view(), Outcome::Error("file too large".into()));
    }

    #[test]
    fn unreadable_error_body_falls_back_to_status_text() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);
        let submission = session.begin_submit().unwrap();
        session.resolve(submission.ticket, interpret_response(500, ""));

        assert!(!session.is_submitting());
        assert_eq!(
            session.view(),
            Outcome::Error("Request failed with status 500".into())
        );
    }

    #[test]
    fn network_failure_re_enables_submit() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);
        let submission = session.begin_submit().unwrap();
        session.resolve(
            submission.ticket,
            Err(AnalysisError::Network("Failed to fetch".into())),
        );

        assert!(session.can_submit());
        assert!(matches!(session.error(), Some(AnalysisError::Network(_))));
    }

    #[test]
    fn new_selection_clears_result_before_next_submission() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("first.png", &live);
        let submission = session.begin_submit().unwrap();
        session.resolve(submission.ticket, glioma());

        session
            .select("second.png", "image/png", |_| Preview::new(&live))
            .unwrap();

        assert!(session.prediction().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.view(), Outcome::Nothing);
        assert!(session.can_submit());
    }

    #[test]
    fn outcome_of_superseded_call_is_ignored() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("first.png", &live);
        let stale = session.begin_submit().unwrap();

        session
            .select("second.png", "image/png", |_| Preview::new(&live))
            .unwrap();
        assert!(!session.is_submitting());
        assert!(!session.resolve(stale.ticket, glioma()));
        assert!(session.prediction().is_none());

        let fresh = session.begin_submit().unwrap();
        assert_ne!(fresh.ticket, stale.ticket);
        assert!(!session.resolve(stale.ticket, glioma()));
        assert!(session.is_submitting());
        assert!(session.resolve(fresh.ticket, glioma()));
    }

    #[test]
    fn discard_releases_preview_and_resets() {
        let live = Rc::new(Cell::new(0));
        let mut session = session_with("scan.png", &live);
        let submission = session.begin_submit().unwrap();

        session.discard();

        assert_eq!(live.get(), 0);
        assert!(session.selection().is_none());
        assert_eq!(session.phase(), &Phase::Idle);
        assert!(!session.resolve(submission.ticket, glioma()));
        assert!(session.begin_submit().is_none());
    }

    #[test]
    fn dropping_the_session_releases_its_preview() {
        let live = Rc::new(Cell::new(0));
        let session = session_with("scan.png", &live);
        assert_eq!(live.get(), 1);
        drop(session);
        assert_eq!(live.get(), 0);
    }
}
