//! Query interface state as an explicit reducer.
//!
//! The UI owns four pieces of state: the selected image, the text query,
//! the current result list and the loading flag. All of them are mutated
//! only through [`SearchState::apply`], and every in-flight request carries
//! a monotonically increasing sequence number. A response whose sequence
//! no longer matches the pending token is discarded, so a slow query can
//! never overwrite the results of a newer one.
//!
//! The state is generic over the file handle `F` (a browser `File` in the
//! frontend, anything cloneable in tests), which keeps the whole module
//! free of wasm types.

use crate::SimilarImage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitKind {
    Upload,
    QueryImage,
    QueryText,
}

/// Token for the request currently in flight.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pending {
    pub kind: SubmitKind,
    pub seq: u64,
}

/// Terminal outcome of a submitted request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Upload succeeded; the backend message is surfaced verbatim.
    Uploaded(String),
    /// A query succeeded with a ranked result list.
    Results(Vec<SimilarImage>),
    /// Transport or server failure. The detail was already logged at the
    /// call site; the user only sees a generic alert.
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent<F> {
    ImageSelected(F),
    TextEdited(String),
    Submit(SubmitKind),
    Finished { seq: u64, outcome: Outcome },
}

/// Side effect the caller must run after applying an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<F> {
    Upload { seq: u64, file: F },
    QueryImage { seq: u64, file: F },
    QueryText { seq: u64, query: String },
    /// Validation failure, shown before any request is issued.
    Warn(&'static str),
    /// Generic failure notice for a rejected request.
    Alert(&'static str),
    /// Upload success message, passed through from the backend.
    Announce(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchState<F> {
    selected: Option<F>,
    text_query: String,
    results: Vec<SimilarImage>,
    pending: Option<Pending>,
    next_seq: u64,
    results_seq: u64,
}

impl<F> Default for SearchState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            text_query: String::new(),
            results: Vec::new(),
            pending: None,
            next_seq: 0,
            results_seq: 0,
        }
    }
}

impl<F: Clone> SearchState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn text_query(&self) -> &str {
        &self.text_query
    }

    pub fn results(&self) -> &[SimilarImage] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_kind(&self) -> Option<SubmitKind> {
        self.pending.map(|p| p.kind)
    }

    /// Bumped each time a new result list is committed. Render-side
    /// bookkeeping keyed to a result set (e.g. broken-image fallbacks)
    /// resets when this changes.
    pub fn results_seq(&self) -> u64 {
        self.results_seq
    }

    pub fn apply(&mut self, event: SearchEvent<F>) -> Option<Command<F>> {
        match event {
            SearchEvent::ImageSelected(file) => {
                // Replaced wholesale; no type or size validation.
                self.selected = Some(file);
                None
            }
            SearchEvent::TextEdited(text) => {
                self.text_query = text;
                None
            }
            SearchEvent::Submit(kind) => self.submit(kind),
            SearchEvent::Finished { seq, outcome } => self.finish(seq, outcome),
        }
    }

    fn submit(&mut self, kind: SubmitKind) -> Option<Command<F>> {
        let command = match kind {
            SubmitKind::Upload => {
                let Some(file) = self.selected.clone() else {
                    return Some(Command::Warn("Please select an image to upload."));
                };
                Command::Upload { seq: self.next_seq, file }
            }
            SubmitKind::QueryImage => {
                let Some(file) = self.selected.clone() else {
                    return Some(Command::Warn("Please select an image to search."));
                };
                Command::QueryImage { seq: self.next_seq, file }
            }
            SubmitKind::QueryText => {
                if self.text_query.trim().is_empty() {
                    return Some(Command::Warn("Please enter a text query."));
                }
                Command::QueryText { seq: self.next_seq, query: self.text_query.clone() }
            }
        };

        // A newer submit supersedes any pending request; the superseded
        // response fails the token check when it eventually arrives.
        self.pending = Some(Pending { kind, seq: self.next_seq });
        self.next_seq += 1;
        Some(command)
    }

    fn finish(&mut self, seq: u64, outcome: Outcome) -> Option<Command<F>> {
        let pending = self.pending?;
        if pending.seq != seq {
            // Stale response from a superseded request.
            return None;
        }
        self.pending = None;

        match outcome {
            Outcome::Uploaded(message) => Some(Command::Announce(message)),
            Outcome::Results(similar_images) => {
                self.results = similar_images;
                self.results_seq += 1;
                None
            }
            Outcome::Failed => Some(Command::Alert(match pending.kind {
                SubmitKind::Upload => "Failed to upload image.",
                SubmitKind::QueryImage | SubmitKind::QueryText => {
                    "Failed to search similar images."
                }
            })),
        }
    }
}
