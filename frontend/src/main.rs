use std::collections::HashSet;

use gloo_file::{File as GlooFile, ObjectUrl};
use shared::state::{Outcome, SearchEvent, SearchState, SubmitKind};
use yew::prelude::*;

mod api;
mod components;

use components::{handlers, header, results, text_query, upload_section};

// Models
#[derive(Clone)]
pub struct FileData {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

// Yew msg components
pub enum Msg {
    // Input events
    ImageSelected(GlooFile),
    TextEdited(String),

    // Submit operations
    Submit(SubmitKind),
    Finished { seq: u64, outcome: Outcome },

    // UI states
    ResultImageFailed(usize),
}

// Main component
pub struct Model {
    pub state: SearchState<FileData>,
    /// Result cards whose image already fell back to the placeholder.
    pub failed_results: HashSet<usize>,
    seen_results_seq: u64,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: SearchState::new(),
            failed_results: HashSet::new(),
            seen_results_seq: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let event = match msg {
            Msg::ImageSelected(file) => {
                let preview_url = ObjectUrl::from(file.clone());
                SearchEvent::ImageSelected(FileData { file, preview_url })
            }
            Msg::TextEdited(text) => SearchEvent::TextEdited(text),
            Msg::Submit(kind) => SearchEvent::Submit(kind),
            Msg::Finished { seq, outcome } => SearchEvent::Finished { seq, outcome },
            // Insert is idempotent: once a card shows the placeholder a
            // further load error changes nothing and triggers no rerender.
            Msg::ResultImageFailed(index) => return self.failed_results.insert(index),
        };

        let command = self.state.apply(event);

        if self.state.results_seq() != self.seen_results_seq {
            // A new result set was committed; placeholder bookkeeping from
            // the previous one no longer applies.
            self.seen_results_seq = self.state.results_seq();
            self.failed_results.clear();
        }

        if let Some(command) = command {
            handlers::run_command(ctx, command);
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                { header::render_header() }

                <main class="app-main">
                    { upload_section::render_upload_section(self, ctx) }
                    { text_query::render_text_query(self, ctx) }
                    { results::render_results(self, ctx) }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("CBIR query interface starting...");
    yew::Renderer::<Model>::new().render();
}
