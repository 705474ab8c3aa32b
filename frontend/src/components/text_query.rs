use shared::state::SubmitKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_text_query(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let loading = model.state.is_loading();

    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TextEdited(input.value())
    });

    html! {
        <div class="text-query-section">
            <h3>{"Search by Text:"}</h3>
            <input
                type="text"
                class="text-input"
                value={model.state.text_query().to_string()}
                oninput={handle_input}
                placeholder="Enter your query here..."
            />
            <button
                class="search-text-button"
                onclick={link.callback(|_| Msg::Submit(SubmitKind::QueryText))}
                disabled={loading}
            >
                { if loading { "Searching..." } else { "Search" } }
            </button>
        </div>
    }
}
