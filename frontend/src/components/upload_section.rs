use shared::state::SubmitKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::utils;
use crate::{Model, Msg};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let loading = model.state.is_loading();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        utils::first_file(&input).map(Msg::ImageSelected)
    });

    html! {
        <div class="upload-section">
            <input type="file" class="file-input" onchange={handle_change} />
            { render_selected_preview(model) }
            <div class="buttons">
                <button
                    class="upload-button"
                    onclick={link.callback(|_| Msg::Submit(SubmitKind::Upload))}
                    disabled={loading}
                >
                    { if loading { "Uploading..." } else { "Upload Image" } }
                </button>
                <button
                    class="search-button"
                    onclick={link.callback(|_| Msg::Submit(SubmitKind::QueryImage))}
                    disabled={loading}
                >
                    { if loading { "Searching..." } else { "Search Similar Images" } }
                </button>
            </div>
        </div>
    }
}

fn render_selected_preview(model: &Model) -> Html {
    match model.state.selected() {
        Some(file_data) => html! {
            <div class="selected-image">
                <h3>{"Selected Image:"}</h3>
                <img
                    src={file_data.preview_url.to_string()}
                    alt="Selected"
                    class="preview-image"
                />
            </div>
        },
        None => html! {},
    }
}
