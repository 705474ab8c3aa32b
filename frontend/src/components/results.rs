use shared::{SimilarImage, format_similarity, result_image_url};
use yew::prelude::*;

use crate::{Model, Msg};

/// Shown when a result image cannot be loaded from the backend.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let results = model.state.results();
    if results.is_empty() {
        return html! {};
    }

    html! {
        <div class="results-section">
            <h2>{"Similar Images:"}</h2>
            <div class="images-grid">
                { for results
                    .iter()
                    .enumerate()
                    .map(|(index, result)| render_result_card(model, ctx, index, result)) }
            </div>
        </div>
    }
}

fn render_result_card(
    model: &Model,
    ctx: &Context<Model>,
    index: usize,
    result: &SimilarImage,
) -> Html {
    let failed = model.failed_results.contains(&index);
    let src = if failed {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        result_image_url(&result.image_path)
    };
    // The error listener is only attached while the card still shows the
    // backend URL, so a missing placeholder cannot fall back in a loop.
    let onerror = (!failed).then(|| ctx.link().callback(move |_: Event| Msg::ResultImageFailed(index)));

    html! {
        <div class="image-card" key={index.to_string()}>
            <img
                src={src}
                alt={result.image_name.clone()}
                class="result-image"
                onerror={onerror}
            />
            <p class="similarity-text">
                { format!("Similarity: {}", format_similarity(result.similarity)) }
            </p>
        </div>
    }
}
