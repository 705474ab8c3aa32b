use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Content based Image Retrieval (CBIR)"}</h1>
        </header>
    }
}
