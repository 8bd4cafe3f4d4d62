use yew::prelude::*;

/// Renders the application header with the model status badge
pub fn render_header(model_ready: bool) -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <i class="fa-solid fa-microscope"></i>
                <div>
                    <h1>{"HematoVision"}</h1>
                    <p class="subtitle">{"Blood Cell Classification"}</p>
                </div>
            </div>
            {
                if model_ready {
                    html! { <span class="badge badge-active"><i class="fa-solid fa-wave-square"></i>{" System Active"}</span> }
                } else {
                    html! { <span class="badge"><i class="fa-solid fa-spinner fa-spin"></i>{" Loading Model"}</span> }
                }
            }
        </header>
    }
}
