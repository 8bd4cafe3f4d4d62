use super::utils::debounce;
use super::super::{Model, Msg};
use shared::Phase;
use yew::prelude::*;

pub fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(image) = model.session.image() else {
        return html! {};
    };
    let link = ctx.link();

    html! {
        <div class="preview-card" key={image.id().to_string()}>
            <div class="preview-frame">
                <img id="actual-image-preview" src={image.data_uri().to_string()} alt="Uploaded blood cell" />
                <button
                    class="remove-btn"
                    title="Remove this image"
                    disabled={model.session.is_analyzing()}
                    onclick={link.callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::Reset
                    })}
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
            <p class="preview-caption">{ format!("{} ready for analysis", image.name()) }</p>
        </div>
    }
}

/// Analyze while an image is selected, "Upload New Image" once results are in.
pub fn render_actions(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    match model.session.phase() {
        Phase::Idle => html! {},
        Phase::ImageSelected | Phase::Analyzing => html! {
            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={debounce(300, move || link.send_message(Msg::Analyze))}
                    disabled={model.session.is_analyzing()}
                >
                    { render_analyze_button_content(model) }
                </button>
            </div>
        },
        Phase::ResultsReady => html! {
            <div class="button-container">
                <button
                    class="analyze-btn outline"
                    onclick={link.callback(|_| Msg::Reset)}
                >
                    {"Upload New Image"}
                </button>
            </div>
        },
    }
}

fn render_analyze_button_content(model: &Model) -> Html {
    if model.session.is_analyzing() {
        let label = if model.model_ready {
            " Analyzing with AI..."
        } else {
            " Loading model..."
        };
        html! { <><i class="fa-solid fa-brain fa-beat"></i>{ label }</> }
    } else {
        html! { <><i class="fa-solid fa-microscope"></i>{" Analyze Blood Cells"}</> }
    }
}
