use super::preview_area::render_preview;
use super::utils::debounce;
use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use shared::intake::sample_names;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            {
                if model.session.image().is_some() {
                    render_preview(model, ctx)
                } else {
                    html! {
                        <>
                            { render_file_input_area(model, ctx) }
                            { render_samples(ctx) }
                        </>
                    }
                }
            }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));

        input.set_value("");
        file.map(|file| Msg::FileChosen(GlooFile::from(file)))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));

        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragenter={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    Msg::SetDragging(true)
                })}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, move || trigger_file_input.emit(()))}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p class="upload-title">{"Upload Blood Cell Image"}</p>
                    <p>{"Drag and drop your image here, or click to browse"}</p>
                    <p class="file-types">{"Supports: JPG, PNG, JPEG"}</p>
                </div>
            </div>
        </>
    }
}

fn render_samples(ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="samples">
            <p class="samples-title">{"Or try sample images:"}</p>
            <div class="sample-grid">
                { for sample_names().map(|name| html! {
                    <button
                        key={name}
                        class="sample-btn"
                        onclick={link.callback(move |_| Msg::SampleChosen(name))}
                    >
                        <i class="fa-regular fa-image"></i>
                        <span>{ name }</span>
                    </button>
                })}
            </div>
        </div>
    }
}
