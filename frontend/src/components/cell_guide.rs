use super::super::{Model, Msg};
use shared::{CellType, IntoEnumIterator};
use yew::html::Scope;
use yew::prelude::*;

pub fn render_cell_guide(selected: CellType, link: &Scope<Model>) -> Html {
    let profile = selected.profile();

    html! {
        <div class="card cell-guide">
            <h2 class="card-title">{"Blood Cell Classification Guide"}</h2>
            <div class="tabs" role="tablist">
                { for CellType::iter().map(|cell| html! {
                    <button
                        key={cell.to_string()}
                        role="tab"
                        class={classes!("tab", (cell == selected).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SelectGuideTab(cell))}
                    >
                        { cell.to_string() }
                    </button>
                })}
            </div>

            <div class="tab-content" role="tabpanel">
                <div class="guide-heading">
                    <h3>{ selected.to_string() }</h3>
                    <span class={classes!("badge", selected.accent_class())}>
                        { format!("{} of WBCs", profile.share_of_wbc) }
                    </span>
                </div>
                <p>{ profile.description }</p>

                <h4>{"Key Functions:"}</h4>
                <ul>
                    { for profile.functions.iter().map(|f| html! { <li>{ *f }</li> }) }
                </ul>

                <div class="guide-facts">
                    <div>
                        <span class="fact-label">{"MORPHOLOGY"}</span>
                        <p>{ profile.morphology }</p>
                    </div>
                    <div>
                        <span class="fact-label">{"NORMAL RANGE"}</span>
                        <p>{ profile.normal_range }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
