use shared::{ClassificationResult, Ranking};
use yew::prelude::*;

pub fn render_results(ranking: &Ranking) -> Html {
    let top = ranking.top();
    let high = ranking.is_high_confidence();
    let profile = top.label.profile();

    html! {
        <div class="results-container">
            <div class="card result-summary">
                <h2 class="card-title"><i class="fa-solid fa-circle-check"></i>{" Analysis Complete"}</h2>
                <div class="result-header">
                    <div>
                        <h3>{ top.label.to_string() }</h3>
                        <p class="result-description">{ &top.description }</p>
                    </div>
                    <div class="result-score">
                        <div class="meter-value">{ format!("{:.1}%", top.confidence) }</div>
                        <span class={classes!("badge", high.then_some("badge-high"))}>
                            { ranking.confidence_level().to_string() }
                        </span>
                    </div>
                </div>
                {
                    if high {
                        html! {}
                    } else {
                        html! {
                            <div class="review-notice">
                                <i class="fa-solid fa-triangle-exclamation"></i>
                                <div>
                                    <p class="review-title">{"Review Recommended"}</p>
                                    <p>{"Consider additional analysis or expert review for optimal accuracy."}</p>
                                </div>
                            </div>
                        }
                    }
                }
            </div>

            <div class="card detailed-results">
                <h2 class="card-title"><i class="fa-solid fa-chart-line"></i>{" Detailed Predictions"}</h2>
                <div class="result-bars">
                    { for ranking.iter().map(render_result_item) }
                </div>
            </div>

            <div class="card clinical">
                <h2 class="card-title">{"Clinical Significance"}</h2>
                <div class="clinical-block">
                    <h4>{ format!("{} Functions:", top.label) }</h4>
                    <ul>
                        { for profile.clinical_notes.iter().map(|note| html! { <li>{ *note }</li> }) }
                    </ul>
                </div>
                <div class="clinical-block muted">
                    <h4>{"Normal Ranges:"}</h4>
                    <p>{ format!("{}s: {} of WBCs ({})", top.label, profile.share_of_wbc, profile.normal_range) }</p>
                </div>
            </div>
        </div>
    }
}

fn render_result_item(result: &ClassificationResult) -> Html {
    html! {
        <div class="result-item" key={result.label.to_string()}>
            <div class="result-label">
                <span class={classes!("dot", result.label.accent_class())}></span>
                { result.label.to_string() }
            </div>
            <div class="result-bar-container">
                <div class="result-bar" style={format!("width: {}%", result.bar_width())}></div>
            </div>
            <div class="result-value">{ format!("{:.1}%", result.confidence) }</div>
            <p class="result-description">{ &result.description }</p>
        </div>
    }
}
