mod components;
mod timer;

use components::utils::Notice;
use components::{cell_guide, handlers, header, preview_area, results, upload_section, utils};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{
    AnalysisTicket, CellType, Classifier, ClassifyError, ImageHandle, MockClassifier, Ranking,
    Session, StubConfig,
};
use std::rc::Rc;
use timer::GlooTimer;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct AppProps {
    pub classifier: Rc<dyn Classifier>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.classifier, &other.classifier)
    }
}

pub enum Msg {
    // Intake
    FileChosen(GlooFile),
    FileRead {
        name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    FileReadFailed(String),
    SampleChosen(&'static str),
    ImageAccepted(ImageHandle),

    // Session
    Analyze,
    AnalysisFinished(AnalysisTicket, Result<Ranking, ClassifyError>),
    ModelReady,
    Reset,

    // UI states
    SetDragging(bool),
    HandleDrop(DragEvent),
    SelectGuideTab(CellType),
    ClearNotice,
}

pub struct Model {
    pub(crate) session: Session,
    pub(crate) classifier: Rc<dyn Classifier>,
    pub(crate) model_ready: bool,
    pub(crate) notice: Option<Notice>,
    pub(crate) notice_timeout: Option<Timeout>,
    pub(crate) is_dragging: bool,
    pub(crate) guide_tab: CellType,
}

impl Component for Model {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let classifier = ctx.props().classifier.clone();

        let link = ctx.link().clone();
        let preload = classifier.clone();
        spawn_local(async move {
            preload.load().await;
            link.send_message(Msg::ModelReady);
        });

        Self {
            session: Session::new(),
            model_ready: classifier.is_loaded(),
            classifier,
            notice: None,
            notice_timeout: None,
            is_dragging: false,
            guide_tab: CellType::Neutrophil,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::FileRead {
                name,
                content_type,
                bytes,
            } => handlers::handle_file_read(self, ctx, name, content_type, bytes),
            Msg::FileReadFailed(reason) => {
                handlers::show_notice(self, ctx, Notice::error(format!("Could not read file: {}", reason)))
            }
            Msg::SampleChosen(name) => handlers::handle_sample_chosen(self, ctx, name),
            Msg::ImageAccepted(image) => handlers::handle_image_accepted(self, image),

            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(ticket, result) => {
                handlers::handle_analysis_finished(self, ctx, ticket, result)
            }
            Msg::ModelReady => {
                self.model_ready = true;
                true
            }
            Msg::Reset => handlers::handle_reset(self),

            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SelectGuideTab(cell) => {
                self.guide_tab = cell;
                true
            }
            Msg::ClearNotice => {
                self.notice = None;
                self.notice_timeout = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let info = self.classifier.model_info();

        html! {
            <div class="container">
                { header::render_header(self.model_ready) }
                { utils::render_notice(self) }

                <main class="main-content">
                    <section class="analysis-grid">
                        <div class="card upload-card">
                            <h2 class="card-title">
                                <i class="fa-solid fa-upload"></i>{" Image Upload & Analysis"}
                            </h2>
                            { upload_section::render_upload_section(self, ctx) }
                            { preview_area::render_actions(self, ctx) }
                        </div>
                        <div class="side-panel">
                            {
                                match self.session.ranking() {
                                    Some(ranking) => results::render_results(ranking),
                                    None => cell_guide::render_cell_guide(self.guide_tab, ctx.link()),
                                }
                            }
                        </div>
                    </section>
                </main>

                <footer class="app-footer">
                    <p>
                        { format!(
                            "{} | {} cell types | {}",
                            info.architecture,
                            info.classes.len(),
                            info.processing_time
                        ) }
                    </p>
                    <p class="disclaimer">{"Demonstration only. Results are simulated, not a diagnosis."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");

    let classifier: Rc<dyn Classifier> =
        Rc::new(MockClassifier::new(GlooTimer, StubConfig::default()));
    yew::Renderer::<Model>::with_props(AppProps { classifier }).render();
}
