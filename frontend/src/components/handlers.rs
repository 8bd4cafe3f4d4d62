use crate::components::utils::Notice;
use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::intake::{self, ImageSource};
use shared::{AnalysisTicket, ClassifyError, ImageHandle, Ranking};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

const NOTICE_MS: u32 = 3000;
const NOT_AN_IMAGE: &str = "Please upload an image file";

pub fn show_notice(model: &mut Model, ctx: &Context<Model>, notice: Notice) -> bool {
    if let Some(timeout) = model.notice_timeout.take() {
        timeout.cancel();
    }

    let link = ctx.link().clone();
    model.notice_timeout = Some(Timeout::new(NOTICE_MS, move || {
        link.send_message(Msg::ClearNotice);
    }));
    model.notice = Some(notice);
    true
}

/// Checks the declared type, then reads the file off the event loop.
pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let name = file.name();
    let content_type = file.raw_mime_type();

    if let Err(e) = intake::check_content_type(&name, &content_type) {
        log::warn!("Skipping non-image file: {}", e);
        return show_notice(model, ctx, Notice::error(NOT_AN_IMAGE));
    }

    let link = ctx.link().clone();
    spawn_local(async move {
        match gloo_file::futures::read_as_bytes(&file).await {
            Ok(bytes) => link.send_message(Msg::FileRead {
                name,
                content_type,
                bytes,
            }),
            Err(e) => link.send_message(Msg::FileReadFailed(e.to_string())),
        }
    });

    false
}

pub fn handle_file_read(
    model: &mut Model,
    ctx: &Context<Model>,
    name: String,
    content_type: String,
    bytes: Vec<u8>,
) -> bool {
    let source = ImageSource::File {
        name,
        content_type,
        bytes,
    };
    let link = ctx.link().clone();

    match intake::submit(source, |image| link.send_message(Msg::ImageAccepted(image.clone()))) {
        Ok(_) => show_notice(model, ctx, Notice::success("Image uploaded successfully!")),
        Err(_) => show_notice(model, ctx, Notice::error(NOT_AN_IMAGE)),
    }
}

pub fn handle_sample_chosen(model: &mut Model, ctx: &Context<Model>, name: &'static str) -> bool {
    let link = ctx.link().clone();

    match intake::submit(ImageSource::Sample(name.to_string()), |image| {
        link.send_message(Msg::ImageAccepted(image.clone()))
    }) {
        Ok(_) => show_notice(model, ctx, Notice::success(format!("Sample {} image loaded!", name))),
        Err(e) => show_notice(model, ctx, Notice::error(e.to_string())),
    }
}

pub fn handle_image_accepted(model: &mut Model, image: ImageHandle) -> bool {
    model.session.submit(image);
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(request) = model.session.analyze() else {
        return false;
    };

    let classifier = model.classifier.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = classifier.classify(&request.image).await;
        link.send_message(Msg::AnalysisFinished(request.ticket, result));
    });

    true
}

pub fn handle_analysis_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: AnalysisTicket,
    result: Result<Ranking, ClassifyError>,
) -> bool {
    match result {
        Ok(ranking) => model.session.complete(ticket, ranking),
        Err(e) => {
            log::error!("Classification failed: {}", e);
            if model.session.fail(ticket) {
                show_notice(model, ctx, Notice::error(format!("Analysis failed: {}", e)))
            } else {
                false
            }
        }
    }
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.session.reset();
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| file_list.item(0));

    if let Some(file) = file {
        handle_file_chosen(model, ctx, GlooFile::from(file));
    }

    true
}
