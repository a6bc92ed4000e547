mod api;
mod components;
mod config;

use api::PendingRequest;
use components::{analysis_panel, features, footer, header, hero, info_section};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AnalysisError, AnalysisSession, Prediction, Submission, Ticket};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, File};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Intake
    FileChosen(Option<File>),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    SetDragging(bool),
    Discard,

    // Analysis
    Analyze,
    AnalysisFinished(Ticket, Result<Prediction, AnalysisError>),

    // Navigation
    ScrollTo(NodeRef),
}

// Main component
struct Model {
    session: AnalysisSession<File, ObjectUrl>,
    pending: Option<PendingRequest>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    analysis_ref: NodeRef,
    features_ref: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: AnalysisSession::new(),
            pending: None,
            is_dragging: false,
            paste_listener: None,
            analysis_ref: NodeRef::default(),
            features_ref: NodeRef::default(),
        };

        let link = ctx.link().clone();
        if let Some(window) = web_sys::window() {
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => self.handle_file_chosen(file),
            Msg::HandleDrop(event) => self.handle_drop(event),
            Msg::HandlePaste(event) => self.handle_paste(event),
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }
            Msg::Discard => self.handle_discard(),

            Msg::Analyze => self.handle_analyze(ctx),
            Msg::AnalysisFinished(ticket, outcome) => self.handle_analysis_finished(ticket, outcome),

            Msg::ScrollTo(target) => {
                scroll_into_view(&target);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let start = {
            let target = self.analysis_ref.clone();
            link.callback(move |_: MouseEvent| Msg::ScrollTo(target.clone()))
        };
        let learn_more = {
            let target = self.features_ref.clone();
            link.callback(move |_: MouseEvent| Msg::ScrollTo(target.clone()))
        };

        html! {
            <div class="page">
                { header::render_header() }
                <main class="main-content">
                    { hero::render_hero(start, learn_more) }
                    { features::render_features(&self.features_ref) }
                    { info_section::render_info_section() }
                    { analysis_panel::render_analysis_panel(self, ctx) }
                </main>
                { footer::render_footer() }
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_file_chosen(&mut self, file: Option<File>) -> bool {
        let Some(file) = file else {
            return false;
        };

        // A new file orphans whatever call is still running.
        self.pending = None;

        let declared = file.type_();
        if let Err(err) = self.session.select(file.clone(), &declared, |file| {
            ObjectUrl::from(GlooFile::from(file.clone()))
        }) {
            log::warn!("Skipping {}: {}", file.name(), err);
        }
        true
    }

    fn handle_drop(&mut self, event: DragEvent) -> bool {
        event.prevent_default();
        self.is_dragging = false;

        let file = event
            .data_transfer()
            .and_then(|data_transfer| data_transfer.files())
            .and_then(|file_list| file_list.item(0));
        self.handle_file_chosen(file);
        true
    }

    fn handle_paste(&mut self, event: ClipboardEvent) -> bool {
        let file = event
            .clipboard_data()
            .and_then(|data_transfer| data_transfer.files())
            .and_then(|file_list| file_list.item(0));

        match file {
            Some(file) => {
                event.prevent_default();
                self.handle_file_chosen(Some(file))
            }
            None => false,
        }
    }

    fn handle_discard(&mut self) -> bool {
        self.pending = None;
        self.session.discard();
        true
    }

    fn handle_analyze(&mut self, ctx: &Context<Self>) -> bool {
        let Some(Submission { ticket, file }) = self.session.begin_submit() else {
            return false;
        };

        let pending = PendingRequest::new(ticket);
        let signal = pending.signal();
        self.pending = Some(pending);

        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = api::predict_image(&file, signal.as_ref()).await;
            link.send_message(Msg::AnalysisFinished(ticket, outcome));
        });

        true
    }

    fn handle_analysis_finished(
        &mut self,
        ticket: Ticket,
        outcome: Result<Prediction, AnalysisError>,
    ) -> bool {
        if self.pending.as_ref().map(PendingRequest::ticket) == Some(ticket) {
            if let Some(pending) = self.pending.take() {
                pending.finish();
            }
        }
        self.session.resolve(ticket, outcome)
    }
}

fn scroll_into_view(target: &NodeRef) {
    if let Some(element) = target.cast::<web_sys::Element>() {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Prediction endpoint: {}", config::predict_url());
    yew::Renderer::<Model>::new().render();
}
