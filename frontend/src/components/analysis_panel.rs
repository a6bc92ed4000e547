use super::super::{Model, Msg};
use super::results::render_outcome;
use super::utils::{FILE_INPUT_ID, debounce, first_file, open_file_picker};
use crate::config::MAX_UPLOAD_HINT;
use shared::ImageMime;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_analysis_panel(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section id="analyze" class="analysis-section" ref={model.analysis_ref.clone()}>
            <div class="section-heading">
                <h2>{"Brain Tumor "}<span class="accent">{"Detection"}</span></h2>
                <p>
                    {"Upload an MRI scan to detect the presence of a brain tumor using our advanced Deep Learning model."}
                </p>
            </div>
            <div class="analysis-card">
                { render_file_input(ctx) }
                { render_drop_zone(model, ctx) }
                { render_analyze_button(model, ctx) }
                { render_outcome(model) }
            </div>
        </section>
    }
}

fn render_file_input(ctx: &Context<Model>) -> Html {
    let handle_change = ctx.link().callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = first_file(input.files());
        // Reset so choosing the same file again fires another change event.
        input.set_value("");
        Msg::FileChosen(file)
    });

    html! {
        <input
            type="file"
            id={FILE_INPUT_ID}
            accept={ImageMime::accept_attribute()}
            style="display: none;"
            onchange={handle_change}
        />
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let has_preview = model.session.selection().is_some();

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    let handle_click = if has_preview {
        Callback::noop()
    } else {
        debounce(300, open_file_picker)
    };

    html! {
        <div
            id="drop-zone"
            class={classes!(
                "upload-area",
                model.is_dragging.then_some("drag-over"),
                has_preview.then_some("has-preview")
            )}
            ondragover={handle_drag_over}
            ondragleave={handle_drag_leave}
            ondrop={handle_drop}
            onclick={handle_click}
        >
            {
                match model.session.selection() {
                    Some(selection) => html! {
                        <div class="preview">
                            <img id="image-preview" src={selection.preview().to_string()} alt="Preview" />
                            <div class="preview-overlay">
                                <button
                                    class="change-btn"
                                    onclick={link.callback(|e: MouseEvent| {
                                        e.stop_propagation();
                                        Msg::Discard
                                    })}
                                >
                                    {"Change Image"}
                                </button>
                            </div>
                        </div>
                    },
                    None => html! {
                        <div class="upload-placeholder">
                            <i class="fa-solid fa-cloud-arrow-up"></i>
                            <h3>{"Upload MRI Scan"}</h3>
                            <p>{"Drag & drop, paste, or click to browse"}</p>
                            <p class="file-types">{ format!("Supports JPG, PNG (Max {})", MAX_UPLOAD_HINT) }</p>
                        </div>
                    },
                }
            }
        </div>
    }
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    if model.session.selection().is_none() || model.session.prediction().is_some() {
        return html! {};
    }

    let submitting = model.session.is_submitting();
    html! {
        <div class="button-container">
            <button
                class={classes!("analyze-btn", submitting.then_some("loading"))}
                onclick={ctx.link().callback(|_| Msg::Analyze)}
                disabled={!model.session.can_submit()}
            >
                {
                    if submitting {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Image"}</> }
                    }
                }
            </button>
        </div>
    }
}
