// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workbench page — open an image, pick one operation, tune its controls and
// see the result inline.

use dioxus::prelude::*;

use imagelab_core::human_errors::{Severity, humanize_error};
use imagelab_core::{AnnotationKind, ImageLabError, OperationKind, Thickness};
use imagelab_transform::loader::SUPPORTED_EXTENSIONS;

use crate::services::app_services::AppServices;
use crate::state::{AppState, Source};

const ROW_STYLE: &str = "display: flex; justify-content: space-between; align-items: center; gap: 12px; padding: 10px 0; border-bottom: 1px solid #f0f0f0;";
const INPUT_STYLE: &str = "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;";

#[component]
pub fn Workbench() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    // Cached until the controls change or another image is opened.
    let panel = use_memo(move || state.read().controls.clone());
    let opened = use_memo(move || state.read().opened);
    let outcome = use_memo({
        let svc = svc.clone();
        move || {
            let controls = panel();
            let _ = opened();
            let current = state.peek();
            current.source.as_ref().map(|source| {
                svc.render(&source.grid, &controls).map_err(|e| {
                    tracing::debug!(error = %e, "operation not rendered");
                    humanize_error(&e)
                })
            })
        }
    });

    let controls = panel();
    let result_view = match outcome() {
        None => rsx! {},
        Some(Ok(image)) => rsx! {
            h3 { "{result_heading(controls.operation)}" }
            img {
                src: "{image.data_url}",
                style: "width: 100%; border-radius: 4px;",
                alt: "{controls.operation} result",
            }
            p { style: "color: #888; font-size: 12px; text-align: center;",
                "{image.width}x{image.height}, {image.channels} channel(s)"
            }
        },
        Some(Err(human)) => rsx! {
            ErrorBox {
                message: human.message,
                suggestion: human.suggestion,
                blocking: human.severity == Severity::Permanent,
            }
        },
    };

    rsx! {
        div {
            h1 { style: "text-align: center;", "Image Processing" }

            // Open file
            button {
                style: "width: 100%; padding: 16px; border-radius: 12px; border: 2px dashed #007aff; color: #007aff; background: white; font-size: 16px; margin: 16px 0;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        #[cfg(not(any(target_os = "ios", target_os = "android")))]
                        {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", &SUPPORTED_EXTENSIONS[..])
                                .pick_file()
                            {
                                let name = path
                                    .file_name()
                                    .map(|n| n.to_string_lossy().to_string())
                                    .unwrap_or_else(|| path.display().to_string());
                                let opened = std::fs::read(&path)
                                    .map_err(ImageLabError::from)
                                    .and_then(|bytes| svc.open_upload(&name, &bytes))
                                    .and_then(|grid| {
                                        let preview = svc.preview(&grid)?;
                                        Ok(Source { name: name.clone(), grid, preview })
                                    });
                                match opened {
                                    Ok(source) => state.write().open(source),
                                    Err(e) => {
                                        tracing::warn!(file = %name, error = %e, "could not open image");
                                        let human = humanize_error(&e);
                                        state.write().status_message =
                                            Some(format!("{} {}", human.message, human.suggestion));
                                    }
                                }
                            }
                        }
                        #[cfg(any(target_os = "ios", target_os = "android"))]
                        {
                            state.write().status_message =
                                Some("File picker not available on this platform".into());
                        }
                    }
                },
                "Choose an image file (JPG, JPEG, PNG)"
            }

            if let Some(ref msg) = state.read().status_message {
                p { style: "color: #666; font-size: 14px; text-align: center;", "{msg}" }
            }

            if let Some(ref source) = state.read().source {
                h3 { "Original Image" }
                img {
                    src: "{source.preview.data_url}",
                    style: "width: 100%; border-radius: 4px;",
                    alt: "{source.name}",
                }

                // Operation selector
                div { style: ROW_STYLE,
                    span { "Select any option" }
                    select {
                        style: INPUT_STYLE,
                        value: controls.operation.label(),
                        onchange: move |evt| {
                            if let Ok(kind) = evt.value().parse::<OperationKind>() {
                                state.write().controls.operation = kind;
                            }
                        },
                        for kind in OperationKind::ALL {
                            option { value: kind.label(), selected: kind == controls.operation, "{kind}" }
                        }
                    }
                }

                OperationControls {}

                {result_view}
            }
        }
    }
}

/// Controls for the selected operation only.
#[component]
fn OperationControls() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let controls = state.read().controls.clone();

    match controls.operation {
        OperationKind::ColorConvert | OperationKind::Grayscale => rsx! {},
        OperationKind::Threshold => rsx! {
            SliderRow {
                label: "Threshold",
                min: 0,
                max: 255,
                step: 1,
                value: controls.threshold,
                on_change: move |v| state.write().controls.threshold = v,
            }
        },
        OperationKind::BrightnessContrast => rsx! {
            SliderRow {
                label: "Brightness",
                min: -100,
                max: 100,
                step: 2,
                value: controls.brightness,
                on_change: move |v| state.write().controls.brightness = v,
            }
            SliderRow {
                label: "Contrast",
                min: -100,
                max: 100,
                step: 2,
                value: controls.contrast,
                on_change: move |v| state.write().controls.contrast = v,
            }
        },
        OperationKind::Annotate => rsx! { AnnotationControls {} },
    }
}

#[component]
fn AnnotationControls() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let controls = state.read().controls.clone();
    let closed_shape = matches!(
        controls.annotation,
        AnnotationKind::Circle | AnnotationKind::Rectangle
    );

    rsx! {
        div { style: ROW_STYLE,
            span { "Choose any of the annotation" }
            select {
                style: INPUT_STYLE,
                value: controls.annotation.label(),
                onchange: move |evt| {
                    if let Ok(kind) = evt.value().parse::<AnnotationKind>() {
                        state.write().controls.annotation = kind;
                    }
                },
                for kind in AnnotationKind::ALL {
                    option { value: kind.label(), selected: kind == controls.annotation, "{kind}" }
                }
            }
        }

        div { style: ROW_STYLE,
            span { "Select a color" }
            input {
                r#type: "color",
                value: "{controls.color}",
                oninput: move |evt| state.write().controls.color = evt.value(),
            }
        }

        if closed_shape {
            div { style: ROW_STYLE,
                span { "Fill shape" }
                input {
                    r#type: "checkbox",
                    checked: controls.filled,
                    onchange: move |evt| state.write().controls.filled = evt.checked(),
                }
            }
        }

        if !(closed_shape && controls.filled) {
            SliderRow {
                label: "Thickness",
                min: Thickness::MIN,
                max: Thickness::MAX,
                step: 1,
                value: controls.thickness,
                on_change: move |v| state.write().controls.thickness = v,
            }
        }

        {match controls.annotation {
            AnnotationKind::Line | AnnotationKind::Rectangle => rsx! {
                NumberRow { label: "X1", value: controls.start.0, on_change: move |v| state.write().controls.start.0 = v }
                NumberRow { label: "Y1", value: controls.start.1, on_change: move |v| state.write().controls.start.1 = v }
                NumberRow { label: "X2", value: controls.end.0, on_change: move |v| state.write().controls.end.0 = v }
                NumberRow { label: "Y2", value: controls.end.1, on_change: move |v| state.write().controls.end.1 = v }
            },
            AnnotationKind::Circle => rsx! {
                NumberRow { label: "X", value: controls.center.0, on_change: move |v| state.write().controls.center.0 = v }
                NumberRow { label: "Y", value: controls.center.1, on_change: move |v| state.write().controls.center.1 = v }
                NumberRow { label: "Radius", value: controls.radius, on_change: move |v| state.write().controls.radius = v }
            },
            AnnotationKind::Text => rsx! {
                NumberRow { label: "X", value: controls.text_origin.0, on_change: move |v| state.write().controls.text_origin.0 = v }
                NumberRow { label: "Y", value: controls.text_origin.1, on_change: move |v| state.write().controls.text_origin.1 = v }
                div { style: ROW_STYLE,
                    span { "Enter text" }
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        value: "{controls.text}",
                        oninput: move |evt| state.write().controls.text = evt.value(),
                    }
                }
                div { style: ROW_STYLE,
                    span { "Scale" }
                    input {
                        r#type: "number",
                        step: "0.5",
                        style: "width: 80px; {INPUT_STYLE} text-align: right;",
                        value: "{controls.text_scale}",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<f64>() {
                                state.write().controls.text_scale = v;
                            }
                        },
                    }
                }
            },
        }}
    }
}

#[component]
fn SliderRow(
    label: &'static str,
    min: i64,
    max: i64,
    step: i64,
    value: i64,
    on_change: EventHandler<i64>,
) -> Element {
    rsx! {
        div { style: ROW_STYLE,
            span { "{label}: {value}" }
            input {
                r#type: "range",
                style: "flex: 1;",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(v) = evt.value().parse::<i64>() {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}

#[component]
fn NumberRow(label: &'static str, value: i64, on_change: EventHandler<i64>) -> Element {
    rsx! {
        div { style: ROW_STYLE,
            span { "{label}" }
            input {
                r#type: "number",
                style: "width: 100px; {INPUT_STYLE} text-align: right;",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(v) = evt.value().parse::<i64>() {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}

#[component]
fn ErrorBox(message: String, suggestion: String, blocking: bool) -> Element {
    let border = if blocking { "#ff3b30" } else { "#ff9500" };
    rsx! {
        div { style: "margin: 16px 0; padding: 12px; border-left: 4px solid {border}; background: #fff8f0; border-radius: 4px;",
            strong { "{message}" }
            p { style: "margin: 4px 0 0; color: #666; font-size: 14px;", "{suggestion}" }
        }
    }
}

fn result_heading(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::ColorConvert => "RGB Image",
        OperationKind::Grayscale => "Grayscale Image",
        OperationKind::Threshold => "Binary Image",
        OperationKind::BrightnessContrast => "Brightness/Contrast Image",
        OperationKind::Annotate => "Annotated Image",
    }
}
