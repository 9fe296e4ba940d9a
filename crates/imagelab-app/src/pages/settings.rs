// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — persistent app configuration.

use dioxus::prelude::*;

use imagelab_core::{Color, TextScale, Thickness};

use crate::services::app_services::AppServices;
use crate::state::AppState;

const ROW_STYLE: &str = "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;";
const INPUT_STYLE: &str = "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;";

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    // Edits stay in this draft until saved.
    let mut draft = use_signal(|| state.peek().config.clone());
    let mut save_msg = use_signal(|| Option::<String>::None);
    let data_dir = svc.data_dir().display().to_string();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Loading" }
                SettingRow {
                    label: "Downscale uploads to 80%",
                    checked: draft.read().downscale_on_load,
                    on_toggle: move |v: bool| { draft.write().downscale_on_load = v; },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Defaults" }
                div { style: ROW_STYLE,
                    span { "Threshold" }
                    input {
                        r#type: "number",
                        style: "width: 80px; {INPUT_STYLE} text-align: right;",
                        value: "{draft.read().default_threshold}",
                        onchange: move |evt| {
                            if let Ok(t) = evt.value().parse::<u8>() {
                                draft.write().default_threshold = t;
                            }
                        },
                    }
                }
                div { style: ROW_STYLE,
                    span { "Annotation color" }
                    input {
                        r#type: "color",
                        value: "{draft.read().default_color}",
                        onchange: move |evt| {
                            if let Ok(color) = evt.value().parse::<Color>() {
                                draft.write().default_color = color;
                            }
                        },
                    }
                }
                div { style: ROW_STYLE,
                    span { "Thickness" }
                    input {
                        r#type: "number",
                        style: "width: 80px; {INPUT_STYLE} text-align: right;",
                        min: "{Thickness::MIN}",
                        max: "{Thickness::MAX}",
                        value: "{draft.read().default_thickness}",
                        onchange: move |evt| {
                            if let Ok(t) = evt.value().parse::<i64>()
                                && Thickness::new(t).is_ok()
                            {
                                draft.write().default_thickness = t as u8;
                            }
                        },
                    }
                }
                div { style: ROW_STYLE,
                    span { "Text" }
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        value: "{draft.read().default_text}",
                        onchange: move |evt| draft.write().default_text = evt.value(),
                    }
                }
                div { style: ROW_STYLE,
                    span { "Text scale" }
                    input {
                        r#type: "number",
                        step: "0.5",
                        style: "width: 80px; {INPUT_STYLE} text-align: right;",
                        value: "{draft.read().default_text_scale}",
                        onchange: move |evt| {
                            if let Ok(scale) = evt.value().parse::<f64>()
                                && let Ok(scale) = TextScale::new(scale)
                            {
                                draft.write().default_text_scale = scale.value();
                            }
                        },
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = draft.read().clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                state.write().config_saved(config);
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "ImageLab v0.1.0"
                    br {}
                    "Single-operation image workbench"
                    br {}
                    "Settings stored in {data_dir}"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn SettingRow(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { style: ROW_STYLE,
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| {
                    on_toggle.call(evt.checked());
                },
            }
        }
    }
}
