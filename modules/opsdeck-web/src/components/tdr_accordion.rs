use dioxus::prelude::*;

use opsdeck_common::color::{darken_color, hex_to_rgba, parse_hex};

use super::TdrView;

/// Expansion state of one readiness accordion. Two states, flipped only by
/// explicit user action; the served page starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionState {
    Collapsed,
    Expanded,
}

impl AccordionState {
    pub fn toggle(self) -> Self {
        match self {
            AccordionState::Collapsed => AccordionState::Expanded,
            AccordionState::Expanded => AccordionState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == AccordionState::Expanded
    }
}

/// Client-side half of the toggle. Emitted once per page that carries
/// accordions; flips the same attributes the server renders.
pub const TOGGLE_SCRIPT: &str = r#"
function toggleReadiness(id) {
    const root = document.querySelector(`[data-accordion-id="${id}"]`);
    if (!root) return;
    const button = root.querySelector('.tdr-toggle');
    const content = root.querySelector('.tdr-content');
    const icon = root.querySelector('.tdr-icon');
    const expanded = button.getAttribute('aria-expanded') === 'true';
    const tint = root.dataset.tint || 'transparent';
    if (expanded) {
        content.classList.add('hidden');
        button.setAttribute('aria-expanded', 'false');
        icon.style.transform = 'rotate(0deg)';
        button.style.backgroundColor = 'transparent';
        root.style.backgroundColor = 'white';
    } else {
        content.classList.remove('hidden');
        button.setAttribute('aria-expanded', 'true');
        icon.style.transform = 'rotate(180deg)';
        button.style.backgroundColor = tint;
        root.style.backgroundColor = tint;
    }
}
"#;

/// Readiness accordion. Accent colors derive from the stage color when one
/// is supplied (and parses); the tier palette is the fallback.
#[allow(non_snake_case)]
#[component]
pub fn TdrCard(
    tdr: TdrView,
    accordion_id: String,
    stage_color: Option<String>,
    state: AccordionState,
) -> Element {
    let palette = tdr.tier.palette();
    // Malformed stage colors are rejected up front; the tier palette covers.
    let accent = stage_color.as_deref().filter(|c| parse_hex(c).is_some());

    let border_color = accent.map(str::to_string).unwrap_or_else(|| palette.border.to_string());
    let percentage_color = accent
        .and_then(|c| darken_color(c, 30))
        .unwrap_or_else(|| border_color.clone());
    let tint = accent
        .and_then(|c| hex_to_rgba(c, 0.08))
        .unwrap_or_else(|| palette.background.to_string());

    let expanded = state.is_expanded();
    let background = if expanded { tint.clone() } else { "white".to_string() };
    let button_background = if expanded { tint.clone() } else { "transparent".to_string() };
    let icon_rotation = if expanded { "rotate(180deg)" } else { "rotate(0deg)" };
    let content_class = if expanded {
        "tdr-content px-3 pb-3 space-y-3"
    } else {
        "tdr-content hidden px-3 pb-3 space-y-3"
    };
    let content_id = format!("tdr-content-{accordion_id}");
    let tier_number = tdr.tier.number();
    let toggle = format!("toggleReadiness('{accordion_id}')");

    rsx! {
        div {
            class: "tdr-accordion mt-4 rounded-lg border-2 overflow-hidden transition-all duration-300",
            style: "border-color: {border_color}; background-color: {background};",
            "data-accordion-id": "{accordion_id}",
            "data-tier": "{tier_number}",
            "data-tint": "{tint}",
            button {
                class: "tdr-toggle w-full flex items-center justify-between p-3 text-left transition-colors",
                style: "background-color: {button_background};",
                "onclick": "{toggle}",
                aria_expanded: "{expanded}",
                aria_controls: "{content_id}",
                div { class: "flex items-center gap-2",
                    span { class: "text-xs font-semibold text-slate-700",
                        "Documentation Standard ("
                        span { class: "font-bold", style: "color: {percentage_color};", "{tdr.target}" }
                        ") and AI Potential"
                    }
                }
                span {
                    class: "tdr-icon text-slate-400 transition-transform duration-300 text-xs",
                    style: "transform: {icon_rotation};",
                    "▼"
                }
            }
            div { id: "{content_id}", class: content_class,
                div { class: "bg-slate-50 rounded p-3 border border-slate-200",
                    h4 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-1",
                        "The Rule"
                    }
                    p { class: "text-xs text-slate-700 leading-relaxed", "\"{tdr.rule}\"" }
                }
                div { class: "bg-slate-50 rounded p-3 border border-slate-200",
                    h4 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-2",
                        "What to Document"
                    }
                    ul { class: "space-y-1.5",
                        for item in tdr.docs.iter() {
                            li { class: "text-xs text-slate-700 flex items-start gap-2",
                                span { class: "font-bold mt-0.5", style: "color: {border_color};", "•" }
                                span { "{item}" }
                            }
                        }
                    }
                }
                div { class: "bg-slate-50 rounded p-3 border border-slate-200",
                    h4 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-1",
                        "The AI Implication"
                    }
                    p { class: "text-xs text-slate-700 leading-relaxed", "{tdr.implication}" }
                }
            }
        }
    }
}
