use dioxus::prelude::*;

use opsdeck_common::TdrTier;

use super::layout::Layout;
use crate::templates::render_to_html;

const TIERS: [TdrTier; 3] = [TdrTier::Relational, TdrTier::Strategic, TdrTier::Compliance];

#[allow(non_snake_case)]
#[component]
fn Rationale() -> Element {
    rsx! {
        Layout { title: "Ops Rationale".to_string(), active_page: "rationale".to_string(),
            div { class: "max-w-3xl space-y-8",
                div { class: "bg-white rounded-xl border border-slate-200 shadow-sm p-6 md:p-8",
                    h2 { class: "text-2xl font-bold text-slate-900 mb-3", "Why One Pipeline" }
                    p { class: "text-sm text-slate-600 leading-relaxed",
                        "Every engagement moves through the same ordered stages. One pipeline means one vocabulary: when a stage is named, everyone knows who runs it, which processes carry it, and which support functions gate it. The sheet is the single source of that vocabulary."
                    }
                }
                div { class: "bg-white rounded-xl border border-slate-200 shadow-sm p-6 md:p-8",
                    h2 { class: "text-2xl font-bold text-slate-900 mb-3", "Front and Back Processes" }
                    p { class: "text-sm text-slate-600 leading-relaxed",
                        "Front processes are the client-visible craft of a stage. Back processes are the support work behind it — finance gates, people moves, tooling. Splitting them keeps the craft list honest and makes the support load visible instead of implied."
                    }
                }
                div { class: "bg-white rounded-xl border border-slate-200 shadow-sm p-6 md:p-8",
                    h2 { class: "text-2xl font-bold text-slate-900 mb-3", "Documentation Readiness Tiers" }
                    p { class: "text-sm text-slate-600 leading-relaxed mb-4",
                        "Each stage carries a documentation standard with a target. The tier says what kind of documentation matters there and what it unlocks."
                    }
                    div { class: "space-y-2",
                        for tier in TIERS.iter() {
                            {
                                let palette = tier.palette();
                                let number = tier.number();
                                let label = tier.label();
                                rsx! {
                                    div { class: "flex items-center gap-3",
                                        span { class: "px-2 py-1 rounded text-[10px] font-bold text-white",
                                            style: "background-color: {palette.badge};",
                                            "Tier {number}"
                                        }
                                        span { class: "text-xs font-medium",
                                            style: "color: {palette.text};",
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "bg-white rounded-xl border border-slate-200 shadow-sm p-6 md:p-8",
                    h2 { class: "text-2xl font-bold text-slate-900 mb-3", "Pillars as a Gateway" }
                    p { class: "text-sm text-slate-600 leading-relaxed",
                        "Support departments are normalized into a fixed set of pillars. A stage lights up only the pillars it actually needs; CEO Office and Legal back every stage and are never listed as stage-specific. That keeps the gateway view small enough to read at a glance."
                    }
                }
            }
        }
    }
}

pub fn render_rationale() -> String {
    let mut dom = VirtualDom::new(Rationale);
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rationale_lists_all_three_tiers() {
        let html = render_rationale();
        assert!(html.contains("Tier 1"));
        assert!(html.contains("Tier 2"));
        assert!(html.contains("Tier 3"));
        assert!(html.contains("Agile &amp; Relational") || html.contains("Agile & Relational"));
    }
}
