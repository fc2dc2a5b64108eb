use dioxus::prelude::*;

use opsdeck_common::StageRecord;

use super::layout::Layout;
use super::legend::Legend;
use super::tdr_accordion::{AccordionState, TdrCard, TOGGLE_SCRIPT};
use super::{tdr_to_view, Highlight};
use crate::templates::render_to_html;

/// Badge shown next to a front process. Keyed on the raw status code;
/// unrecognized codes get no badge.
fn status_badge(raw: &str) -> Option<(&'static str, &'static str)> {
    match raw {
        "new" => Some(("NEW", "text-[10px] bg-indigo-600 text-white px-1.5 py-0.5 rounded")),
        "active" => Some(("Active", "text-[10px] bg-green-600 text-white px-1.5 py-0.5 rounded")),
        "merge" => Some(("Merge", "text-[10px] bg-red-700 text-white px-1.5 py-0.5 rounded")),
        "todo" => Some(("To implement", "text-[10px] bg-orange-600 text-white px-1.5 py-0.5 rounded")),
        _ => None,
    }
}

/// List-item styling for a front process. Unrecognized codes use the
/// active style.
fn process_item_class(raw: &str) -> &'static str {
    match raw {
        "new" => "flex items-center justify-between text-sm font-medium text-slate-700 bg-indigo-50 border-indigo-200 p-3 rounded border shadow-sm",
        "merge" => "flex items-center justify-between text-sm font-medium text-slate-700 bg-red-50 border-red-200 p-3 rounded border shadow-sm",
        "todo" => "flex items-center justify-between text-sm font-medium text-slate-700 bg-orange-50 border-orange-200 p-3 rounded border shadow-sm",
        _ => "flex items-center justify-between text-sm font-medium text-slate-700 bg-white p-3 rounded border border-slate-100 shadow-sm",
    }
}

/// Text class for the engine tag. The three house engine colors map to
/// fixed classes; anything else passes through as an arbitrary-value class.
fn engine_color_class(engine_color: &str) -> String {
    match engine_color {
        "#84cc16" => "text-[#84cc16]".to_string(),
        "#231F20" => "text-slate-800".to_string(),
        "#A6A8AB" => "text-slate-500".to_string(),
        other => format!("text-[{other}]"),
    }
}

#[allow(non_snake_case)]
#[component]
fn StageCard(stage: StageRecord) -> Element {
    let engine_class = format!(
        "text-[10px] font-bold {} uppercase tracking-wider",
        engine_color_class(&stage.engine_color)
    );
    let accordion_id = format!("{}-{}", stage.id, stage.step);

    rsx! {
        div { class: "bg-white rounded-xl border-l-8 shadow-sm overflow-hidden",
            style: "border-color: {stage.color};",
            div { class: "p-6 md:p-8 grid grid-cols-1 lg:grid-cols-5 gap-8",
                // Identity
                div { class: "lg:col-span-1 border-b lg:border-b-0 lg:border-r border-slate-100 pb-6 lg:pb-0",
                    div { class: "flex items-center gap-3 mb-2",
                        span { class: "bg-slate-100 text-slate-500 text-[10px] font-bold px-2 py-1 rounded uppercase tracking-wider",
                            "Step {stage.step}"
                        }
                        span { class: "{engine_class}", "{stage.engine}" }
                    }
                    h2 { class: "text-4xl font-bold text-slate-900 mb-2", "{stage.title}" }
                    p { class: "text-xl italic text-slate-600 mb-4", "\"{stage.promise}\"" }
                    p { class: "text-sm text-slate-500 leading-relaxed", "{stage.description}" }
                }

                // Our People
                div { class: "lg:col-span-1",
                    h3 { class: "text-xs font-bold text-slate-400 uppercase tracking-wider mb-3 flex items-center gap-2",
                        span { class: "w-2 h-2 rounded-full", style: "background-color: {stage.color};" }
                        "Our People"
                    }
                    div { class: "bg-slate-50 rounded-lg p-4 border border-slate-100 space-y-4",
                        div { class: "bg-white p-3 rounded border border-slate-200 shadow-sm",
                            div { class: "text-[10px] font-bold text-slate-400 uppercase mb-1", "The Experts" }
                            div { class: "text-xs font-medium text-slate-700",
                                Highlight { text: stage.people.experts.clone() }
                            }
                        }
                        div { class: "bg-white p-3 rounded border border-slate-200 shadow-sm",
                            div { class: "text-[10px] font-bold text-slate-400 uppercase mb-1", "The Coordinators" }
                            div { class: "text-xs font-medium text-slate-700",
                                Highlight { text: stage.people.coordinators.clone() }
                            }
                        }
                    }
                }

                // The Front Processes
                div { class: "lg:col-span-2",
                    h3 { class: "text-xs font-bold text-slate-400 uppercase tracking-wider mb-3 flex items-center gap-2",
                        span { class: "w-2 h-2 rounded-full", style: "background-color: {stage.color};" }
                        "The Front Processes"
                    }
                    div { class: "bg-slate-50 rounded-lg p-4 border border-slate-100",
                        ul { class: "space-y-2",
                            for proc in stage.processes.iter() {
                                li { class: process_item_class(&proc.status),
                                    "{proc.name}"
                                    if let Some((label, class)) = status_badge(&proc.status) {
                                        span { class: class, "{label}" }
                                    }
                                }
                            }
                        }
                        div { class: "mt-3",
                            span { class: "inline-block px-2 py-1 bg-slate-100 text-slate-500 text-[10px] font-bold uppercase tracking-wider rounded border border-slate-200",
                                "Engine: {stage.engine}"
                            }
                        }
                        if let Some(tdr) = &stage.tdr {
                            TdrCard {
                                tdr: tdr_to_view(tdr),
                                accordion_id: accordion_id.clone(),
                                stage_color: Some(stage.color.clone()),
                                state: AccordionState::Collapsed,
                            }
                        }
                    }
                }

                // The Back Process
                div { class: "lg:col-span-1",
                    h3 { class: "text-xs font-bold text-slate-400 uppercase tracking-wider mb-3 flex items-center gap-2",
                        span { class: "w-2 h-2 rounded-full", style: "background-color: {stage.color};" }
                        "The Back Process"
                    }
                    div { class: "bg-slate-50 rounded-lg p-4 border border-slate-100 space-y-4",
                        for item in stage.back_process.iter() {
                            div { class: "bg-white p-3 rounded border border-slate-200 shadow-sm",
                                div { class: "text-[10px] font-bold text-slate-400 uppercase mb-1",
                                    Highlight { text: item.title.clone() }
                                }
                                div { class: "text-xs font-medium text-slate-700", "{item.desc}" }
                            }
                        }
                        div { class: "mt-3",
                            span { class: "inline-block px-2 py-1 bg-slate-100 text-slate-500 text-[10px] font-bold uppercase tracking-wider rounded border border-slate-200",
                                "Engine: Support Engine"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn MasterSheet(stages: Vec<StageRecord>) -> Element {
    rsx! {
        Layout { title: "Operations Sheet".to_string(), active_page: "sheet".to_string(),
            div { class: "space-y-8",
                for stage in stages.iter() {
                    StageCard { stage: stage.clone() }
                }
            }
            Legend {}
            script { dangerous_inner_html: TOGGLE_SCRIPT }
        }
    }
}

pub fn render_master_sheet(stages: Vec<StageRecord>) -> String {
    let mut dom = VirtualDom::new_with_props(MasterSheet, MasterSheetProps { stages });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use opsdeck_common::{HealthTarget, People, ProcessItem, TdrRecord};

    use super::*;

    fn make_stage(step: u32, id: &str) -> StageRecord {
        StageRecord {
            step,
            id: id.to_string(),
            title: id.to_uppercase(),
            promise: "We see you.".to_string(),
            description: "Find the truth.".to_string(),
            color: "#D6407D".to_string(),
            text_color: "white".to_string(),
            engine: "Define Engine".to_string(),
            engine_color: "#84cc16".to_string(),
            people: People {
                experts: "Strategists".to_string(),
                coordinators: "Project Coordinators".to_string(),
            },
            processes: Vec::new(),
            back_process: Vec::new(),
            tdr: None,
        }
    }

    #[test]
    fn badge_variants_and_fallbacks() {
        assert_eq!(status_badge("new").unwrap().0, "NEW");
        assert_eq!(status_badge("active").unwrap().0, "Active");
        assert_eq!(status_badge("merge").unwrap().0, "Merge");
        assert_eq!(status_badge("todo").unwrap().0, "To implement");
        // Unrecognized: no badge, but the active item style.
        assert_eq!(status_badge("retired"), None);
        assert!(process_item_class("retired").contains("bg-white"));
        assert!(process_item_class("merge").contains("bg-red-50"));
    }

    #[test]
    fn engine_colors_map_to_house_classes() {
        assert_eq!(engine_color_class("#84cc16"), "text-[#84cc16]");
        assert_eq!(engine_color_class("#231F20"), "text-slate-800");
        assert_eq!(engine_color_class("#A6A8AB"), "text-slate-500");
        assert_eq!(engine_color_class("#123456"), "text-[#123456]");
    }

    #[test]
    fn sheet_renders_stages_in_order_with_badges() {
        let mut first = make_stage(1, "discover");
        first.processes = vec![
            ProcessItem { name: "Brand Audit".into(), status: "active".into() },
            ProcessItem { name: "Signal Scan".into(), status: "new".into() },
        ];
        let second = make_stage(2, "design");

        let html = render_master_sheet(vec![first, second]);
        let discover = html.find("DISCOVER").unwrap();
        let design = html.find("DESIGN").unwrap();
        assert!(discover < design);
        assert!(html.contains("Step 1"));
        assert!(html.contains("Brand Audit"));
        assert!(html.contains(">NEW<"));
        assert!(html.contains(">Active<"));
    }

    #[test]
    fn sheet_highlights_role_names_in_people() {
        let html = render_master_sheet(vec![make_stage(1, "discover")]);
        assert!(html.contains("text-red-800 font-bold"));
        assert!(html.contains("Project Coordinators"));
    }

    #[test]
    fn stage_with_tdr_gets_a_collapsed_accordion_and_script() {
        let mut stage = make_stage(1, "discover");
        stage.tdr = Some(TdrRecord {
            tier: 2,
            target: Some(HealthTarget::Text("85%".to_string())),
            rule: "Document every call.".to_string(),
            documentation: vec!["Call notes".to_string()],
            ai_implication: "Feeds the copilots.".to_string(),
        });
        let html = render_master_sheet(vec![stage]);
        assert!(html.contains("data-accordion-id=\"discover-1\""));
        assert!(html.contains("data-tier=\"2\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("toggleReadiness"));
    }

    #[test]
    fn stage_without_tdr_has_no_accordion() {
        let html = render_master_sheet(vec![make_stage(1, "discover")]);
        assert!(!html.contains("data-accordion-id"));
    }

    #[test]
    fn sheet_includes_legend() {
        let html = render_master_sheet(vec![make_stage(1, "discover")]);
        assert!(html.contains("Legend"));
        assert!(html.contains("To implement"));
    }
}
