use dioxus::prelude::*;

use opsdeck_common::{Pillar, ProcessStatus};

use super::layout::Layout;
use super::legend::Legend;
use super::StageView;
use crate::templates::render_to_html;

fn status_chip_class(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::New => "inline-block px-1.5 py-0.5 rounded text-[10px] font-bold bg-indigo-600 text-white",
        ProcessStatus::Active => "inline-block px-1.5 py-0.5 rounded text-[10px] font-bold bg-green-600 text-white",
        ProcessStatus::Merge => "inline-block px-1.5 py-0.5 rounded text-[10px] font-bold bg-red-700 text-white",
        ProcessStatus::Todo => "inline-block px-1.5 py-0.5 rounded text-[10px] font-bold bg-orange-600 text-white",
    }
}

fn status_chip_label(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::New => "NEW",
        ProcessStatus::Active => "Active",
        ProcessStatus::Merge => "Merge",
        ProcessStatus::Todo => "To implement",
    }
}

/// Support-pillar rail for one stage: every pillar, with the stage-specific
/// ones lit and the always-on ones marked. The gateway entry for a pillar
/// becomes its hover title.
#[allow(non_snake_case)]
#[component]
fn PillarRail(
    active_pillars: Vec<String>,
    gateway: Vec<(String, String)>,
    accent: String,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-1.5",
            for pillar in Pillar::ALL.iter() {
                {
                    let active = pillar.is_always_on()
                        || active_pillars.iter().any(|id| id == pillar.id());
                    let class = if active {
                        "px-2 py-1 rounded text-[10px] font-bold uppercase tracking-wider text-white"
                    } else {
                        "px-2 py-1 rounded text-[10px] font-bold uppercase tracking-wider bg-slate-100 text-slate-400"
                    };
                    let style = if active {
                        format!("background-color: {accent};")
                    } else {
                        String::new()
                    };
                    let title = gateway
                        .iter()
                        .find(|(id, _)| id == pillar.id())
                        .map(|(_, entry)| entry.clone())
                        .unwrap_or_default();
                    let label = pillar.label();
                    let suffix = if pillar.is_always_on() { " *" } else { "" };
                    rsx! {
                        span { class: class, style: "{style}", title: "{title}", "{label}{suffix}" }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn FlywheelStage(view: StageView) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl border-l-8 shadow-sm p-6 mb-6",
            style: "border-color: {view.color};",
            div { class: "flex items-center justify-between mb-2",
                div { class: "flex items-center gap-3",
                    span { class: "bg-slate-100 text-slate-500 text-[10px] font-bold px-2 py-1 rounded uppercase tracking-wider",
                        "Step {view.id}"
                    }
                    h2 { class: "text-2xl font-bold text-slate-900", "{view.name}" }
                }
                span { class: "text-xs text-slate-400 uppercase tracking-wider font-bold", "{view.engine}" }
            }
            p { class: "text-sm italic text-slate-600 mb-1", "\"{view.tagline}\"" }
            p { class: "text-xs text-slate-500 mb-4", "{view.description}" }

            // Documentation readiness
            div { class: "mb-4",
                div { class: "flex justify-between text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-1",
                    span { "Documentation Readiness" }
                    span { "{view.health}%" }
                }
                div { class: "h-2 bg-slate-100 rounded overflow-hidden",
                    div { class: "h-full rounded",
                        style: "width: {view.health}%; background-color: {view.color};",
                    }
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                // People
                div {
                    h3 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-2", "Who Runs It" }
                    p { class: "text-xs font-medium text-slate-700", "{view.people.role}" }
                    p { class: "text-xs text-slate-500 mt-1", "{view.people.sub}" }
                }

                // Processes
                div {
                    h3 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-2", "Front Processes" }
                    ul { class: "space-y-1.5",
                        for proc in view.process.iter() {
                            li { class: "flex items-center justify-between gap-2 text-xs text-slate-700",
                                "{proc.name}"
                                span { class: status_chip_class(proc.status), "{status_chip_label(proc.status)}" }
                            }
                        }
                    }
                }

                // Support gateway
                div {
                    h3 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-2", "Support Gateway" }
                    PillarRail {
                        active_pillars: view.active_pillars.clone(),
                        gateway: view.gateway.clone(),
                        accent: view.color.clone(),
                    }
                    div { class: "mt-2 space-y-1",
                        for support in view.required_support.iter() {
                            p { class: "text-[11px] text-slate-600",
                                span { class: "font-bold text-slate-700", "{support.task}" }
                                ": {support.desc}"
                            }
                        }
                    }
                }
            }

            if !view.ai_data.rule.is_empty() || !view.ai_data.implication.is_empty() {
                div { class: "mt-4 bg-slate-50 rounded p-3 border border-slate-200",
                    h3 { class: "text-[10px] font-bold text-slate-400 uppercase tracking-wider mb-1", "AI Potential" }
                    if !view.ai_data.rule.is_empty() {
                        p { class: "text-xs text-slate-700 leading-relaxed", "\"{view.ai_data.rule}\"" }
                    }
                    if !view.ai_data.implication.is_empty() {
                        p { class: "text-xs text-slate-500 leading-relaxed mt-1", "{view.ai_data.implication}" }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Flywheel(views: Vec<StageView>) -> Element {
    rsx! {
        Layout { title: "The Flywheel".to_string(), active_page: "flywheel".to_string(),
            if views.is_empty() {
                p { class: "text-slate-400 text-center py-10",
                    "No stages in the model yet. Check the stages document."
                }
            } else {
                // The wheel: every stage in order, colored by its accent.
                div { class: "flex flex-wrap items-center gap-2 mb-8",
                    for (idx, view) in views.iter().enumerate() {
                        if idx > 0 {
                            span { class: "text-slate-300 text-xs", "→" }
                        }
                        span { class: "px-3 py-1.5 rounded-full text-xs font-bold",
                            style: "background-color: {view.color}; color: {view.text_color};",
                            "{view.name}"
                        }
                    }
                }
                div {
                    for view in views.iter() {
                        FlywheelStage { view: view.clone() }
                    }
                }
            }
            Legend {}
        }
    }
}

pub fn render_flywheel(views: Vec<StageView>) -> String {
    let mut dom = VirtualDom::new_with_props(Flywheel, FlywheelProps { views });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AiDataView, PeopleView, ProcessView, SupportView};

    fn make_view(id: u32, name: &str) -> StageView {
        StageView {
            id,
            name: name.to_string(),
            tagline: "We see you.".to_string(),
            description: "Find the truth.".to_string(),
            color: "#D6407D".to_string(),
            text_color: "white".to_string(),
            engine: "Define Engine".to_string(),
            health: 85,
            people: PeopleView {
                role: "Strategists".to_string(),
                sub: "Project Coordinators".to_string(),
            },
            process: vec![ProcessView {
                name: "Brand Audit".to_string(),
                status: ProcessStatus::Merge,
            }],
            ai_data: AiDataView {
                rule: "Document every call.".to_string(),
                docs: vec![],
                implication: "Feeds the copilots.".to_string(),
            },
            required_support: vec![SupportView {
                dept: "Finance".to_string(),
                task: "Budget gate".to_string(),
                desc: "approve scope".to_string(),
            }],
            gateway: vec![(
                "finance".to_string(),
                "Budget gate: approve scope".to_string(),
            )],
            active_pillars: vec!["finance".to_string()],
        }
    }

    #[test]
    fn flywheel_renders_stages_in_order() {
        let html = render_flywheel(vec![make_view(1, "DISCOVER"), make_view(2, "DESIGN")]);
        let first = html.find("DISCOVER").unwrap();
        let second = html.find("DESIGN").unwrap();
        assert!(first < second);
        assert!(html.contains("width: 85%"));
    }

    #[test]
    fn gateway_entry_titles_the_pillar_chip() {
        let html = render_flywheel(vec![make_view(1, "DISCOVER")]);
        assert!(html.contains("title=\"Budget gate: approve scope\""));
    }

    #[test]
    fn support_rows_render_task_and_detail() {
        let html = render_flywheel(vec![make_view(1, "DISCOVER")]);
        assert!(html.contains("Budget gate"));
        assert!(html.contains("approve scope"));
    }

    #[test]
    fn always_on_pillars_are_marked() {
        let html = render_flywheel(vec![make_view(1, "DISCOVER")]);
        assert!(html.contains("CEO Office *"));
        assert!(html.contains("Legal *"));
    }

    #[test]
    fn process_status_chips_render() {
        let html = render_flywheel(vec![make_view(1, "DISCOVER")]);
        assert!(html.contains("Merge"));
        assert!(html.contains("bg-red-700"));
    }

    #[test]
    fn empty_model_shows_empty_state() {
        let html = render_flywheel(Vec::new());
        assert!(html.contains("No stages in the model yet"));
    }
}
