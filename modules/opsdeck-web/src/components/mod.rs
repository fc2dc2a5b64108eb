use dioxus::prelude::*;
use tracing::{debug, warn};

use opsdeck_common::highlight::highlight_segments;
use opsdeck_common::{
    Pillar, ProcessStatus, StageRecord, StagesDocument, TdrRecord, TdrTier,
};

pub mod flywheel;
pub mod layout;
pub mod legend;
pub mod login;
pub mod master_sheet;
pub mod rationale;
pub mod services;
pub mod tdr_accordion;

pub use flywheel::render_flywheel;
pub use login::render_login;
pub use master_sheet::render_master_sheet;
pub use rationale::render_rationale;
pub use services::render_services;

// --- View Models ---

/// Normalized stage shape consumed by the flywheel view.
#[derive(Clone, PartialEq)]
pub struct StageView {
    pub id: u32,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub color: String,
    pub text_color: String,
    pub engine: String,
    pub health: u32,
    pub people: PeopleView,
    pub process: Vec<ProcessView>,
    pub ai_data: AiDataView,
    pub required_support: Vec<SupportView>,
    /// Pillar id -> "task: desc", insertion order. Last write wins when two
    /// back-process items land on the same pillar.
    pub gateway: Vec<(String, String)>,
    /// Deduplicated pillar ids, insertion order. Always-on pillars excluded.
    pub active_pillars: Vec<String>,
}

#[derive(Clone, PartialEq)]
pub struct PeopleView {
    pub role: String,
    pub sub: String,
}

#[derive(Clone, PartialEq)]
pub struct ProcessView {
    pub name: String,
    pub status: ProcessStatus,
}

#[derive(Clone, PartialEq)]
pub struct AiDataView {
    pub rule: String,
    pub docs: Vec<String>,
    pub implication: String,
}

#[derive(Clone, PartialEq)]
pub struct SupportView {
    pub dept: String,
    pub task: String,
    pub desc: String,
}

/// Readiness record shaped for the accordion, shared by both page paths.
#[derive(Clone, PartialEq)]
pub struct TdrView {
    pub tier: TdrTier,
    pub target: String,
    pub rule: String,
    pub docs: Vec<String>,
    pub implication: String,
}

// --- Mapping ---

/// Map the whole document into ordered stage views. A document without a
/// `stages` field maps to the empty sequence; the page still renders.
pub fn map_stages(doc: &StagesDocument) -> Vec<StageView> {
    let Some(stages) = &doc.stages else {
        warn!("stages document is missing the `stages` field");
        return Vec::new();
    };
    stages.iter().map(stage_to_view).collect()
}

pub fn stage_to_view(stage: &StageRecord) -> StageView {
    let health = stage
        .tdr
        .as_ref()
        .and_then(|tdr| tdr.target.as_ref())
        .map(|target| {
            target.percent().unwrap_or_else(|| {
                warn!(
                    stage = stage.id.as_str(),
                    "readiness target did not parse as a percentage, defaulting to 0"
                );
                0
            })
        })
        .unwrap_or(0);

    let ai_data = match &stage.tdr {
        Some(tdr) => AiDataView {
            rule: tdr.rule.clone(),
            docs: tdr.documentation.clone(),
            implication: tdr.ai_implication.clone(),
        },
        None => AiDataView {
            rule: String::new(),
            docs: Vec::new(),
            implication: String::new(),
        },
    };

    let mut required_support = Vec::new();
    let mut gateway: Vec<(String, String)> = Vec::new();
    let mut active_pillars: Vec<String> = Vec::new();

    for item in &stage.back_process {
        let Some(pillar) = Pillar::from_department(&item.title) else {
            debug!(
                stage = stage.id.as_str(),
                department = item.title.as_str(),
                "department has no pillar mapping, dropped from gateway"
            );
            continue;
        };
        // CEO Office and Legal back every stage; the gateway only lists
        // stage-specific pillars.
        if pillar.is_always_on() {
            continue;
        }

        let pillar_id = pillar.id().to_string();
        if !active_pillars.contains(&pillar_id) {
            active_pillars.push(pillar_id.clone());
        }

        let (task, desc) = split_task_desc(&item.title, &item.desc);
        required_support.push(SupportView {
            dept: item.title.clone(),
            task: task.clone(),
            desc: desc.clone(),
        });

        let entry = format!("{task}: {desc}");
        match gateway.iter_mut().find(|(id, _)| *id == pillar_id) {
            Some((_, existing)) => *existing = entry,
            None => gateway.push((pillar_id, entry)),
        }
    }

    StageView {
        id: stage.step,
        name: stage.title.clone(),
        tagline: stage.promise.clone(),
        description: stage.description.clone(),
        color: stage.color.clone(),
        text_color: stage.text_color.clone(),
        engine: stage.engine.clone(),
        health,
        people: PeopleView {
            role: stage.people.experts.clone(),
            sub: stage.people.coordinators.clone(),
        },
        process: stage
            .processes
            .iter()
            .map(|p| ProcessView {
                name: p.name.clone(),
                status: ProcessStatus::from_raw(&p.status),
            })
            .collect(),
        ai_data,
        required_support,
        gateway,
        active_pillars,
    }
}

pub fn tdr_to_view(tdr: &TdrRecord) -> TdrView {
    TdrView {
        tier: TdrTier::from_number(tdr.tier),
        target: tdr
            .target
            .as_ref()
            .map(|t| t.display())
            .unwrap_or_else(|| "0%".to_string()),
        rule: tdr.rule.clone(),
        docs: tdr.documentation.clone(),
        implication: tdr.ai_implication.clone(),
    }
}

/// Derive a short task name from a support description. The description is
/// split on the first comma or colon; a non-empty prefix under 30 characters
/// becomes the task name and the remainder the detail text. Otherwise the
/// department title names the task and the full description is the detail.
/// Display heuristic only; no round-trip guarantee.
fn split_task_desc(title: &str, desc: &str) -> (String, String) {
    let (prefix, rest) = match desc.find([',', ':']) {
        Some(idx) => (&desc[..idx], &desc[idx + 1..]),
        None => (desc, ""),
    };
    let prefix = prefix.trim();
    if !prefix.is_empty() && prefix.chars().count() < 30 {
        let rest = rest.trim();
        let detail = if rest.is_empty() { desc } else { rest };
        (prefix.to_string(), detail.to_string())
    } else {
        (title.to_string(), desc.to_string())
    }
}

// --- Shared fragments ---

/// Free text with the configured role names emphasized.
#[allow(non_snake_case)]
#[component]
pub fn Highlight(text: String) -> Element {
    rsx! {
        span {
            for seg in highlight_segments(&text) {
                if seg.emphasized {
                    span { class: "text-red-800 font-bold", "{seg.text}" }
                } else {
                    "{seg.text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_common::{BackProcessItem, HealthTarget, People, ProcessItem};

    fn make_stage(step: u32, id: &str) -> StageRecord {
        StageRecord {
            step,
            id: id.to_string(),
            title: id.to_uppercase(),
            promise: "We deliver.".to_string(),
            description: "A stage.".to_string(),
            color: "#D6407D".to_string(),
            text_color: "white".to_string(),
            engine: "Define Engine".to_string(),
            engine_color: "#84cc16".to_string(),
            people: People {
                experts: "Strategists".to_string(),
                coordinators: "Project Coordinators".to_string(),
            },
            processes: vec![ProcessItem {
                name: "Brand Audit".to_string(),
                status: "active".to_string(),
            }],
            back_process: Vec::new(),
            tdr: None,
        }
    }

    fn back(title: &str, desc: &str) -> BackProcessItem {
        BackProcessItem {
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }

    #[test]
    fn output_length_and_order_match_input() {
        let doc = StagesDocument {
            stages: Some(vec![
                make_stage(3, "discover"),
                make_stage(1, "design"),
                make_stage(2, "deliver"),
            ]),
        };
        let views = map_stages(&doc);
        assert_eq!(views.len(), 3);
        assert_eq!(
            views.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn missing_stages_field_maps_to_empty() {
        let doc = StagesDocument { stages: None };
        assert!(map_stages(&doc).is_empty());
    }

    #[test]
    fn statuses_are_mapped_with_fallback() {
        let mut stage = make_stage(1, "discover");
        stage.processes = vec![
            ProcessItem { name: "a".into(), status: "new".into() },
            ProcessItem { name: "b".into(), status: "merge".into() },
            ProcessItem { name: "c".into(), status: "retired".into() },
        ];
        let view = stage_to_view(&stage);
        assert_eq!(view.process[0].status, ProcessStatus::New);
        assert_eq!(view.process[1].status, ProcessStatus::Merge);
        assert_eq!(view.process[2].status, ProcessStatus::Active);
    }

    #[test]
    fn health_comes_from_readiness_target() {
        let mut stage = make_stage(1, "discover");
        stage.tdr = Some(TdrRecord {
            tier: 1,
            target: Some(HealthTarget::Text("85%".to_string())),
            rule: String::new(),
            documentation: Vec::new(),
            ai_implication: String::new(),
        });
        assert_eq!(stage_to_view(&stage).health, 85);
    }

    #[test]
    fn missing_or_malformed_target_defaults_to_zero() {
        let stage = make_stage(1, "discover");
        assert_eq!(stage_to_view(&stage).health, 0);

        let mut stage = make_stage(2, "design");
        stage.tdr = Some(TdrRecord {
            tier: 2,
            target: Some(HealthTarget::Text("soon".to_string())),
            rule: String::new(),
            documentation: Vec::new(),
            ai_implication: String::new(),
        });
        assert_eq!(stage_to_view(&stage).health, 0);
    }

    #[test]
    fn gateway_collects_mapped_pillars_in_order() {
        let mut stage = make_stage(1, "discover");
        stage.back_process = vec![
            back("Finance", "Budget gate: approve production scope"),
            back("Marketing", "Launch brief, align channels"),
        ];
        let view = stage_to_view(&stage);
        assert_eq!(view.active_pillars, vec!["finance", "marketing"]);
        assert_eq!(
            view.gateway,
            vec![
                ("finance".to_string(), "Budget gate: approve production scope".to_string()),
                ("marketing".to_string(), "Launch brief: align channels".to_string()),
            ]
        );
    }

    #[test]
    fn gateway_last_write_wins_per_pillar() {
        let mut stage = make_stage(1, "discover");
        stage.back_process = vec![
            back("Finance", "Budget gate: approve scope"),
            back("Financial Health", "Cash check: verify runway"),
        ];
        let view = stage_to_view(&stage);
        // Both titles map to the finance pillar; one entry, second value.
        assert_eq!(view.active_pillars, vec!["finance"]);
        assert_eq!(view.gateway.len(), 1);
        assert_eq!(view.gateway[0].1, "Cash check: verify runway");
        // Both items still appear as support rows.
        assert_eq!(view.required_support.len(), 2);
    }

    #[test]
    fn always_on_pillars_are_not_stage_specific() {
        let mut stage = make_stage(1, "discover");
        stage.back_process = vec![
            back("Legal", "Contract review: standard terms"),
            back("CEO Office", "Signoff: final approval"),
            back("IT & Ops", "Access setup: provision tools"),
        ];
        let view = stage_to_view(&stage);
        assert_eq!(view.active_pillars, vec!["it"]);
        assert_eq!(view.gateway.len(), 1);
        assert_eq!(view.required_support.len(), 1);
    }

    #[test]
    fn unmapped_departments_are_dropped() {
        let mut stage = make_stage(1, "discover");
        stage.back_process = vec![back("Facilities", "Desk moves: reshuffle floor 2")];
        let view = stage_to_view(&stage);
        assert!(view.active_pillars.is_empty());
        assert!(view.gateway.is_empty());
        assert!(view.required_support.is_empty());
    }

    #[test]
    fn task_name_split_on_short_prefix() {
        let (task, desc) = split_task_desc("Finance", "Budget gate, approve production scope");
        assert_eq!(task, "Budget gate");
        assert_eq!(desc, "approve production scope");

        let (task, desc) = split_task_desc("Finance", "Budget gate: approve scope");
        assert_eq!(task, "Budget gate");
        assert_eq!(desc, "approve scope");
    }

    #[test]
    fn task_name_falls_back_to_title_on_long_prefix() {
        let long = "An extremely long leading clause well over thirty characters, with detail";
        let (task, desc) = split_task_desc("Finance", long);
        assert_eq!(task, "Finance");
        assert_eq!(desc, long);
    }

    #[test]
    fn task_split_without_separator_keeps_full_desc_as_detail() {
        let (task, desc) = split_task_desc("Finance", "Approve the budget");
        assert_eq!(task, "Approve the budget");
        assert_eq!(desc, "Approve the budget");
    }

    #[test]
    fn task_split_later_separators_stay_in_detail() {
        let (task, desc) = split_task_desc("Finance", "Budget gate, approve scope, then invoice");
        assert_eq!(task, "Budget gate");
        assert_eq!(desc, "approve scope, then invoice");
    }

    #[test]
    fn tdr_view_defaults_target_display() {
        let tdr = TdrRecord {
            tier: 7,
            target: None,
            rule: "Document it.".to_string(),
            documentation: vec!["Notes".to_string()],
            ai_implication: "Feeds the copilots.".to_string(),
        };
        let view = tdr_to_view(&tdr);
        assert_eq!(view.tier, TdrTier::Relational);
        assert_eq!(view.target, "0%");
    }
}
