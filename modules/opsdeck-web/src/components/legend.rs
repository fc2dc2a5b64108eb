use dioxus::prelude::*;

const STATUS_ENTRIES: &[(&str, &str, &str)] = &[
    (
        "NEW",
        "inline-block px-2 py-1 bg-indigo-600 text-white text-[10px] font-bold rounded mt-0.5",
        "Process is documented but still very new and not fully functional and implemented.",
    ),
    (
        "Active",
        "inline-block px-2 py-1 bg-green-600 text-white text-[10px] font-bold rounded mt-0.5",
        "Process is fully functional and actively in use.",
    ),
    (
        "Merge",
        "inline-block px-2 py-1 bg-red-700 text-white text-[10px] font-bold rounded mt-0.5",
        "These processes must be merged under the same roof with the same approach but with different business rules to accommodate the difference between production and creative.",
    ),
    (
        "To implement",
        "inline-block px-2 py-1 bg-orange-600 text-white text-[10px] font-bold rounded mt-0.5",
        "Process is planned but not yet implemented.",
    ),
];

/// Legend block shared by the sheet and flywheel pages: what the red-bold
/// role names mean, the four process statuses, and the support-engine notes.
#[allow(non_snake_case)]
#[component]
pub fn Legend() -> Element {
    rsx! {
        div { class: "bg-white rounded-xl border border-slate-200 shadow-sm p-6 md:p-8 mt-12",
            h3 { class: "text-lg font-bold text-slate-900 mb-4", "Legend" }
            div { class: "space-y-6",
                div {
                    h4 { class: "text-sm font-bold text-slate-700 mb-3 flex items-center gap-2",
                        span { class: "text-red-800 font-bold", "Red Bold Functions" }
                    }
                    p { class: "text-xs text-slate-600 leading-relaxed mb-2",
                        span { class: "text-red-800 font-bold",
                            "Marketing, Account Management, Project Coordinators, and Producers"
                        }
                        " are important functions, but some are missing and others need an updated view. You'll gain efficiency once the team defines these roles clearly and aligns how they work together."
                    }
                }
                div {
                    h4 { class: "text-sm font-bold text-slate-700 mb-3", "Process Status" }
                    div { class: "space-y-2",
                        for (label, badge_class, desc) in STATUS_ENTRIES.iter() {
                            div { class: "flex items-start gap-3",
                                span { class: *badge_class, "{label}" }
                                p { class: "text-xs text-slate-600 leading-relaxed flex-1", "{desc}" }
                            }
                        }
                    }
                }
                div {
                    h4 { class: "text-sm font-bold text-slate-700 mb-3", "Account Services (AS) Function Split" }
                    p { class: "text-xs text-slate-600 leading-relaxed",
                        span { class: "text-red-800 font-bold", "AS (Account Services)" }
                        " is too large as a function that is putting too much pressure on the support structure. Dividing the function into "
                        span { class: "text-red-800 font-bold", "Account Management" }
                        " (with skills to manage clients) vs "
                        span { class: "text-red-800 font-bold", "Project Coordinators" }
                        " (with skills to manage projects) will bring more clarity and less friction."
                    }
                }
                div {
                    h4 { class: "text-sm font-bold text-slate-700 mb-3", "Support Engine" }
                    p { class: "text-xs text-slate-600 leading-relaxed mb-3",
                        span { class: "text-slate-900 font-bold",
                            "(*) Support Engine Process in documentation stage"
                        }
                    }
                    div { class: "space-y-2 text-xs text-slate-600",
                        p {
                            "Total Headcount: "
                            span { class: "text-slate-900 font-medium", "90" }
                            " (Full time and Freelancers)"
                        }
                        p {
                            "Support Team Resources: "
                            span { class: "text-slate-900 font-medium", "8" }
                            " (excl. Account Management)"
                        }
                    }
                }
            }
        }
    }
}
