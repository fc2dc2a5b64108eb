use dioxus::prelude::*;

struct NavItem {
    key: &'static str,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "sheet", label: "Operations Sheet", href: "/sheet" },
    NavItem { key: "flywheel", label: "The Flywheel", href: "/flywheel" },
    NavItem { key: "rationale", label: "Ops Rationale", href: "/rationale" },
    NavItem { key: "services", label: "Our Services", href: "/services" },
];

fn page_label(active_page: &str) -> &'static str {
    match active_page {
        "sheet" => "Operations Sheet v0.8",
        "rationale" => "Ops Rationale",
        "services" => "Our Services",
        _ => "The Flywheel v0.8",
    }
}

/// Page shell with the shared header: brand row, page label, and the
/// four-destination nav with an active-state marker plus logout.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, active_page: String, children: Element) -> Element {
    let full_title = format!("{title} — Opsdeck");
    let label = page_label(&active_page);
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-slate-50 font-sans text-slate-900",
            div { class: "max-w-7xl mx-auto px-4 md:px-8 py-8",
                header { class: "mb-12 border-b-2 border-slate-900 pb-6",
                    div { class: "flex flex-col md:flex-row justify-between items-start md:items-center mb-4 gap-4",
                        h1 { class: "text-4xl md:text-5xl font-bold text-slate-900 tracking-tight",
                            "Opsdeck"
                        }
                        div { class: "text-left md:text-right",
                            div { class: "text-xl md:text-2xl font-bold text-slate-900 italic",
                                "\"Truth. Delivered.\""
                            }
                            div { class: "text-slate-400 text-xs uppercase tracking-wider font-bold mt-1",
                                "One Team. One Process."
                            }
                        }
                    }
                    div { class: "flex flex-col md:flex-row items-start md:items-center gap-4 md:gap-6",
                        div { class: "text-slate-500 font-medium uppercase tracking-widest text-xs md:text-sm",
                            "{label}"
                        }
                        nav { class: "flex items-center gap-2 md:gap-3 text-xs flex-wrap",
                            for item in NAV_ITEMS.iter() {
                                {
                                    let class = if item.key == active_page {
                                        "px-3 py-1.5 rounded transition-colors bg-slate-900 text-white font-bold"
                                    } else {
                                        "px-3 py-1.5 rounded transition-colors text-slate-600 hover:bg-slate-100"
                                    };
                                    let href = item.href;
                                    let label = item.label;
                                    rsx! {
                                        a { href: href, class: class, "{label}" }
                                        span { class: "text-slate-300", "|" }
                                    }
                                }
                            }
                            form { method: "POST", action: "/logout", class: "inline",
                                button {
                                    r#type: "submit",
                                    class: "px-3 py-1.5 rounded transition-colors text-slate-600 hover:bg-slate-100 cursor-pointer border-0 bg-transparent",
                                    title: "Logout",
                                    "Logout"
                                }
                            }
                        }
                    }
                }
                {children}
            }
        }
    }
}
