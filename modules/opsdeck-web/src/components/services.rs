use dioxus::prelude::*;

use super::layout::Layout;
use crate::templates::render_to_html;

const SERVICES: &[(&str, &str)] = &[
    (
        "Brand Strategy",
        "Positioning, audience research, and the narrative the rest of the work hangs on.",
    ),
    (
        "Campaign Production",
        "Concept through delivery across film, stills, and digital, run by the production engine.",
    ),
    (
        "Content & Social",
        "Always-on editorial and channel management with a defined approval path.",
    ),
    (
        "Design Systems",
        "Identity systems and design languages built to be handed over, not just shipped.",
    ),
    (
        "Media & Distribution",
        "Planning and placement tied back to the same measurement the flywheel reports.",
    ),
    (
        "Insights & Measurement",
        "Reporting that closes the loop: what ran, what moved, what to change next cycle.",
    ),
];

#[allow(non_snake_case)]
#[component]
fn Services() -> Element {
    rsx! {
        Layout { title: "Our Services".to_string(), active_page: "services".to_string(),
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for (name, desc) in SERVICES.iter() {
                    div { class: "bg-white rounded-xl border border-slate-200 shadow-sm p-6",
                        h2 { class: "text-lg font-bold text-slate-900 mb-2", "{name}" }
                        p { class: "text-sm text-slate-600 leading-relaxed", "{desc}" }
                    }
                }
            }
        }
    }
}

pub fn render_services() -> String {
    let mut dom = VirtualDom::new(Services);
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_renders_every_offering() {
        let html = render_services();
        for (name, _) in SERVICES {
            assert!(html.contains(name), "missing service {name}");
        }
    }
}
