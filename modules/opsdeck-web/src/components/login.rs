use dioxus::prelude::*;

use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn PasswordForm(error: Option<String>) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Welcome — Opsdeck" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "flex items-center justify-center min-h-screen bg-slate-50 font-sans text-slate-900",
            div { class: "w-full max-w-sm bg-white border border-slate-200 rounded-lg p-8",
                h2 { class: "text-xl font-semibold mb-1", "Welcome" }
                p { class: "text-slate-500 text-sm mb-4",
                    "Enter the team password to open the playbook."
                }
                if let Some(err) = &error {
                    div { class: "bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-4",
                        "{err}"
                    }
                }
                form { method: "POST", action: "/login",
                    label { r#for: "password", class: "block text-sm text-slate-500 mb-1",
                        "Password"
                    }
                    input {
                        r#type: "password", name: "password", id: "password", required: true,
                        class: "w-full px-3 py-2.5 border border-slate-300 rounded text-base mb-3",
                        autofocus: true
                    }
                    button {
                        r#type: "submit",
                        class: "w-full py-2.5 bg-slate-900 text-white rounded text-sm font-medium cursor-pointer hover:bg-slate-700",
                        "Enter"
                    }
                }
            }
        }
    }
}

pub fn render_login(error: Option<String>) -> String {
    let mut dom = VirtualDom::new_with_props(PasswordForm, PasswordFormProps { error });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_renders_password_form() {
        let html = render_login(None);
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("action=\"/login\""));
        assert!(!html.contains("Incorrect password"));
    }

    #[test]
    fn login_shows_error_when_present() {
        let html = render_login(Some("Incorrect password.".to_string()));
        assert!(html.contains("Incorrect password."));
    }
}
