use dioxus::prelude::*;

use crate::core::subscription::EmailField;

/// Single-field email capture. `on_submit` receives the trimmed address; an
/// empty field submits nothing and keeps its contents.
#[component]
pub fn SubscriptionForm(on_submit: EventHandler<String>) -> Element {
    let mut field = use_signal(EmailField::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = field.with_mut(|f| f.submit());
        if let Some(email) = submitted {
            on_submit.call(email);
        }
    };

    rsx! {
        form { class: "subscribe", role: "form", onsubmit: handle_submit,
            div { class: "subscribe__group",
                span { class: "subscribe__icon", aria_hidden: "true", "✉" }
                input {
                    r#type: "email",
                    required: true,
                    class: "subscribe__input",
                    placeholder: "Enter your email to get updates",
                    aria_label: "Email for updates",
                    value: "{field.read().value()}",
                    oninput: move |evt: FormEvent| field.write().set(evt.value()),
                }
                button { r#type: "submit", class: "button button--primary subscribe__button",
                    "Notify Me"
                }
            }
        }
    }
}
