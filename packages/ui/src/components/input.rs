use dioxus::prelude::*;

/// Single-line text input bound to a value owned by the caller.
#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "w-full p-3 border border-slate-200 rounded bg-white focus:outline-none focus:border-indigo-600 {class}",
            r#type: r#type,
            name: name,
            placeholder: placeholder,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] class: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: i64,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: "w-full p-3 border border-slate-200 rounded bg-white resize-y focus:outline-none focus:border-indigo-600 {class}",
            name: name,
            placeholder: placeholder,
            rows: rows,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
