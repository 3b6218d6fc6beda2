use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "px-4 py-2 bg-indigo-600 text-white",
            ButtonVariant::Outline => "px-4 py-2 border border-slate-200 bg-white hover:bg-slate-50",
            ButtonVariant::Secondary => "px-3 py-2 bg-slate-100",
            ButtonVariant::Danger => "px-4 py-2 bg-rose-600 text-white",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "rounded cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed {variant.class()} {class}",
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
