use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50 px-4 animate-fade-in",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg max-w-md w-full p-4 sm:p-6 animate-pop-in",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h4 { class: "text-lg font-semibold", "{title}" }
                {children}
            }
        }
    }
}
