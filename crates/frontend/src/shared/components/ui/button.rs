use leptos::prelude::*;

/// Button component with variants (primary, secondary) and a busy indicator
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Element id, for controls other code looks up
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Button type attribute ("button" by default, "submit" inside forms)
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shows the busy indicator (reactive)
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };

    let is_busy = move || busy.get().unwrap_or(false);
    let busy_class = move || if is_busy() { "loading" } else { "" };

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            id=move || id.get()
            type=btn_type
            class=move || format!("button {} {}", variant_class(), busy_class())
            disabled=move || disabled.get().unwrap_or(false)
            aria-busy=move || is_busy().to_string()
        >
            {children()}
        </button>
    }
}
