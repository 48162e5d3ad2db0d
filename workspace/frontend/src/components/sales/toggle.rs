use common::RepresentativeConfig;
use yew::prelude::*;

const INACTIVE_AVATAR: &str = "#9ca3af";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub representative: &'static RepresentativeConfig,
    pub selected: bool,
    pub on_toggle: Callback<&'static str>,
}

#[function_component(RepresentativeToggle)]
pub fn representative_toggle(props: &Props) -> Html {
    let rep = props.representative;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(rep.id))
    };

    let card_class = if props.selected {
        "bg-white border-transparent shadow-lg shadow-gray-200 ring-2 ring-offset-2"
    } else {
        "bg-gray-50 border-gray-200 opacity-60 hover:opacity-100"
    };
    let ring = if props.selected {
        format!("--tw-ring-color: {};", rep.display_color)
    } else {
        String::new()
    };
    let avatar = format!(
        "background-color: {};",
        if props.selected { rep.display_color } else { INACTIVE_AVATAR }
    );

    html! {
        <button
            type="button"
            class={classes!("relative", "overflow-hidden", "flex", "items-center", "gap-3", "px-5", "py-3", "rounded-xl", "border", "transition-all", "duration-300", card_class)}
            style={ring}
            aria-pressed={props.selected.to_string()}
            {onclick}
        >
            <div
                class="w-10 h-10 rounded-full flex items-center justify-center text-white font-bold shadow-md"
                style={avatar}
            >
                { rep.initial() }
            </div>
            <div class="text-left">
                <p class={classes!("text-sm", "font-bold", if props.selected { "text-gray-800" } else { "text-gray-500" })}>
                    { rep.display_label }
                </p>
                <p class="text-xs text-gray-400">{"Sales Rep"}</p>
            </div>
        </button>
    }
}
