use common::{Classification, TooltipContent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: TooltipContent,
    /// Horizontal anchor, as a percentage of the chart width
    pub left_percent: f64,
}

#[function_component(RevenueTooltip)]
pub fn revenue_tooltip(props: &Props) -> Html {
    let content = &props.content;
    let accent = match content.classification {
        Classification::Actual => "bg-indigo-500",
        Classification::Forecast => "bg-cyan-400",
    };
    let style = format!(
        "left: {:.2}%; top: 0; transform: translateX(-50%);",
        props.left_percent
    );

    html! {
        <div
            class="absolute pointer-events-none bg-gray-900/90 backdrop-blur-md p-4 border border-gray-700 shadow-2xl rounded-xl text-white"
            style={style}
        >
            <p class="font-semibold text-gray-300 text-sm mb-2">{ &content.period_label }</p>
            <div class="flex items-center gap-3">
                <div class={classes!("w-1", "h-8", "rounded-full", accent)}></div>
                <div>
                    <p class="text-xs text-gray-400 uppercase tracking-wider">
                        { content.classification.as_str() }
                    </p>
                    <p class="text-xl font-bold font-mono">{ &content.amount_label }</p>
                </div>
            </div>
            {
                if let Some(line) = content.advisory_line {
                    html! {
                        <div class="mt-2 pt-2 border-t border-gray-700 text-xs text-cyan-300">
                            { line }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
