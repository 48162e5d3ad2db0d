use common::{Classification, SalesTooltipContent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: SalesTooltipContent,
    pub left_percent: f64,
}

#[function_component(SalesTooltip)]
pub fn sales_tooltip(props: &Props) -> Html {
    let content = &props.content;
    let badge = match content.classification {
        Classification::Actual => "bg-indigo-500/20 text-indigo-300",
        Classification::Forecast => "bg-cyan-500/20 text-cyan-300",
    };
    let style = format!(
        "left: {:.2}%; top: 0; transform: translateX(-50%);",
        props.left_percent
    );

    html! {
        <div
            class="absolute pointer-events-none bg-gray-900/95 backdrop-blur-xl border border-gray-700 p-4 rounded-2xl shadow-2xl text-white min-w-[200px]"
            style={style}
        >
            <div class="flex justify-between items-center mb-3 border-b border-gray-700 pb-2">
                <span class="font-bold text-lg">{ &content.period_label }</span>
                <span class={classes!("text-xs", "px-2", "py-0.5", "rounded-full", badge)}>
                    { content.classification.as_str() }
                </span>
            </div>
            <div class="space-y-2">
                {
                    for content.rows.iter().map(|row| html! {
                        <div key={row.label} class="flex items-center justify-between gap-4">
                            <div class="flex items-center gap-2">
                                <div class="w-2 h-2 rounded-full" style={format!("background-color: {};", row.color)}></div>
                                <span class="text-sm text-gray-300">{ row.label }</span>
                            </div>
                            <span class="text-sm font-mono font-bold">{ &row.amount_label }</span>
                        </div>
                    })
                }
            </div>
        </div>
    }
}
