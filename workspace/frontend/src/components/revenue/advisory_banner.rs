use common::Advisory;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub advisory: Advisory,
}

#[function_component(AdvisoryBanner)]
pub fn advisory_banner(props: &Props) -> Html {
    log::debug!("Showing low revenue advisory for {}", props.advisory.period_list());

    html! {
        <div class="mt-4 p-4 bg-red-50/50 border border-red-100 rounded-xl flex items-start gap-3" role="alert">
            <div class="p-2 bg-red-100 rounded-lg text-red-600 font-bold">{"!"}</div>
            <div>
                <h4 class="text-sm font-bold text-red-800">{ Advisory::HEADLINE }</h4>
                <p class="text-xs text-red-600 mt-1 leading-relaxed">
                    { props.advisory.message() }
                    {" "}
                    { Advisory::CALL_TO_ACTION }
                </p>
            </div>
        </div>
    }
}
