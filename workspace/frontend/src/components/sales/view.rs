use std::rc::Rc;

use common::chart::BandScale;
use common::{HoverTracker, SalesSeries, SalesTooltipContent, SeriesVisibility, dataset};
use yew::prelude::*;

use super::chart::{FRAME, SalesChart};
use super::toggle::RepresentativeToggle;
use super::tooltip::SalesTooltip;

/// Everything the sales page mutates, kept in one cell.
#[derive(Clone, PartialEq)]
struct SalesViewState {
    visibility: SeriesVisibility,
    hover: HoverTracker,
}

#[function_component(SalesPerformanceView)]
pub fn sales_performance_view() -> Html {
    log::trace!("SalesPerformanceView component rendering");
    let series: Rc<SalesSeries> = use_memo((), |_| dataset::sales());
    let state = use_state({
        let series = series.clone();
        move || SalesViewState {
            visibility: SeriesVisibility::new(series.roster()),
            hover: HoverTracker::new(series.len()),
        }
    });

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*state).clone();
            if let Some(visible) = next.visibility.toggle(id) {
                log::debug!("Representative {} is now {}", id, if visible { "shown" } else { "hidden" });
                state.set(next);
            }
        })
    };

    let on_hover = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            let mut next = (*state).clone();
            if next.hover.pointer_moved(index) {
                state.set(next);
            }
        })
    };

    let on_leave = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            if next.hover.pointer_left() {
                state.set(next);
            }
        })
    };

    let tooltip = SalesTooltipContent::for_sales(&series, &state.visibility, state.hover.hovered())
        .map(|content| {
            let band = BandScale::new(&FRAME, series.len());
            let anchor = state.hover.hovered().map(|i| band.center(i)).unwrap_or_default();
            (content, anchor / FRAME.width * 100.0)
        });

    html! {
        <>
            <div class="flex flex-col md:flex-row justify-between items-start md:items-end">
                <div>
                    <h1 class="text-3xl font-extrabold text-gray-900">{"Sales Team Performance"}</h1>
                    <p class="text-gray-500 mt-1">
                        { format!("Comparative analysis across {}-month window", series.len()) }
                    </p>
                </div>
                <div class="flex items-center gap-2 bg-white px-3 py-1.5 rounded-lg border border-gray-200 text-sm text-gray-600 shadow-sm mt-4 md:mt-0">
                    <span>{"Select staff to compare"}</span>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {
                    for series.roster().iter().map(|rep| html! {
                        <RepresentativeToggle
                            key={rep.id}
                            representative={rep}
                            selected={state.visibility.is_visible(rep.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    })
                }
            </div>

            <div class="bg-white rounded-3xl shadow-xl shadow-gray-100 border border-gray-100 p-8 relative overflow-hidden">
                <div class="flex justify-between items-center mb-8">
                    <h2 class="text-xl font-bold text-gray-800">{"Revenue Breakdown (THB)"}</h2>
                    <div class="flex items-center gap-6 text-sm">
                        <div class="flex items-center gap-2">
                            <span class="w-8 h-1 bg-gray-300 rounded-full"></span>
                            <span class="text-gray-500">{"Actual (Past)"}</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <span class="w-8 h-1 bg-cyan-100 border border-cyan-200 border-dashed rounded-full"></span>
                            <span class="text-cyan-600 font-medium">{"Forecast (Future)"}</span>
                        </div>
                    </div>
                </div>

                <div class="relative w-full">
                    <SalesChart
                        series={series.clone()}
                        visibility={state.visibility.clone()}
                        hover={state.hover}
                        on_hover={on_hover}
                        on_leave={on_leave}
                    />
                    {
                        if let Some((content, left_percent)) = tooltip {
                            html! { <SalesTooltip content={content} left_percent={left_percent} /> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="flex justify-center gap-6 pt-5 text-sm">
                    {
                        for state.visibility.visible(series.roster()).into_iter().map(|rep| html! {
                            <div key={rep.id} class="flex items-center gap-2">
                                <span class="w-3 h-3 rounded-full" style={format!("background-color: {};", rep.display_color)}></span>
                                <span class="text-gray-600">{ rep.display_label }</span>
                            </div>
                        })
                    }
                </div>
            </div>
        </>
    }
}
