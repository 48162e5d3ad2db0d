use std::rc::Rc;

use common::chart::BandScale;
use common::{
    HoverTracker, RevenueSeries, RevenueSummary, TooltipContent, dataset, default_threshold,
    format_compact,
};
use yew::prelude::*;

use super::advisory_banner::AdvisoryBanner;
use super::chart::{FRAME, RevenueChart};
use super::stats::RevenueStats;
use super::tooltip::RevenueTooltip;

#[function_component(RevenueView)]
pub fn revenue_view() -> Html {
    log::trace!("RevenueView component rendering");
    let series: Rc<RevenueSeries> = use_memo((), |_| dataset::revenue());
    let summary = use_memo(series.clone(), |series| {
        RevenueSummary::from_series(series, default_threshold())
    });
    let calendar = dataset::calendar();
    let hover = use_state({
        let len = series.len();
        move || HoverTracker::new(len)
    });

    let on_hover = {
        let hover = hover.clone();
        Callback::from(move |index: usize| {
            let mut tracker = *hover;
            if tracker.pointer_moved(index) {
                log::trace!("Revenue chart focus on slot {}", index);
                hover.set(tracker);
            }
        })
    };

    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: ()| {
            let mut tracker = *hover;
            if tracker.pointer_left() {
                log::trace!("Revenue chart focus cleared");
                hover.set(tracker);
            }
        })
    };

    let today = series.position_of(calendar.today_month());
    let tooltip = TooltipContent::for_revenue(&series, hover.hovered()).map(|content| {
        let band = BandScale::new(&FRAME, series.len());
        let anchor = hover.hovered().map(|i| band.center(i)).unwrap_or_default();
        (content, anchor / FRAME.width * 100.0)
    });

    html! {
        <>
            <div class="flex flex-col md:flex-row md:items-end justify-between gap-4">
                <div>
                    <h1 class="text-4xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-gray-900 via-indigo-800 to-gray-900">
                        {"Revenue Command Center"}
                    </h1>
                    <p class="text-gray-500 mt-2 text-lg">
                        {"Financial performance overview & predictive analytics"}
                    </p>
                </div>
                <div class="flex items-center gap-2 bg-white px-4 py-2 rounded-full border border-gray-200 shadow-sm text-sm text-gray-600">
                    <span>{"Current Date: "}</span>
                    <span class="font-semibold text-gray-900">{ calendar.as_of_label() }</span>
                </div>
            </div>

            <RevenueStats summary={summary.clone()} />

            <div class="bg-white rounded-3xl shadow-xl shadow-indigo-100/50 border border-gray-100 p-8 overflow-hidden relative">
                <div class="flex justify-between items-center mb-10">
                    <div>
                        <h2 class="text-xl font-bold text-gray-800">{"Monthly Revenue Forecast"}</h2>
                        <div class="flex items-center gap-6 mt-3 text-sm">
                            <div class="flex items-center gap-2">
                                <span class="w-3 h-3 rounded-full bg-indigo-600 ring-4 ring-indigo-50"></span>
                                <span class="text-gray-600 font-medium">{"Actual Revenue"}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <span class="w-3 h-3 rounded-full bg-cyan-400 ring-4 ring-cyan-50"></span>
                                <span class="text-gray-600 font-medium">{"Forecasted (Projected)"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="hidden md:block text-right">
                        <p class="text-xs font-semibold text-gray-400 uppercase tracking-widest">
                            { format!("Next {} Months", summary.forecast_months) }
                        </p>
                        <p class="text-2xl font-bold text-indigo-900">
                            { format_compact(summary.forecast_total) }
                            <span class="text-base font-normal text-gray-400">{" Total"}</span>
                        </p>
                    </div>
                </div>

                <div class="relative w-full">
                    <RevenueChart
                        series={series.clone()}
                        hover={*hover}
                        today={today}
                        on_hover={on_hover}
                        on_leave={on_leave}
                    />
                    {
                        if let Some((content, left_percent)) = tooltip {
                            html! { <RevenueTooltip content={content} left_percent={left_percent} /> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if let Some(advisory) = summary.advisory.clone() {
                        html! { <AdvisoryBanner advisory={advisory} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </>
    }
}
