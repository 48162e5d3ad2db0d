use std::rc::Rc;

use common::{FORECAST_NOTE, PipelineRisk, RevenueSummary, format_compact};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtext: Option<AttrValue>,
    #[prop_or(Trend::Up)]
    pub trend: Trend,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (arrow, tone) = match props.trend {
        Trend::Up => ("▲", "text-emerald-600"),
        Trend::Down => ("▼", "text-red-500"),
    };

    html! {
        <div class="bg-white/80 backdrop-blur-md p-6 rounded-2xl border border-gray-100 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all duration-300 relative overflow-hidden">
            <p class="text-gray-500 text-sm font-medium mb-1">{ &props.title }</p>
            <h3 class="text-3xl font-bold text-gray-800 tracking-tight">{ &props.value }</h3>
            {
                if let Some(subtext) = &props.subtext {
                    html! {
                        <p class={classes!("text-sm", "mt-2", "font-medium", "flex", "items-center", "gap-1", tone)}>
                            <span class="text-xs">{ arrow }</span>
                            { subtext }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <div class="absolute -bottom-4 -right-4 w-24 h-24 bg-indigo-50 rounded-full blur-2xl opacity-60 pointer-events-none"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: Rc<RevenueSummary>,
}

#[function_component(RevenueStats)]
pub fn revenue_stats(props: &Props) -> Html {
    let summary = &props.summary;
    let risk = summary.pipeline_risk();

    let forecast_card = match &summary.first_forecast {
        Some(point) => html! {
            <StatCard
                title={format!("{} Forecast", point.period.label())}
                value={format_compact(point.amount)}
                subtext={Some(AttrValue::from(FORECAST_NOTE))}
            />
        },
        None => html! { <StatCard title="Forecast" value="n/a" /> },
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard
                title="YTD Revenue (Actual)"
                value={format_compact(summary.actual_total)}
                subtext={Some(AttrValue::from(format!("{} months closed", summary.actual_months)))}
            />
            { forecast_card }
            <StatCard
                title="Pipeline Risk"
                value={risk.as_str()}
                subtext={Some(AttrValue::from(summary.risk_subtext()))}
                trend={if risk == PipelineRisk::High { Trend::Down } else { Trend::Up }}
            />
        </div>
    }
}

