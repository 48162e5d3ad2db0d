use std::rc::Rc;

use common::chart::{
    BandScale, ChartFrame, LinearScale, area_path, nice_max, rounded_top_bar, ticks, to_amount,
    to_plot_value,
};
use common::{Classification, HoverTracker, RevenueSeries, format_compact};
use yew::prelude::*;

pub const FRAME: ChartFrame = ChartFrame {
    width: 800.0,
    height: 450.0,
    margin_top: 30.0,
    margin_right: 30.0,
    margin_bottom: 40.0,
    margin_left: 70.0,
};

const BAR_WIDTH: f64 = 45.0;
const BAR_RADIUS: f64 = 8.0;
const TICK_INTERVALS: usize = 4;

const ACTUAL_COLOR: &str = "#4F46E5";
const FORECAST_COLOR: &str = "#22D3EE";
const AXIS_TEXT: &str = "#64748B";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Rc<RevenueSeries>,
    pub hover: HoverTracker,
    /// Slot of the current month, where the TODAY marker goes
    #[prop_or_default]
    pub today: Option<usize>,
    pub on_hover: Callback<usize>,
    pub on_leave: Callback<()>,
}

fn bar_color(classification: Classification) -> &'static str {
    match classification {
        Classification::Actual => ACTUAL_COLOR,
        Classification::Forecast => FORECAST_COLOR,
    }
}

#[function_component(RevenueChart)]
pub fn revenue_chart(props: &Props) -> Html {
    let series = &props.series;
    let band = BandScale::new(&FRAME, series.len());
    let y_max = nice_max(to_plot_value(series.max_amount()));
    let scale = LinearScale::new(&FRAME, y_max);
    let bar_width = BAR_WIDTH.min(band.step() * 0.7);

    let trend: Vec<(f64, f64)> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (band.center(i), scale.y(to_plot_value(p.amount))))
        .collect();

    let on_leave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    };

    html! {
        <svg
            class="w-full h-auto select-none"
            viewBox={FRAME.view_box()}
            onmouseleave={on_leave}
        >
            // Grid and y-axis labels
            {
                for ticks(scale.max(), TICK_INTERVALS).into_iter().map(|tick| {
                    let y = scale.y(tick);
                    html! {
                        <g key={tick.to_string()}>
                            <line
                                x1={FRAME.plot_left().to_string()}
                                x2={FRAME.plot_right().to_string()}
                                y1={y.to_string()}
                                y2={y.to_string()}
                                stroke="#E2E8F0"
                                stroke-dasharray="3 3"
                            />
                            <text
                                x={(FRAME.plot_left() - 10.0).to_string()}
                                y={(y + 4.0).to_string()}
                                text-anchor="end"
                                font-size="12"
                                font-weight="500"
                                fill={AXIS_TEXT}
                            >
                                { format_compact(to_amount(tick)) }
                            </text>
                        </g>
                    }
                })
            }

            <path d={area_path(&trend, FRAME.plot_bottom())} fill={ACTUAL_COLOR} fill-opacity="0.05" />

            {
                for series.points().iter().enumerate().map(|(i, point)| {
                    let value = to_plot_value(point.amount);
                    let x = band.center(i) - bar_width / 2.0;
                    let focused = props.hover.is_focused(i);
                    html! {
                        <path
                            key={i}
                            d={rounded_top_bar(x, scale.y(value), bar_width, scale.bar_height(value), BAR_RADIUS)}
                            fill={bar_color(point.classification)}
                            opacity={props.hover.opacity(i).to_string()}
                            stroke={if focused { "#fff" } else { "none" }}
                            stroke-width="2"
                            style="transition: all 0.3s ease"
                        />
                    }
                })
            }

            // x-axis labels
            {
                for series.points().iter().enumerate().map(|(i, point)| html! {
                    <text
                        key={i}
                        x={band.center(i).to_string()}
                        y={(FRAME.plot_bottom() + 25.0).to_string()}
                        text-anchor="middle"
                        font-size="12"
                        font-weight="500"
                        fill={AXIS_TEXT}
                    >
                        { point.period.label() }
                    </text>
                })
            }

            {
                if let Some(index) = props.today {
                    let x = band.center(index).to_string();
                    html! {
                        <g>
                            <line
                                x1={x.clone()}
                                x2={x.clone()}
                                y1={FRAME.plot_top().to_string()}
                                y2={FRAME.plot_bottom().to_string()}
                                stroke="#94A3B8"
                                stroke-dasharray="4 4"
                            />
                            <text
                                x={x}
                                y={(FRAME.plot_top() - 8.0).to_string()}
                                text-anchor="middle"
                                font-size="10"
                                font-weight="bold"
                                fill={AXIS_TEXT}
                            >
                                {"TODAY"}
                            </text>
                        </g>
                    }
                } else {
                    html! {}
                }
            }

            // Invisible hit areas, one per slot
            {
                for (0..series.len()).map(|i| {
                    let on_hover = props.on_hover.clone();
                    html! {
                        <rect
                            key={i}
                            x={band.slot_start(i).to_string()}
                            y={FRAME.plot_top().to_string()}
                            width={band.step().to_string()}
                            height={FRAME.plot_height().to_string()}
                            fill="transparent"
                            onmouseenter={Callback::from(move |_: MouseEvent| on_hover.emit(i))}
                        />
                    }
                })
            }
        </svg>
    }
}
