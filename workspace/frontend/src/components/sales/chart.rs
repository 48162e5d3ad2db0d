use std::rc::Rc;

use common::chart::{
    BandScale, ChartFrame, LinearScale, nice_max, rounded_top_bar, ticks, to_amount, to_plot_value,
};
use common::{HoverTracker, SalesSeries, SeriesVisibility, format_thousands};
use yew::prelude::*;

pub const FRAME: ChartFrame = ChartFrame {
    width: 800.0,
    height: 450.0,
    margin_top: 30.0,
    margin_right: 30.0,
    margin_bottom: 40.0,
    margin_left: 60.0,
};

const MAX_BAR_WIDTH: f64 = 40.0;
const BAR_GAP: f64 = 8.0;
const BAR_RADIUS: f64 = 6.0;
const GROUP_FILL: f64 = 0.75;
const TICK_INTERVALS: usize = 4;

const FORECAST_REGION: &str = "#ecfeff";
const FORECAST_MARKER: &str = "#67e8f9";
const AXIS_TEXT: &str = "#94a3b8";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Rc<SalesSeries>,
    pub visibility: SeriesVisibility,
    pub hover: HoverTracker,
    pub on_hover: Callback<usize>,
    pub on_leave: Callback<()>,
}

/// Width of each bar and left edge of the first one, for a group of `count` bars
/// centred in its slot.
fn group_layout(band: &BandScale, index: usize, count: usize) -> (f64, f64) {
    if count == 0 {
        return (0.0, band.center(index));
    }
    let gaps = BAR_GAP * (count - 1) as f64;
    let width = ((band.step() * GROUP_FILL - gaps) / count as f64)
        .clamp(1.0, MAX_BAR_WIDTH);
    let total = width * count as f64 + gaps;
    (width, band.center(index) - total / 2.0)
}

#[function_component(SalesChart)]
pub fn sales_chart(props: &Props) -> Html {
    let series = &props.series;
    let band = BandScale::new(&FRAME, series.len());
    // Scale over every representative so the axis stays put while toggling
    let scale = LinearScale::new(&FRAME, nice_max(to_plot_value(series.max_amount())));
    let visible = props.visibility.visible(series.roster());

    let on_leave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    };

    let forecast_region = match series.forecast_range() {
        Some((first, last)) => {
            let x = band.slot_start(first);
            html! {
                <g>
                    <rect
                        x={x.to_string()}
                        y={FRAME.plot_top().to_string()}
                        width={(band.slot_end(last) - x).to_string()}
                        height={FRAME.plot_height().to_string()}
                        rx="10"
                        fill={FORECAST_REGION}
                        fill-opacity="0.5"
                    />
                    <line
                        x1={x.to_string()}
                        x2={x.to_string()}
                        y1={FRAME.plot_top().to_string()}
                        y2={FRAME.plot_bottom().to_string()}
                        stroke={FORECAST_MARKER}
                        stroke-width="2"
                        stroke-dasharray="6 4"
                    />
                    <text
                        x={(x + 6.0).to_string()}
                        y={(FRAME.plot_bottom() - 8.0).to_string()}
                        font-size="10"
                        font-weight="bold"
                        fill="#0891b2"
                    >
                        {"Future Forecast →"}
                    </text>
                </g>
            }
        }
        None => html! {},
    };

    html! {
        <svg
            class="w-full h-auto select-none"
            viewBox={FRAME.view_box()}
            onmouseleave={on_leave}
        >
            { forecast_region }

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
                                stroke="#f1f5f9"
                                stroke-dasharray="3 3"
                            />
                            <text
                                x={(FRAME.plot_left() - 10.0).to_string()}
                                y={(y + 4.0).to_string()}
                                text-anchor="end"
                                font-size="12"
                                fill={AXIS_TEXT}
                            >
                                { format_thousands(to_amount(tick)) }
                            </text>
                        </g>
                    }
                })
            }

            {
                for series.points().iter().enumerate().map(|(i, point)| {
                    let (width, start) = group_layout(&band, i, visible.len());
                    let opacity = props.hover.opacity(i).to_string();
                    html! {
                        <g key={i} opacity={opacity}>
                            {
                                for visible.iter().enumerate().map(|(k, rep)| {
                                    let value = to_plot_value(point.amount_for(rep.id));
                                    let x = start + k as f64 * (width + BAR_GAP);
                                    html! {
                                        <path
                                            key={rep.id}
                                            d={rounded_top_bar(x, scale.y(value), width, scale.bar_height(value), BAR_RADIUS)}
                                            fill={rep.display_color}
                                        />
                                    }
                                })
                            }
                        </g>
                    }
                })
            }

            {
                for series.points().iter().enumerate().map(|(i, point)| html! {
                    <text
                        key={i}
                        x={band.center(i).to_string()}
                        y={(FRAME.plot_bottom() + 25.0).to_string()}
                        text-anchor="middle"
                        font-size="12"
                        font-weight="600"
                        fill="#64748B"
                    >
                        { point.period.label() }
                    </text>
                })
            }

            {
                if visible.is_empty() {
                    html! {
                        <text
                            x={(FRAME.plot_left() + FRAME.plot_width() / 2.0).to_string()}
                            y={(FRAME.plot_top() + FRAME.plot_height() / 2.0).to_string()}
                            text-anchor="middle"
                            font-size="14"
                            fill={AXIS_TEXT}
                        >
                            {"Select at least one representative to compare"}
                        </text>
                    }
                } else {
                    html! {}
                }
            }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_layout_is_centred() {
        let band = BandScale::new(&FRAME, 5);
        let (width, start) = group_layout(&band, 2, 3);
        let total = width * 3.0 + BAR_GAP * 2.0;
        assert!((start + total / 2.0 - band.center(2)).abs() < 1e-9);
        assert!(width <= MAX_BAR_WIDTH);
    }

    #[test]
    fn test_group_layout_with_single_bar() {
        let band = BandScale::new(&FRAME, 5);
        let (width, start) = group_layout(&band, 0, 1);
        assert_eq!(width, MAX_BAR_WIDTH);
        assert_eq!(start, band.center(0) - MAX_BAR_WIDTH / 2.0);
    }

    #[test]
    fn test_group_layout_with_no_bars() {
        let band = BandScale::new(&FRAME, 5);
        assert_eq!(group_layout(&band, 1, 0), (0.0, band.center(1)));
    }
}
