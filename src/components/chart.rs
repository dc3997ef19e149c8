use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::views::DayCount;

#[derive(Properties, PartialEq)]
pub struct DistributionChartProps {
    /// DOM id of the render target; unique per chart on the page
    pub id: AttrValue,
    pub title: AttrValue,
    pub days: Vec<DayCount>,
    #[prop_or_else(|| AttrValue::from("#648fff"))]
    pub color: AttrValue,
}

/// Bar chart of how many historical days fell into each category
#[function_component(DistributionChart)]
pub fn distribution_chart(props: &DistributionChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.days.clone(), |days| series_data(days));

    {
        let container_ref = container_ref.clone();
        let id = props.id.clone();
        let title = props.title.clone();
        let color = props.color.clone();

        use_effect_with(
            (series, container_ref, id, title, color),
            |(series, container_ref, id, title, color)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, id, title, color, series);

                    let series = series.clone();
                    let (id, title, color) = (id.clone(), title.clone(), color.clone());
                    EventListener::new(&gloo::utils::window(), "resize", move |_| {
                        render_chart(&container, &id, &title, &color, &series);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

/// Splits day counts into category labels and bar heights
pub fn series_data(days: &[DayCount]) -> (Vec<String>, Vec<f64>) {
    days.iter()
        .map(|day| (day.label.to_string(), f64::from(day.count)))
        .unzip()
}

fn render_chart(
    container: &HtmlElement,
    id: &str,
    title: &str,
    color: &str,
    series: &(Vec<String>, Vec<f64>),
) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(title, color, series);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(title: &str, color: &str, series: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (labels, counts) = series;
    let (title_color, axis_color, grid_color) = ("#1f2937", "#6b7280", "#e5e7eb");

    CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(14).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("days")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .data(counts.clone())
                .bar_width("50%")
                .item_style(ItemStyle::new().color(color)),
        )
}
