use crate::models::climate::ClimateAnalysis;
use crate::models::views::ResultsHeaderView;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsHeaderProps {
    pub analysis: Rc<ClimateAnalysis>,
}

#[function_component(ResultsHeader)]
pub fn results_header(props: &ResultsHeaderProps) -> Html {
    let view = ResultsHeaderView::new(&props.analysis);

    html! {
        <div class="results-header">
            <h2>{"Climate Analysis Results"}</h2>
            <p class="analysis-period">{&view.period}</p>
            <div class={classes!("confidence-badge", view.confidence_class)}>
                {&view.confidence}
            </div>
            <p class="data-quality">{&view.data_quality}</p>
        </div>
    }
}
