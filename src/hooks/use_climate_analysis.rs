use std::rc::Rc;
use yew::prelude::*;

use crate::models::climate::ClimateAnalysis;
use crate::services::climate_api::{ClimateQuery, fetch_climate_analysis};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug, Default)]
pub enum AnalysisState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    /// Response together with the query that produced it
    Loaded {
        analysis: Rc<ClimateAnalysis>,
        query: Rc<ClimateQuery>,
    },
    Error(String),
}

impl AnalysisState {
    /// Returns true while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<ClimateAnalysis>> {
        match self {
            AnalysisState::Loaded { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    /// Returns the query behind the loaded data, which may differ from the current form
    pub fn query(&self) -> Option<&Rc<ClimateQuery>> {
        match self {
            AnalysisState::Loaded { query, .. } => Some(query),
            _ => None,
        }
    }

    /// Returns the error message if the last request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Handle returned by `use_climate_analysis`
#[derive(Clone, PartialEq)]
pub struct AnalysisHandle {
    pub state: AnalysisState,
    pub analyze: Callback<ClimateQuery>,
}

/// Runs one analysis request per `analyze` call. Calls made while a request is
/// still in flight are ignored.
#[hook]
pub fn use_climate_analysis() -> AnalysisHandle {
    let state = use_state(AnalysisState::default);
    // Read by the callback, which would otherwise see the state from its own render.
    let in_flight = use_mut_ref(|| false);

    let analyze = {
        let state = state.clone();
        Callback::from(move |query: ClimateQuery| {
            if *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;
            state.set(AnalysisState::Loading);

            let state = state.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let query = Rc::new(query);
                match fetch_climate_analysis(&query).await {
                    Ok(analysis) => state.set(AnalysisState::Loaded {
                        analysis: Rc::new(analysis),
                        query,
                    }),
                    Err(e) => state.set(AnalysisState::Error(e.to_string())),
                }
                *in_flight.borrow_mut() = false;
            });
        })
    };

    AnalysisHandle {
        state: (*state).clone(),
        analyze,
    }
}
