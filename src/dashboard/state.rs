//! The dashboard's view state machine.

use crate::{Error, api::DashboardData, view_model::ViewModel, view_model::build_view_model};

/// What the dashboard page knows about its data.
///
/// A page starts [Empty](LoadState::Empty) and moves exactly once, through
/// [resolve](LoadState::resolve), to either [Loaded](LoadState::Loaded) or
/// [Failed](LoadState::Failed). `Failed` renders its own notice rather than
/// the empty-state message, so a transport failure is never mistaken for an
/// account with no transactions.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// No load has completed. The cards render blank placeholders.
    #[default]
    Empty,
    /// The load succeeded; holds everything the page renders.
    Loaded(ViewModel),
    /// The load or the view-model build failed.
    Failed,
}

impl LoadState {
    /// Consumes the outcome of a fetch, moving `Empty` to `Loaded` or
    /// `Failed` in one step.
    ///
    /// A state that has already resolved stays as it is: the load fires once
    /// and there is no reload path.
    pub fn resolve(self, outcome: Result<DashboardData, Error>) -> LoadState {
        match self {
            LoadState::Empty => {}
            resolved => return resolved,
        }

        match outcome.and_then(build_view_model) {
            Ok(view_model) => LoadState::Loaded(view_model),
            Err(error) => {
                tracing::error!("could not load dashboard data: {error}");
                LoadState::Failed
            }
        }
    }

    /// The view-model, if the load succeeded.
    pub fn view_model(&self) -> Option<&ViewModel> {
        match self {
            LoadState::Loaded(view_model) => Some(view_model),
            _ => None,
        }
    }
}

#[cfg(test)]
mod load_state_tests {
    use crate::{
        Error,
        api::DashboardData,
        balance::Balance,
    };

    use super::LoadState;

    fn test_data() -> DashboardData {
        DashboardData {
            transactions: vec![],
            balance: Balance {
                income: 500.0,
                outcome: 200.0,
                total: 300.0,
            },
        }
    }

    #[test]
    fn starts_empty() {
        assert!(matches!(LoadState::default(), LoadState::Empty));
    }

    #[test]
    fn successful_fetch_moves_to_loaded() {
        let state = LoadState::default().resolve(Ok(test_data()));

        let view_model = state.view_model().expect("state should be loaded");
        assert_eq!(view_model.balance.total, "R$ 300,00");
    }

    #[test]
    fn failed_fetch_moves_to_failed() {
        let state = LoadState::default().resolve(Err(Error::ApiStatus(500)));

        assert!(matches!(state, LoadState::Failed));
        assert!(state.view_model().is_none());
    }

    #[test]
    fn non_finite_amount_moves_to_failed() {
        let mut data = test_data();
        data.balance.total = f64::NAN;

        let state = LoadState::default().resolve(Ok(data));

        assert!(matches!(state, LoadState::Failed));
    }

    #[test]
    fn resolved_state_ignores_further_outcomes() {
        let loaded = LoadState::default().resolve(Ok(test_data()));
        let still_loaded = loaded.resolve(Err(Error::ApiStatus(500)));

        assert!(still_loaded.view_model().is_some());

        let failed = LoadState::default().resolve(Err(Error::ApiStatus(500)));
        let still_failed = failed.resolve(Ok(test_data()));

        assert!(matches!(still_failed, LoadState::Failed));
    }
}
