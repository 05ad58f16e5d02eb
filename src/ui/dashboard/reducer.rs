use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::LoadStarted | DashboardIntent::DeleteStarted => DashboardState {
                loading: true,
                ..state
            },
            DashboardIntent::Loaded { records, synced_at } => DashboardState {
                records,
                loading: false,
                error: None,
                synced_at: Some(synced_at),
                ..state
            },
            DashboardIntent::LoadFailed { message } => DashboardState {
                loading: false,
                error: Some(message),
                ..state
            },
            DashboardIntent::DeleteFailed => DashboardState {
                loading: false,
                ..state
            },
            DashboardIntent::SortBy(key) => DashboardState {
                sort: state.sort.select(key),
                ..state
            },
        }
    }
}
