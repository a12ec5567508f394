//! Derives which entities are visible from the kind filter and the search term.

mod debounce;
mod state;

pub use debounce::SearchDebounce;
pub use state::{FilterState, HiddenSet, KindCounts};

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};

pub struct FilterPlugin;

impl Plugin for FilterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FilterState>()
            .init_resource::<HiddenSet>()
            .init_resource::<SearchDebounce>()
            .add_systems(Startup, apply_debounce_delay.after(ConfigLoaded))
            .add_systems(Update, commit_search_term);
    }
}

fn apply_debounce_delay(config: Res<AppConfig>, mut debounce: ResMut<SearchDebounce>) {
    debounce.set_delay(config.data.search_debounce());
}

/// Moves the search buffer into the filter once typing has paused.
fn commit_search_term(
    time: Res<Time>,
    mut debounce: ResMut<SearchDebounce>,
    mut filter: ResMut<FilterState>,
) {
    if let Some(term) = debounce.tick(time.delta()) {
        debug!("Search term committed: {:?}", term);
        filter.search_term = term;
    }
}
