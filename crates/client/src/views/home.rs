use models::Hero;

use crate::hero_client::HeroBackend;
use crate::view::View;

/// How many heroes the dashboard shows.
pub const TOP_HEROES: usize = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    pub heroes: Vec<Hero>,
    pub error: Option<String>,
}

/// Load the first [`TOP_HEROES`] heroes. Returns whether the page was updated.
pub async fn init<B: HeroBackend + ?Sized>(view: &View<HomeState>, backend: &B) -> bool {
    match backend.get_heroes().await {
        Ok(heroes) => {
            view.apply(|s| {
                s.heroes = heroes.into_iter().take(TOP_HEROES).collect();
                s.error = None;
            })
            .await
        }
        Err(e) => view.apply(|s| s.error = Some(e.to_string())).await,
    }
}
