use models::Hero;

use crate::hero_client::HeroBackend;
use crate::view::View;

/// The hero list page: all heroes plus the one currently selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroesState {
    pub heroes: Vec<Hero>,
    pub selected: Option<Hero>,
    pub error: Option<String>,
}

pub async fn init<B: HeroBackend + ?Sized>(view: &View<HeroesState>, backend: &B) -> bool {
    match backend.get_heroes().await {
        Ok(heroes) => {
            view.apply(|s| {
                s.heroes = heroes;
                s.error = None;
            })
            .await
        }
        Err(e) => view.apply(|s| s.error = Some(e.to_string())).await,
    }
}

pub async fn select(view: &View<HeroesState>, hero: Hero) -> bool {
    view.apply(|s| s.selected = Some(hero)).await
}

/// Create a hero from the add box. Blank names are ignored without calling the backend.
pub async fn add<B: HeroBackend + ?Sized>(view: &View<HeroesState>, backend: &B, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    match backend.add_hero(name).await {
        Ok(hero) => view.apply(|s| s.heroes.push(hero)).await,
        Err(e) => view.apply(|s| s.error = Some(e.to_string())).await,
    }
}

/// Delete a hero; the row disappears only after the server confirms.
pub async fn delete<B: HeroBackend + ?Sized>(view: &View<HeroesState>, backend: &B, id: u64) -> bool {
    match backend.delete_hero(id).await {
        Ok(_) => {
            // gone either way: deleted now, or already missing on the server
            view.apply(|s| {
                s.heroes.retain(|h| h.id != id);
                if s.selected.as_ref().is_some_and(|h| h.id == id) {
                    s.selected = None;
                }
            })
            .await
        }
        Err(e) => view.apply(|s| s.error = Some(e.to_string())).await,
    }
}
