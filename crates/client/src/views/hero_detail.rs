use models::Hero;

use crate::hero_client::HeroBackend;
use crate::view::View;

/// Where the router should go after a detail-page action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Back,
}

/// Hero detail page bound to the `{id}` route parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroDetailState {
    pub hero: Option<Hero>,
    pub error: Option<String>,
}

pub async fn init<B: HeroBackend + ?Sized>(view: &View<HeroDetailState>, backend: &B, id: u64) -> bool {
    match backend.get_hero(id).await {
        Ok(hero) => {
            view.apply(|s| {
                s.hero = hero;
                s.error = None;
            })
            .await
        }
        Err(e) => view.apply(|s| s.error = Some(e.to_string())).await,
    }
}

/// Two-way binding for the name input.
pub async fn rename(view: &View<HeroDetailState>, name: &str) -> bool {
    view.apply(|s| {
        if let Some(hero) = s.hero.as_mut() {
            hero.name = name.to_string();
        }
    })
    .await
}

/// Push the edited hero to the server; go back only when the save landed.
pub async fn save<B: HeroBackend + ?Sized>(view: &View<HeroDetailState>, backend: &B) -> Navigation {
    let Some(hero) = view.snapshot().await.hero else {
        return Navigation::Stay;
    };
    match backend.update_hero(&hero).await {
        Ok(true) => Navigation::Back,
        Ok(false) => {
            view.apply(|s| s.error = Some(format!("hero {} no longer exists", hero.id))).await;
            Navigation::Stay
        }
        Err(e) => {
            view.apply(|s| s.error = Some(e.to_string())).await;
            Navigation::Stay
        }
    }
}

pub fn go_back() -> Navigation {
    Navigation::Back
}
