use async_trait::async_trait;
use common::types::MessageBody;
use models::{Hero, HeroInput};
use reqwest::{Response, StatusCode};
use tracing::warn;

use crate::errors::ClientError;
use crate::messages::MessageLog;

/// What the pages need from the hero API.
///
/// Each call is an independent future; callers get no ordering guarantee
/// between concurrent calls.
#[async_trait]
pub trait HeroBackend: Send + Sync {
    async fn get_heroes(&self) -> Result<Vec<Hero>, ClientError>;

    /// `Ok(None)` when the server has no hero with that id.
    async fn get_hero(&self, id: u64) -> Result<Option<Hero>, ClientError>;

    async fn add_hero(&self, name: &str) -> Result<Hero, ClientError>;

    /// `Ok(false)` when the hero no longer exists.
    async fn update_hero(&self, hero: &Hero) -> Result<bool, ClientError>;

    /// `Ok(false)` when the hero no longer exists.
    async fn delete_hero(&self, id: u64) -> Result<bool, ClientError>;

    /// Case-insensitive name filter over the full list; a blank term matches nothing.
    async fn search_heroes(&self, term: &str) -> Result<Vec<Hero>, ClientError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let heroes = self.get_heroes().await?;
        Ok(heroes
            .into_iter()
            .filter(|h| h.name.to_lowercase().contains(&term))
            .collect())
    }
}

/// reqwest-backed client for `/api/heroes`.
///
/// Every outcome, success or failure, is narrated into the [`MessageLog`];
/// failures are also returned so pages can keep their previous state.
#[derive(Clone)]
pub struct HeroClient {
    http: reqwest::Client,
    base_url: String,
    messages: MessageLog,
}

impl HeroClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8081`.
    pub fn new(base_url: impl Into<String>, messages: MessageLog) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, messages)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, messages: MessageLog) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url, messages }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    fn heroes_url(&self) -> String {
        format!("{}/api/heroes", self.base_url)
    }

    fn hero_url(&self, id: u64) -> String {
        format!("{}/api/heroes/{id}", self.base_url)
    }

    async fn log(&self, message: String) {
        self.messages.add(format!("HeroService: {message}")).await;
    }

    /// Log the outcome of `op` and pass the result through.
    async fn narrate<T>(
        &self,
        result: Result<T, ClientError>,
        on_ok: impl FnOnce(&T) -> String,
        op: &str,
    ) -> Result<T, ClientError> {
        match &result {
            Ok(value) => self.log(on_ok(value)).await,
            Err(e) => {
                warn!(op, error = %e, "hero api call failed");
                self.log(format!("{op} failed: {e}")).await;
            }
        }
        result
    }

    async fn fetch_heroes(&self) -> Result<Vec<Hero>, ClientError> {
        let resp = self.http.get(self.heroes_url()).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    async fn fetch_hero(&self, id: u64) -> Result<Option<Hero>, ClientError> {
        let resp = self.http.get(self.hero_url(id)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(expect_success(resp).await?.json().await?))
    }

    async fn post_hero(&self, name: &str) -> Result<Hero, ClientError> {
        let resp = self
            .http
            .post(self.heroes_url())
            .json(&HeroInput::named(name))
            .send()
            .await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    async fn put_hero(&self, hero: &Hero) -> Result<bool, ClientError> {
        let input = HeroInput { id: Some(hero.id), name: hero.name.clone() };
        let resp = self.http.put(self.hero_url(hero.id)).json(&input).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        expect_success(resp).await?;
        Ok(true)
    }

    async fn remove_hero(&self, id: u64) -> Result<bool, ClientError> {
        let resp = self.http.delete(self.hero_url(id)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        expect_success(resp).await?;
        Ok(true)
    }
}

/// Turn any non-2xx status into `ClientError::Status`, keeping the server's message.
async fn expect_success(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp
        .json::<MessageBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
    Err(ClientError::Status { status: status.as_u16(), message })
}

#[async_trait]
impl HeroBackend for HeroClient {
    async fn get_heroes(&self) -> Result<Vec<Hero>, ClientError> {
        let result = self.fetch_heroes().await;
        self.narrate(result, |_| "fetched heroes".to_string(), "getHeroes").await
    }

    async fn get_hero(&self, id: u64) -> Result<Option<Hero>, ClientError> {
        let result = self.fetch_hero(id).await;
        self.narrate(
            result,
            |found| match found {
                Some(_) => format!("fetched hero id={id}"),
                None => format!("no hero id={id}"),
            },
            &format!("getHero id={id}"),
        )
        .await
    }

    async fn add_hero(&self, name: &str) -> Result<Hero, ClientError> {
        let result = self.post_hero(name).await;
        self.narrate(result, |hero| format!("added hero w/ id={}", hero.id), "addHero").await
    }

    async fn update_hero(&self, hero: &Hero) -> Result<bool, ClientError> {
        let id = hero.id;
        let result = self.put_hero(hero).await;
        self.narrate(
            result,
            |updated| if *updated { format!("updated hero id={id}") } else { format!("no hero id={id} to update") },
            "updateHero",
        )
        .await
    }

    async fn delete_hero(&self, id: u64) -> Result<bool, ClientError> {
        let result = self.remove_hero(id).await;
        self.narrate(
            result,
            |deleted| if *deleted { format!("deleted hero id={id}") } else { format!("no hero id={id} to delete") },
            "deleteHero",
        )
        .await
    }
}
