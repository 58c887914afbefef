//! Catalogue pages.
//!
//! ```text
//! GET /                        list, selectors from ?letter=&category=&streak=
//! GET /by-letter/{letter}/     list by first letter
//! GET /by-category/{slug}/     list by category slug
//! GET /by-streak/{slug}/       list by streak slug
//! GET /search/?q={term}        search results
//! GET /mineral/{id}/           detail
//! ```
//!
//! Every page carries the category and streak menus and a random pick,
//! recomputed per request.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::CatalogueNavigation;
use crate::domain::{ListFilter, ListSelection, Mineral, MineralId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::templates::{ListPage, PageChrome};

/// Optional list selectors on `/`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    letter: Option<String>,
    category: Option<String>,
    streak: Option<String>,
}

/// Search query on `/search/`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

struct Chrome {
    navigation: CatalogueNavigation,
    random_mineral: Option<Mineral>,
}

impl Chrome {
    async fn load(state: &HttpState) -> ApiResult<Self> {
        let navigation = state.catalogue.navigation().await?;
        let random_mineral = state.catalogue.pick_random().await?;
        Ok(Self {
            navigation,
            random_mineral,
        })
    }

    fn view(&self) -> PageChrome<'_> {
        PageChrome {
            random_mineral: self.random_mineral.as_ref(),
            categories: &self.navigation.categories,
            streaks: &self.navigation.streaks,
        }
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

async fn render_listing(state: &HttpState, filter: ListFilter) -> ApiResult<HttpResponse> {
    let minerals = state.catalogue.list(&filter).await?;
    debug!(?filter, count = minerals.len(), "listing minerals");
    let chrome = Chrome::load(state).await?;
    let page = ListPage {
        minerals: &minerals,
        selected_letter: filter.selected_letter(),
        selected_category: filter.selected_category(),
        selected_streak: filter.selected_streak(),
        search_term: None,
    };
    Ok(html(state.pages.render_list(&chrome.view(), &page)?))
}

/// Home page; `category` beats `streak` beats `letter`, default letter `a`.
#[get("/")]
pub async fn index(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let ListQuery {
        letter,
        category,
        streak,
    } = query.into_inner();
    let filter = ListSelection::new(letter, category, streak).resolve();
    render_listing(&state, filter).await
}

/// Minerals whose name starts with `letter`.
#[get("/by-letter/{letter}/")]
pub async fn by_letter(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let filter = ListSelection::letter(path.into_inner()).resolve();
    render_listing(&state, filter).await
}

/// Minerals whose category slugs to `slug`.
#[get("/by-category/{slug}/")]
pub async fn by_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let filter = ListSelection::category(path.into_inner()).resolve();
    render_listing(&state, filter).await
}

/// Minerals whose streak slugs to `slug`.
#[get("/by-streak/{slug}/")]
pub async fn by_streak(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let filter = ListSelection::streak(path.into_inner()).resolve();
    render_listing(&state, filter).await
}

/// Free-text search; a missing or blank `q` lists everything.
#[get("/search/")]
pub async fn search(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let term = query.into_inner().q.unwrap_or_default();
    let minerals = state.catalogue.search(&term).await?;
    debug!(term, count = minerals.len(), "searched minerals");
    let chrome = Chrome::load(&state).await?;
    let page = ListPage {
        minerals: &minerals,
        selected_letter: None,
        selected_category: None,
        selected_streak: None,
        search_term: Some(&term),
    };
    Ok(html(state.pages.render_list(&chrome.view(), &page)?))
}

/// One mineral; non-integer ids never reach the handler and answer 404.
#[get("/mineral/{id}/")]
pub async fn detail(state: web::Data<HttpState>, path: web::Path<i32>) -> ApiResult<HttpResponse> {
    let id = MineralId::new(path.into_inner());
    let mineral = state.catalogue.find(id).await?;
    let chrome = Chrome::load(&state).await?;
    Ok(html(state.pages.render_detail(&chrome.view(), &mineral)?))
}

/// Register every catalogue page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(by_letter)
        .service(by_category)
        .service(by_streak)
        .service(search)
        .service(detail);
}
