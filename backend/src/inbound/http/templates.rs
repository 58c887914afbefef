//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and registered once. Their names
//! end in `.html`, so minijinja auto-escapes every interpolated value.

use minijinja::Environment;
use serde::Serialize;

use crate::domain::Mineral;

const LAYOUT: &str = include_str!("../../../templates/layout.html");
const INDEX: &str = include_str!("../../../templates/index.html");
const DETAIL: &str = include_str!("../../../templates/mineral_detail.html");

/// Default prefix for specimen images.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Context shared by every page: the random panel and navigation menus.
#[derive(Debug, Clone, Serialize)]
pub struct PageChrome<'a> {
    /// Random featured mineral, absent for an empty catalogue.
    pub random_mineral: Option<&'a Mineral>,
    /// Category menu slugs.
    pub categories: &'a [String],
    /// Streak menu slugs.
    pub streaks: &'a [String],
}

/// Context for the list and search pages.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<'a> {
    /// Minerals to list.
    pub minerals: &'a [Mineral],
    /// Letter highlighted in the alphabet bar.
    pub selected_letter: Option<&'a str>,
    /// Category highlighted in the menu.
    pub selected_category: Option<&'a str>,
    /// Streak highlighted in the menu.
    pub selected_streak: Option<&'a str>,
    /// Search term echoed into the search box.
    pub search_term: Option<&'a str>,
}

/// Label and value of one populated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeView<'a> {
    /// Human-readable attribute name.
    pub label: String,
    /// Attribute value.
    pub value: &'a str,
}

impl<'a> AttributeView<'a> {
    /// Populated attributes of `mineral` in display order.
    pub fn for_mineral(mineral: &'a Mineral) -> Vec<Self> {
        mineral
            .ordered_attributes()
            .into_iter()
            .map(|(attribute, value)| Self {
                label: attribute.label(),
                value,
            })
            .collect()
    }
}

#[derive(Serialize)]
struct ListContext<'a> {
    #[serde(flatten)]
    chrome: &'a PageChrome<'a>,
    #[serde(flatten)]
    page: &'a ListPage<'a>,
    letters: Vec<String>,
    static_url: &'a str,
}

#[derive(Serialize)]
struct DetailContext<'a> {
    #[serde(flatten)]
    chrome: &'a PageChrome<'a>,
    mineral: &'a Mineral,
    attributes: Vec<AttributeView<'a>>,
    static_url: &'a str,
}

/// Renders catalogue pages from the embedded templates.
pub struct PageRenderer {
    env: Environment<'static>,
    static_url: String,
}

impl PageRenderer {
    /// Compile the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns a minijinja error when a template fails to parse.
    pub fn new(static_url: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT)?;
        env.add_template("index.html", INDEX)?;
        env.add_template("mineral_detail.html", DETAIL)?;
        Ok(Self {
            env,
            static_url: normalise_static_url(static_url.into()),
        })
    }

    /// Prefix for specimen image URLs, always ending in `/`.
    pub fn static_url(&self) -> &str {
        &self.static_url
    }

    /// Render the list template.
    ///
    /// # Errors
    ///
    /// Returns a minijinja error when rendering fails.
    pub fn render_list(
        &self,
        chrome: &PageChrome<'_>,
        page: &ListPage<'_>,
    ) -> Result<String, minijinja::Error> {
        let context = ListContext {
            chrome,
            page,
            letters: ('a'..='z').map(String::from).collect(),
            static_url: &self.static_url,
        };
        self.env.get_template("index.html")?.render(&context)
    }

    /// Render the detail template.
    ///
    /// # Errors
    ///
    /// Returns a minijinja error when rendering fails.
    pub fn render_detail(
        &self,
        chrome: &PageChrome<'_>,
        mineral: &Mineral,
    ) -> Result<String, minijinja::Error> {
        let context = DetailContext {
            chrome,
            mineral,
            attributes: AttributeView::for_mineral(mineral),
            static_url: &self.static_url,
        };
        self.env.get_template("mineral_detail.html")?.render(&context)
    }
}

fn normalise_static_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
