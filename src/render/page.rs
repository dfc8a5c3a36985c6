//! The page shell: header with stylesheet, the search form and the
//! results section, plus the small fragments the results are built from.

use askama::Template;

/// What was searched for and the rendered outcome.
pub struct SearchResults<'a> {
    pub identifier : &'a str,
    pub body : &'a str,     // already rendered html
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    results : Option<SearchResults<'a>>,
}

impl<'a> PageTemplate<'a> {

    /// The page with only the search form.
    pub fn index() -> PageTemplate<'a> {
        PageTemplate { results : None }
    }

    /// The search form followed by the results for `identifier`.
    pub fn results(identifier : &'a str, body : &'a str) -> PageTemplate<'a> {
        PageTemplate {
            results : Some(SearchResults { identifier, body }),
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<ul class="matches">{% for card in cards %}<li>{{ card|safe }}</li>{% endfor %}</ul>"#,
    ext = "html"
)]
struct MatchListTemplate<'a> {
    cards : &'a [String],
}

#[derive(Template)]
#[template(source = r#"<p class="error">{{ message }}</p>"#, ext = "html")]
struct ErrorTemplate<'a> {
    message : &'a str,
}

/// Wraps each rendered match in a list item, keeping their order.
pub fn match_list(cards : &[String]) -> askama::Result<String> {
    MatchListTemplate { cards }.render()
}

pub fn error_message(message : &str) -> askama::Result<String> {
    ErrorTemplate { message }.render()
}
