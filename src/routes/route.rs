//! Route surface of the application.
//!
//! A [`Route`] is the typed form of a location path such as `/trending/2` or
//! `/search?query=batman&page=1`. [`Route::parse`] accepts any path and maps
//! unknown locations to [`Route::NotFound`]; `Display` renders the canonical
//! path, so parsing a rendered route yields the same route.

use std::fmt;

/// One application location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// `/`
    #[default]
    Home,
    /// `/movie/:id`
    MovieDetails { id: u64 },
    /// `/favorites`
    Favorites,
    /// `/trending` or `/trending/:page`
    Trending { page: u32 },
    /// `/search?query=&page=`
    Search { query: String, page: u32 },
    /// Any path that matches no other route.
    NotFound { path: String },
}

impl Route {
    /// Parses a location path (with optional query string) into a route.
    ///
    /// Page numbers that are absent, unparsable, or below `1` become `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use moviedeck::routes::Route;
    ///
    /// assert_eq!(Route::parse("/trending/abc"), Route::Trending { page: 1 });
    /// assert_eq!(
    ///     Route::parse("/search?query=star%20wars&page=2"),
    ///     Route::Search { query: "star wars".to_string(), page: 2 }
    /// );
    /// ```
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let (path, query) = location.split_once('?').unwrap_or((location, ""));

        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] | [""] => Self::Home,
            ["favorites"] => Self::Favorites,
            ["trending"] => Self::Trending { page: 1 },
            ["trending", page] => Self::Trending {
                page: parse_page(page),
            },
            ["movie", id] => id.parse().map_or_else(
                |_| Self::not_found(location),
                |id| Self::MovieDetails { id },
            ),
            ["search"] => {
                let params = QueryParams::parse(query);
                Self::Search {
                    query: params.get("query").unwrap_or_default(),
                    page: params.get("page").as_deref().map_or(1, parse_page),
                }
            }
            _ => Self::not_found(location),
        }
    }

    fn not_found(location: &str) -> Self {
        Self::NotFound {
            path: location.to_string(),
        }
    }

    /// Search route for `query`, starting at page 1.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
            page: 1,
        }
    }

    /// Short label used in the header and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::MovieDetails { .. } => "details",
            Self::Favorites => "favorites",
            Self::Trending { .. } => "trending",
            Self::Search { .. } => "search",
            Self::NotFound { .. } => "not-found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::MovieDetails { id } => write!(f, "/movie/{id}"),
            Self::Favorites => f.write_str("/favorites"),
            Self::Trending { page } => write!(f, "/trending/{page}"),
            Self::Search { query, page } => {
                write!(f, "/search?query={}&page={page}", urlencoding::encode(query))
            }
            Self::NotFound { path } => f.write_str(path),
        }
    }
}

/// Parses a page number, falling back to `1`.
fn parse_page(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1).unwrap_or(1)
}

/// Decoded `key=value` pairs of a query string.
struct QueryParams<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryParams<'a> {
    fn parse(query: &'a str) -> Self {
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        Self { pairs }
    }

    /// First decoded value for `key`. `+` is read as a space.
    fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| {
                let value = value.replace('+', " ");
                urlencoding::decode(&value).map_or(value.clone(), |decoded| decoded.into_owned())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/favorites"), Route::Favorites);
        assert_eq!(Route::parse("/favorites/"), Route::Favorites);
        assert_eq!(Route::parse("/movie/603"), Route::MovieDetails { id: 603 });
    }

    #[test]
    fn trending_page_defaults_to_one() {
        assert_eq!(Route::parse("/trending"), Route::Trending { page: 1 });
        assert_eq!(Route::parse("/trending/0"), Route::Trending { page: 1 });
        assert_eq!(Route::parse("/trending/-4"), Route::Trending { page: 1 });
        assert_eq!(Route::parse("/trending/x"), Route::Trending { page: 1 });
        assert_eq!(Route::parse("/trending/3"), Route::Trending { page: 3 });
    }

    #[test]
    fn search_params_are_decoded() {
        assert_eq!(
            Route::parse("/search?query=batman"),
            Route::Search {
                query: "batman".to_string(),
                page: 1
            }
        );
        assert_eq!(
            Route::parse("/search?page=2&query=the+dark%20knight"),
            Route::Search {
                query: "the dark knight".to_string(),
                page: 2
            }
        );
        assert_eq!(Route::parse("/search"), Route::search(""));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/movie/abc"),
            Route::NotFound {
                path: "/movie/abc".to_string()
            }
        );
        assert_eq!(
            Route::parse("/nowhere/at/all"),
            Route::NotFound {
                path: "/nowhere/at/all".to_string()
            }
        );
    }

    #[test]
    fn rendered_search_route_matches_location() {
        assert_eq!(Route::search("batman").to_string(), "/search?query=batman&page=1");
        assert_eq!(
            Route::Search {
                query: "tom & jerry".to_string(),
                page: 4
            }
            .to_string(),
            "/search?query=tom%20%26%20jerry&page=4"
        );
    }

    #[test]
    fn parse_inverts_display() {
        let routes = [
            Route::Home,
            Route::Favorites,
            Route::MovieDetails { id: 157_336 },
            Route::Trending { page: 7 },
            Route::search("star wars"),
            Route::Search {
                query: "tom & jerry + friends".to_string(),
                page: 3,
            },
            Route::Search {
                query: "amélie".to_string(),
                page: 1,
            },
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }
}
