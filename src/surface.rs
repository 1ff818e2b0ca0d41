// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! User-facing notices, client routes and error pages

use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

// =============================================================================
// Error pages
// =============================================================================

/// Error pages, keyed by HTTP-like status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorPage {
    /// `0`: the backend could not be reached
    NoConnection,
    /// `204`: the requested list is empty
    NoContent,
    /// `404`: unknown resource or route
    NotFound,
    /// `500`: the backend failed while handling the request
    InternalServerError,
    /// `520`: anything else
    Unknown,
}

impl ErrorPage {
    /// Map a status code onto its page; unlisted codes are `Unknown`
    #[must_use]
    pub fn from_status(code: u16) -> Self {
        match code {
            0 => Self::NoConnection,
            204 => Self::NoContent,
            404 => Self::NotFound,
            500 => Self::InternalServerError,
            _ => Self::Unknown,
        }
    }

    /// Status code used in the `/error/:code` route
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::NoConnection => 0,
            Self::NoContent => 204,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::Unknown => 520,
        }
    }

    /// Text shown on the page
    #[must_use]
    pub fn details(&self) -> ErrorDetails {
        match self {
            Self::NoConnection => ErrorDetails {
                title: "Sails without Wind",
                playful_message: "The ship is pristine, the crew is ready, but with no connection, there's no wind to carry us forward.",
                description: "The server is not responding. This is a common error when the server is down, or the connection to the server is lost.",
                guidance: &[
                    "Check your internet connection to ensure you have an active and stable connection.",
                    "Retry the command to see if the connection can be re-established.",
                    "Inspect your firewall and proxy settings to ensure they aren't blocking the connection to the server.",
                    "Verify that backend_url in the configuration points at a running registry backend.",
                ],
                button_text: "Try Again",
                button_link: "/",
            },
            Self::NoContent => ErrorDetails {
                title: "Treasure Chest Empty",
                playful_message: "The map led to the spot, the chest was unearthed, but inside, a hollow echo: no content found.",
                description: "The server has successfully processed the request, but is not returning any content. The requested list is empty.",
                guidance: &[
                    "Confirm the API endpoint is designed to return content under the current conditions.",
                    "Review the server logs to ensure that the request is being processed correctly and no data should be returned.",
                    "Populate the database, then list again.",
                ],
                button_text: "Continue",
                button_link: "/",
            },
            Self::NotFound => ErrorDetails {
                title: "Ocean Not Found",
                playful_message: "You've ventured beyond the sea chart's edge.",
                description: "The server can't find the requested resource. This is a common error when the URL is misspelled, or the resource has been moved or deleted.",
                guidance: &[
                    "Ensure the URL and endpoints are correctly specified.",
                    "Verify that the server routes and resource identifiers are configured correctly.",
                    "Check the API documentation to ensure the endpoint still exists and hasn't been deprecated or moved.",
                ],
                button_text: "Return to Items",
                button_link: "/",
            },
            Self::InternalServerError => ErrorDetails {
                title: "Cabin Fever Confusion",
                playful_message: "The ship's inner workings are in a state of cabin fever, leading to a tumultuous internal error.",
                description: "An unexpected issue occurred within the server while processing the request. This may also occur when there is no connection to the database.",
                guidance: &[
                    "Check the server logs for any unhandled exceptions or errors that could give insight into the issue.",
                    "Ensure all server dependencies are correctly installed and configured.",
                    "Use debugging tools to trace the server's execution flow and identify what might be causing the internal error.",
                ],
                button_text: "Try Again",
                button_link: "/",
            },
            Self::Unknown => ErrorDetails {
                title: "Crew Caught Off Guard",
                playful_message: "Uhm, the crew didn't prepare for this.",
                description: "This error signifies an unforeseen complication during the request processing, without specific details provided. This is a generic error message.",
                guidance: &[
                    "Review the full error response and server logs for any clues about what went wrong.",
                    "Validate your request payload to ensure it conforms to the expected format.",
                    "If using third-party services, check their status pages for any ongoing issues that could affect your requests.",
                ],
                button_text: "Return to Items",
                button_link: "/",
            },
        }
    }
}

/// Static text of an error page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    /// Headline
    pub title: &'static str,
    /// One-line flavour text
    pub playful_message: &'static str,
    /// What the status means
    pub description: &'static str,
    /// Things to try
    pub guidance: &'static [&'static str],
    /// Label of the way out
    pub button_text: &'static str,
    /// Route the way out leads to
    pub button_link: &'static str,
}

// =============================================================================
// Routes
// =============================================================================

/// Client-side routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// `/items` (also `/` and the legacy `/typecodes`)
    Items,
    /// `/extensions`
    Extensions,
    /// `/projects`
    Projects,
    /// `/error/:code`, optionally remembering the route that failed
    Error {
        /// Which page
        page: ErrorPage,
        /// Route the user came from
        origin: Option<String>,
    },
}

impl Route {
    /// Error route without an origin
    #[must_use]
    pub fn error(page: ErrorPage) -> Self {
        Self::Error { page, origin: None }
    }

    /// Resolve a path; anything unknown lands on `/error/404`
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" | "/items" | "/typecodes" => Self::Items,
            "/extensions" => Self::Extensions,
            "/projects" => Self::Projects,
            other => match other.strip_prefix("/error/") {
                Some(code) => {
                    let page = code
                        .parse::<u16>()
                        .map_or(ErrorPage::Unknown, ErrorPage::from_status);
                    Self::error(page)
                }
                None => Self::error(ErrorPage::NotFound),
            },
        }
    }

    /// Link target of the error page's button; the empty-result page leads back to its origin
    #[must_use]
    pub fn button_link(&self) -> Option<&str> {
        match self {
            Self::Error { page: ErrorPage::NoContent, origin: Some(origin) } => Some(origin.as_str()),
            Self::Error { page, .. } => Some(page.details().button_link),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Items => f.write_str("/items"),
            Self::Extensions => f.write_str("/extensions"),
            Self::Projects => f.write_str("/projects"),
            Self::Error { page, .. } => write!(f, "/error/{}", page.code()),
        }
    }
}

// =============================================================================
// Notices
// =============================================================================

/// Kind of notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    /// Operation succeeded
    Success,
    /// Operation failed
    Failure,
    /// Passive information
    Information,
}

/// Toast-style message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Kind
    pub level: NoticeLevel,
    /// Message body
    pub message: String,
}

impl Notice {
    /// `"{object} with ID {id} {action}!"`, or just `action` without an id
    #[must_use]
    pub fn success(action: &str, object: &str, id: Option<i64>) -> Self {
        let message = match id {
            Some(id) => format!("{object} with ID {id} {action}!"),
            None => action.to_string(),
        };
        Self { level: NoticeLevel::Success, message }
    }

    /// Success with a custom text
    #[must_use]
    pub fn success_text(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    /// Failure
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Failure, message: message.into() }
    }

    /// Information
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Information, message: message.into() }
    }

    /// Heading shown above the message
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "Success",
            NoticeLevel::Failure => "Failure",
            NoticeLevel::Information => "Information",
        }
    }
}

// =============================================================================
// Surfaces
// =============================================================================

/// Where notices and navigation end up
pub trait Surface: Send + Sync {
    /// Show a notice
    fn notify(&self, notice: Notice);
    /// Move to a route
    fn navigate(&self, route: Route);
}

/// Terminal surface: notices and error pages go to stderr
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    color: bool,
}

impl ConsoleSurface {
    /// Create a console surface
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render an error page as text
    #[must_use]
    pub fn render_error_page(&self, route: &Route) -> String {
        let Route::Error { page, .. } = route else {
            return format!("{route}\n");
        };
        let details = page.details();
        let mut out = String::new();
        let title = format!("{} ({})", details.title, page.code());
        if self.color {
            out.push_str(&format!("{}\n", title.red().bold()));
        } else {
            out.push_str(&format!("{title}\n"));
        }
        out.push_str(&format!("  {}\n\n", details.playful_message));
        out.push_str(&format!("  {}\n\n", details.description));
        for hint in details.guidance {
            out.push_str(&format!("  - {hint}\n"));
        }
        if let Some(link) = route.button_link() {
            out.push_str(&format!("\n  {}: {}\n", details.button_text, link));
        }
        out
    }
}

impl Surface for ConsoleSurface {
    fn notify(&self, notice: Notice) {
        tracing::debug!("notice {:?}: {}", notice.level, notice.message);
        let label = match (self.color, notice.level) {
            (false, _) => notice.label().to_string(),
            (true, NoticeLevel::Success) => notice.label().green().bold().to_string(),
            (true, NoticeLevel::Failure) => notice.label().red().bold().to_string(),
            (true, NoticeLevel::Information) => notice.label().cyan().bold().to_string(),
        };
        eprintln!("{label}: {}", notice.message);
    }

    fn navigate(&self, route: Route) {
        tracing::debug!("navigate to {}", route);
        if matches!(route, Route::Error { .. }) {
            eprint!("{}", self.render_error_page(&route));
        }
    }
}

/// Surface that records everything it is told
#[derive(Debug, Default)]
pub struct MemorySurface {
    notices: Mutex<Vec<Notice>>,
    routes: Mutex<Vec<Route>>,
}

impl MemorySurface {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Routes navigated to so far
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Notices of one level
    #[must_use]
    pub fn notices_of(&self, level: NoticeLevel) -> Vec<Notice> {
        self.notices().into_iter().filter(|n| n.level == level).collect()
    }
}

impl Surface for MemorySurface {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }

    fn navigate(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}
