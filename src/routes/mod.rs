//! Route surface and per-page controllers.
//!
//! Each page of the application has one controller. A controller turns a
//! location into fetch requests and turns fetch results into store mutations
//! and location rewrites. Controllers only own transient state: their load
//! phase, locally fetched lists, and the token of the fetch they wait for.
//!
//! # Modules
//!
//! - [`route`]: Typed locations with parsing and rendering
//! - [`pagination`]: Page window and jump-to-page validation
//! - [`phase`]: Load phase and request tokens
//! - [`home`], [`search`], [`trending`], [`details`], [`favorites`]: Page
//!   controllers

pub mod details;
pub mod favorites;
pub mod home;
pub mod pagination;
pub mod phase;
pub mod route;
pub mod search;
pub mod trending;

pub use details::DetailsPage;
pub use favorites::FavoritesPage;
pub use home::{HomePage, HomeSettings};
pub use pagination::{page_window, validate_page_input, PageInputError, PageItem};
pub use phase::{ActiveRequest, Generation, Phase, RequestToken};
pub use route::Route;
pub use search::SearchPage;
pub use trending::TrendingPage;
