//! NewsAPI.org integration
//!
//! Client for the NewsAPI.org top-headlines endpoint
//! (<https://newsapi.org/docs/endpoints/top-headlines>).

pub mod client;
mod models;

pub use client::{NewsApi, NewsApiClient, NewsConfig, NewsError};
pub use models::{Article, ArticleSource, HeadlinesResponse};
