//! HTTP request handlers for the pagination API.

pub mod health;
pub mod nav;
pub mod openapi;

pub use health::{__path_health_check, Health, health_check};
pub use nav::{
    __path_get_nav, __path_get_nav_html, NavQuery, NavResponse, get_nav, get_nav_html,
};
pub use openapi::{ApiDoc, openapi_json};
