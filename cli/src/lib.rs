//! Terminal front end of a URL validation service
//!
//! A [`controller::FormController`] takes a URL from the input or from an example,
//! posts it to the service and renders the JSON reply into a [`display::RenderTarget`].
pub mod api;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod logger;
pub mod view;
pub mod writer;
