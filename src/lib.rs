pub mod app_config;
pub mod error;
pub mod forecast;
pub mod market;
pub mod news;
pub mod output;
pub mod pipeline;
pub mod time_util;
