//! Project catalog for the Built by Aykays portfolio: loads projects from
//! the WordPress CMS, normalizes them and filters them for display.

pub mod cms;
pub mod config;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod portfolio;
pub mod utils;
pub mod view;
