//! Builds an iCalendar feed of the MLB postseason from the MLB Stats API schedule.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod normalizer;
pub mod schedule;
pub mod summary;
pub mod time_resolver;
pub mod writer;
