//! Extracurricular activity signup service for Mergington High School.
//!
//! Students list the school's activities, sign up with their school email
//! and unregister again. Everything lives in memory for the lifetime of the
//! process.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
