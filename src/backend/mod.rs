//! # Backend Integration Module
//!
//! This module is the only place that talks to the Learnitor REST backend. It
//! consists of one configured HTTP client and a thin module per resource.
//!
//! ## Architecture
//!
//! ```text
//! Views / CLI
//!      ↓
//! Resource modules (courses, categories, topics, questions, answers, materials)
//!      ↓
//! Repository<R: Resource>   typed list/create/update/delete
//!      ↓
//! ApiClient                 base URL, JSON, Authorization header
//!      ↓
//! Learnitor REST backend
//! ```
//!
//! ## Credentials
//!
//! [`ApiClient`] reads the credential from an injected [`Credentials`] holder
//! on every request and sends it as `Authorization: Token <credential>`.
//! Resource modules never see or pass credentials themselves.
//!
//! ## Endpoints
//!
//! Creates `POST` to the collection path; updates and deletes address the item
//! path `<collection>{id}/`.
//!
//! | Resource | Collection | Listing filter | Update |
//! |---|---|---|---|
//! | Course | `/api/courses/` | none | `PATCH` |
//! | Category | `/api/categories/` | none | `PATCH` |
//! | Topic | `/api/topics/` | `?course_id=` | `PATCH` |
//! | Question | `/api/questions/` | `by_topics/?topic_id=` | `PUT` |
//! | Answer | `/api/answers/` | `?question_id=` | `PATCH` |
//! | Material | `/api/materials/` | `?topic_id=` | `PATCH` |
//!
//! Authentication uses `POST /api/login/` and `GET /api/user/`; counters use
//! `GET /api/topics/total/` and `GET /api/questions/total/`.
//!
//! ## Error Handling
//!
//! Calls return [`crate::error::ApiError`]. Resource modules print a
//! diagnostic and return the error unchanged; deciding what the user sees is
//! left to the caller. Nothing is retried.

pub mod answers;
pub mod auth;
pub mod categories;
mod client;
pub mod courses;
pub mod materials;
pub mod questions;
mod repository;
pub mod topics;

pub use client::{AUTH_SCHEME, ApiClient, Credentials};
pub use repository::{Repository, Resource, UpdateMethod};
