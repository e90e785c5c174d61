//! Axum request handlers, one module per resource.

use crate::AppState;

pub mod transactions;
