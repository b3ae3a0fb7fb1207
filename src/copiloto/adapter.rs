//! Request adapter.
//!
//! Maps externally supplied key/value parameters onto the query engine and
//! serializes results the way the dashboard's REST endpoints do:
//! `{"success": true, "data": [...], "total": n}` on success, `{"error":
//! "..."}` with a failure status otherwise. The engine itself cannot fail;
//! everything caught here is an adapter-level failure (malformed body,
//! store I/O) and comes back as one generic internal error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CopilotoError, Result};
use crate::model::{CatalogItem, CatalogKind, NewItem};
use crate::query::{self, QueryFilter};
use crate::store::CatalogStore;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful query payload.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub data: Vec<CatalogItem>,
    pub total: usize,
}

/// Successful create payload.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    pub data: CatalogItem,
}

/// Failure payload.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A status code plus serialized JSON body, transport-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Translate raw request parameters into filter criteria. The `search` key
/// feeds the text search; every other key is taken as an axis value. Keys
/// the schema does not declare are ignored by the engine.
pub fn filter_from_params(params: &HashMap<String, String>) -> QueryFilter {
    let mut filter = QueryFilter::new();
    for (key, value) in params {
        if key == "search" {
            filter.search = Some(value.clone());
        } else {
            filter.axes.insert(key.clone(), value.clone());
        }
    }
    filter
}

/// GET-shaped endpoint: filter one catalog.
pub fn handle_query<S: CatalogStore>(
    store: &S,
    kind: CatalogKind,
    params: &HashMap<String, String>,
) -> Reply {
    match query_reply(store, kind, params) {
        Ok(reply) => reply,
        Err(err) => internal_error(err),
    }
}

fn query_reply<S: CatalogStore>(
    store: &S,
    kind: CatalogKind,
    params: &HashMap<String, String>,
) -> Result<Reply> {
    let filter = filter_from_params(params);
    let mut items = store.list(kind)?;
    // The endpoints serve live items; the engine itself does not filter on
    // activity.
    items.retain(|item| item.is_active);

    let data = query::query(query::schema(kind), &items, &filter);
    let response = QueryResponse {
        success: true,
        total: data.len(),
        data,
    };
    Ok(Reply {
        status: STATUS_OK,
        body: serde_json::to_string(&response)?,
    })
}

/// POST-shaped endpoint: append one item from a JSON body.
pub fn handle_create<S: CatalogStore>(store: &mut S, kind: CatalogKind, body: &str) -> Reply {
    match create_reply(store, kind, body) {
        Ok(reply) => reply,
        Err(err) => internal_error(err),
    }
}

fn create_reply<S: CatalogStore>(store: &mut S, kind: CatalogKind, body: &str) -> Result<Reply> {
    let draft: NewItem = serde_json::from_str(body)?;
    let item = store.append(kind, draft)?;
    let response = CreateResponse {
        success: true,
        data: item,
    };
    Ok(Reply {
        status: STATUS_CREATED,
        body: serde_json::to_string(&response)?,
    })
}

fn internal_error(err: CopilotoError) -> Reply {
    log::error!("request adapter failure: {}", err);
    let body = serde_json::to_string(&ErrorBody {
        error: INTERNAL_ERROR_MESSAGE.to_string(),
    })
    .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", INTERNAL_ERROR_MESSAGE));
    Reply {
        status: STATUS_INTERNAL_ERROR,
        body,
    }
}
