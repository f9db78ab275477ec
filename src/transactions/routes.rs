//! The transaction route table.
//!
//! Two patterns, matched in declared order:
//!
//! | name                      | path                 | capability               |
//! |---------------------------|----------------------|--------------------------|
//! | `transaction-list-create` | `transactions/`      | list and create          |
//! | `transaction-detail`      | `transactions/<id>/` | retrieve, update, delete |
//!
//! `<id>` only matches a lowercase hyphenated UUID. Anything else is not found.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use regex::Regex;
use uuid::Uuid;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

lazy_static! {
    static ref UUID_REGEX: Regex =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
}

pub const TRANSACTION_LIST_CREATE: &str = "transaction-list-create";
pub const TRANSACTION_DETAIL: &str = "transaction-detail";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionRoute {
    ListCreate,
    Detail,
}

impl TransactionRoute {
    pub const ALL: [TransactionRoute; 2] = [Self::ListCreate, Self::Detail];

    pub fn name(&self) -> &'static str {
        match *self {
            Self::ListCreate => TRANSACTION_LIST_CREATE,
            Self::Detail => TRANSACTION_DETAIL,
        }
    }

    /// The pattern registered with the axum router.
    pub fn pattern(&self) -> &'static str {
        match *self {
            Self::ListCreate => "/transactions/",
            Self::Detail => "/transactions/:id/",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.name() == name)
    }

    /// Builds the concrete path for this route. `Detail` needs an id, `ListCreate` takes none.
    pub fn path(&self, id: Option<&Uuid>) -> Option<String> {
        match (*self, id) {
            (Self::ListCreate, None) => Some("/transactions/".to_string()),
            (Self::Detail, Some(id)) => Some(format!("/transactions/{}/", id.hyphenated())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: TransactionRoute,
    pub id: Option<Uuid>,
}

pub fn parse_id(segment: &str) -> Option<Uuid> {
    if !UUID_REGEX.is_match(segment) {
        return None;
    }

    Uuid::parse_str(segment).ok()
}

/// Matches a request path against the table. The leading `/` is optional.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let rest = path.strip_prefix("transactions/")?;

    if rest.is_empty() {
        return Some(RouteMatch {
            route: TransactionRoute::ListCreate,
            id: None,
        });
    }

    let id = parse_id(rest.strip_suffix('/')?)?;

    Some(RouteMatch {
        route: TransactionRoute::Detail,
        id: Some(id),
    })
}

pub fn reverse(name: &str, id: Option<&Uuid>) -> Option<String> {
    TransactionRoute::from_name(name)?.path(id)
}

/// The `id` path parameter of the detail route. Rejects with not found when the
/// segment is not a UUID, so handlers never see a malformed id.
#[derive(Debug, Clone, Copy)]
pub struct TransactionId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for TransactionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(Path(id)) = Path::<String>::from_request_parts(parts, state).await
        else {
            return Err(DefaultApiError::NotFound.value());
        };

        match parse_id(&id) {
            Some(id) => Ok(TransactionId(id)),
            None => Err(DefaultApiError::NotFound.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn collection_path_selects_list_create() {
        assert_eq!(
            resolve("transactions/"),
            Some(RouteMatch {
                route: TransactionRoute::ListCreate,
                id: None,
            })
        );
        assert_eq!(
            resolve("/transactions/").map(|m| m.route),
            Some(TransactionRoute::ListCreate)
        );
    }

    #[test]
    fn uuid_path_selects_detail_with_id() {
        let m = resolve(&format!("transactions/{}/", ID)).unwrap();

        assert_eq!(m.route, TransactionRoute::Detail);
        assert_eq!(m.id.unwrap().to_string(), ID);
    }

    #[test]
    fn generated_uuids_always_resolve() {
        for _ in 0..32 {
            let id = Uuid::new_v4();
            let m = resolve(&format!("/transactions/{}/", id)).unwrap();

            assert_eq!(m.id, Some(id));
        }
    }

    #[test]
    fn non_uuid_id_is_not_found() {
        assert_eq!(resolve("transactions/abc/"), None);
        assert_eq!(resolve("transactions/not-a-uuid/"), None);
        // simple, braced and urn forms are valid uuids but not route ids
        assert_eq!(resolve("transactions/123e4567e89b12d3a456426614174000/"), None);
        assert_eq!(
            resolve("transactions/{123e4567-e89b-12d3-a456-426614174000}/"),
            None
        );
        assert_eq!(
            resolve("transactions/123E4567-E89B-12D3-A456-426614174000/"),
            None
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("transaction/"), None);
        assert_eq!(resolve("transactions"), None);
        assert_eq!(resolve(&format!("transactions/{}", ID)), None);
        assert_eq!(resolve(&format!("transactions/{}/extra/", ID)), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn names_reverse_to_paths() {
        let id = Uuid::parse_str(ID).unwrap();

        assert_eq!(
            reverse(TRANSACTION_LIST_CREATE, None).as_deref(),
            Some("/transactions/")
        );
        assert_eq!(
            reverse(TRANSACTION_DETAIL, Some(&id)),
            Some(format!("/transactions/{}/", ID))
        );
    }

    #[test]
    fn reverse_needs_known_name_and_matching_params() {
        let id = Uuid::new_v4();

        assert_eq!(reverse("transaction-list", None), None);
        assert_eq!(reverse(TRANSACTION_DETAIL, None), None);
        assert_eq!(reverse(TRANSACTION_LIST_CREATE, Some(&id)), None);
    }

    #[test]
    fn reverse_then_resolve_round_trips() {
        let id = Uuid::new_v4();

        for (route, id) in [
            (TransactionRoute::ListCreate, None),
            (TransactionRoute::Detail, Some(id)),
        ] {
            let path = reverse(route.name(), id.as_ref()).unwrap();

            assert_eq!(resolve(&path), Some(RouteMatch { route, id }));
        }
    }
}
