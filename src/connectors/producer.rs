//! List and get plumbing shared by every vendor producer.

use serde_json::Value;
use std::sync::Arc;

use super::client::RestConnection;
use super::envelope;
use super::errors::ConnectorError;
use super::paging::PagedResults;

/// Encode one path segment taken from caller input
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Issue one paged GET and populate `results` on success.
///
/// `scope_id` names the parent resource for nested listings so a 404 reports
/// which parent was missing. On failure `results` is left as it was.
pub async fn list_into<T>(
    connection: &RestConnection,
    path: &str,
    filters: Vec<(String, String)>,
    scope_id: Option<&str>,
    results: &mut PagedResults<T>,
    map: fn(&Value) -> T,
) -> Result<(), ConnectorError> {
    let handle = connection.http_client()?;
    let mut query = results.query(handle.vendor().paging);
    query.extend(filters);

    let page = handle.get_page(path, &query, scope_id).await?;
    let items = page.rows.iter().map(map).collect::<Vec<_>>();
    tracing::debug!(
        vendor = handle.vendor().name,
        path,
        returned = items.len(),
        total = page.total,
        "Listed resources"
    );
    results.fill(items, page.total, page.page_token);
    Ok(())
}

/// Fetch one object by id, accepting it nested under `data` or at the top level
pub async fn get_one<T>(
    connection: &RestConnection,
    path: &str,
    id: &str,
    map: fn(&Value) -> T,
) -> Result<T, ConnectorError> {
    let handle = connection.http_client()?;
    let response = handle.get(path, &[], Some(id)).await?;
    envelope::single(&response.body)
        .map(map)
        .ok_or_else(|| {
            ConnectorError::no_such_object(
                format!("{} returned no object for {}", handle.vendor().name, path),
                Some(id),
            )
        })
}

/// Fail fast when a producer is built against a closed connection
pub fn require_connected(connection: &Arc<RestConnection>) -> Result<(), ConnectorError> {
    if connection.is_connected() {
        Ok(())
    } else {
        Err(ConnectorError::NotConnected(format!(
            "connect to {} before creating producers",
            connection.vendor().name
        )))
    }
}
