//! Optional query-string parameter filtering and encoding.

use crate::{EndpointError, EndpointResult};
use url::Url;

/// Append optional query parameters to a URL.
///
/// Pairs whose value is `None` or empty (or whose key is empty) are dropped;
/// the remaining pairs keep their original order and are form-encoded. When
/// the URL already carries a query string the pairs are joined with `&`,
/// otherwise a `?` is introduced. If every pair is dropped the URL is
/// returned unchanged.
///
/// Fails with [`EndpointError::InvalidUrl`] when `url` is neither a valid
/// absolute nor relative URL.
pub fn with_query_params(
    url: &str,
    params: &[(&str, Option<&str>)],
) -> EndpointResult<String> {
    validate_url(url)?;

    let kept: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !key.is_empty() && !v.is_empty() => Some((*key, *v)),
            _ => None,
        })
        .collect();

    if kept.is_empty() {
        return Ok(url.to_string());
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in kept {
        query.append_pair(key, value);
    }
    let query = query.finish();

    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{url}{separator}{query}"))
}

/// Accept absolute URLs outright and relative references by resolving them
/// against a placeholder base.
fn validate_url(url: &str) -> EndpointResult<()> {
    match Url::parse(url) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://relative.invalid")
                .map_err(|e| EndpointError::invalid_url(url, e.to_string()))?;
            base.join(url)
                .map(|_| ())
                .map_err(|e| EndpointError::invalid_url(url, e.to_string()))
        }
        Err(e) => Err(EndpointError::invalid_url(url, e.to_string())),
    }
}
