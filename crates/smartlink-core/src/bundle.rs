//! FHIR search-set Bundle parsing and projection.
//!
//! The gateway never interprets search semantics; it only flattens the
//! paginated Bundle envelope the FHIR server returns into a plain array
//! of resources plus a total count. A Bundle with no `entry` field is a
//! valid empty result, not an error.

use serde::Deserialize;
use serde_json::Value;

/// A FHIR search-set Bundle, reduced to the fields the gateway projects.
///
/// Unknown fields (links, search scores, fullUrl) are ignored on purpose:
/// pagination is the FHIR server's concern and the projection only keeps
/// the resources of the current page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bundle {
    /// Entries of the current page. Absent on an empty result set.
    #[serde(default)]
    pub entry: Option<Vec<BundleEntry>>,

    /// Total number of matches across all pages, when the server reports it.
    #[serde(default)]
    pub total: Option<u64>,
}

/// One Bundle entry wrapping a single resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BundleEntry {
    /// The wrapped resource, passed through untouched.
    #[serde(default)]
    pub resource: Option<Value>,
}

/// The flattened form of a search-set Bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedBundle {
    /// Resources of the current page, in Bundle order.
    pub resources: Vec<Value>,
    /// Reported total, defaulting to 0 when the server omits it.
    pub total: u64,
}

impl Bundle {
    /// Parses a response body as a search-set Bundle.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Projects the Bundle to `{resources, total}`.
    ///
    /// Entries without a `resource` field are skipped; a missing `entry`
    /// array yields an empty page; a missing `total` yields 0.
    #[must_use]
    pub fn project(self) -> ProjectedBundle {
        let resources = self
            .entry
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| e.resource)
            .collect();
        ProjectedBundle {
            resources,
            total: self.total.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projects_entries_in_order() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "total": 2,
            "entry": [
                { "resource": { "id": "a" } },
                { "resource": { "id": "b" } }
            ]
        }))
        .unwrap();

        let projected = bundle.project();
        assert_eq!(projected.total, 2);
        assert_eq!(projected.resources, vec![json!({"id": "a"}), json!({"id": "b"})]);
    }

    #[test]
    fn test_missing_entry_is_empty_result() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "type": "searchset"
        }))
        .unwrap();

        let projected = bundle.project();
        assert!(projected.resources.is_empty());
        assert_eq!(projected.total, 0);
    }

    #[test]
    fn test_missing_total_defaults_to_zero() {
        let bundle: Bundle = serde_json::from_value(json!({
            "entry": [ { "resource": { "id": "only" } } ]
        }))
        .unwrap();

        let projected = bundle.project();
        assert_eq!(projected.resources.len(), 1);
        assert_eq!(projected.total, 0);
    }

    #[test]
    fn test_entry_without_resource_is_skipped() {
        let bundle: Bundle = serde_json::from_value(json!({
            "total": 3,
            "entry": [
                { "resource": { "id": "a" } },
                { "fullUrl": "urn:uuid:orphan" },
                { "resource": { "id": "b" } }
            ]
        }))
        .unwrap();

        let projected = bundle.project();
        assert_eq!(projected.resources.len(), 2);
        assert_eq!(projected.total, 3);
    }

    #[test]
    fn test_from_json_rejects_non_json() {
        assert!(Bundle::from_json(b"not json").is_err());
    }
}
