//! Route templates for span names and metric labels.

use uuid::Uuid;

/// Replace identifier segments so every product shares one route label.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{product}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_stays_root() {
        assert_eq!(route_template("/"), "/");
    }

    #[test]
    fn static_routes_are_unchanged() {
        assert_eq!(route_template("/stock/summary"), "/stock/summary");
        assert_eq!(route_template("/products/"), "/products");
    }

    #[test]
    fn product_identifiers_are_templated() {
        let uuid = Uuid::now_v7();

        assert_eq!(route_template(&format!("/products/{uuid}")), "/products/{product}");
        assert_eq!(
            route_template(&format!("/stock/history/{uuid}")),
            "/stock/history/{product}"
        );
    }

    #[test]
    fn malformed_identifiers_are_kept_verbatim() {
        assert_eq!(route_template("/products/not-a-uuid"), "/products/not-a-uuid");
    }
}
