//! Products Data

use crate::{
    domain::products::{errors::ProductsServiceError, records::ProductUuid},
    pagination::PageRequest,
};

pub const NAME_MAX_CHARS: usize = 255;
pub const CATEGORY_MAX_CHARS: usize = 100;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub description: Option<String>,

    /// Initial on-hand quantity. Creation is the only path that sets it directly.
    pub quantity: i64,
}

impl NewProduct {
    /// Trim the text fields and reject anything the catalog would not accept.
    pub(crate) fn normalised(self) -> Result<Self, ProductsServiceError> {
        if self.quantity < 0 {
            return Err(ProductsServiceError::InvalidInput(
                "initial quantity cannot be negative",
            ));
        }

        let (name, sku, category, description) =
            normalise_details(self.name, self.sku, self.category, self.description)?;

        Ok(Self {
            uuid: self.uuid,
            name,
            sku,
            category,
            description,
            quantity: self.quantity,
        })
    }
}

/// Product Update Data
///
/// Carries descriptive attributes only; quantity changes go through the stock ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub(crate) fn normalised(self) -> Result<Self, ProductsServiceError> {
        let (name, sku, category, description) =
            normalise_details(self.name, self.sku, self.category, self.description)?;

        Ok(Self {
            name,
            sku,
            category,
            description,
        })
    }
}

/// Product listing query
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or SKU.
    pub search: Option<String>,
    pub page: PageRequest,
}

impl ProductQuery {
    /// The search term as a `LIKE` pattern fragment, with wildcards escaped.
    pub(crate) fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(escape_like)
    }
}

type Details = (String, String, Option<String>, Option<String>);

fn normalise_details(
    name: String,
    sku: String,
    category: Option<String>,
    description: Option<String>,
) -> Result<Details, ProductsServiceError> {
    let name = name.trim().to_owned();
    let sku = sku.trim().to_owned();
    let category = non_blank(category);
    let description = non_blank(description);

    if name.is_empty() {
        return Err(ProductsServiceError::InvalidInput("name is required"));
    }

    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ProductsServiceError::InvalidInput(
            "name must be at most 255 characters",
        ));
    }

    if sku.is_empty() {
        return Err(ProductsServiceError::InvalidInput("sku is required"));
    }

    if category
        .as_ref()
        .is_some_and(|category| category.chars().count() > CATEGORY_MAX_CHARS)
    {
        return Err(ProductsServiceError::InvalidInput(
            "category must be at most 100 characters",
        ));
    }

    Ok((name, sku, category, description))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }

        escaped.push(ch);
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, sku: &str, quantity: i64) -> NewProduct {
        NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: None,
            description: None,
            quantity,
        }
    }

    #[test]
    fn negative_initial_quantity_is_invalid_input() {
        let result = new_product("Laptop", "LP14-001", -1).normalised();

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidInput(_))),
            "expected InvalidInput, got {result:?}"
        );
    }

    #[test]
    fn blank_name_or_sku_is_invalid_input() {
        assert!(new_product("   ", "LP14-001", 0).normalised().is_err());
        assert!(new_product("Laptop", "", 0).normalised().is_err());
    }

    #[test]
    fn overlong_name_and_category_are_rejected() {
        assert!(new_product(&"a".repeat(256), "SKU", 0).normalised().is_err());

        let mut product = new_product("Laptop", "SKU", 0);
        product.category = Some("c".repeat(101));

        assert!(product.normalised().is_err());
    }

    #[test]
    fn normalised_trims_and_drops_blank_optionals() -> Result<(), ProductsServiceError> {
        let mut product = new_product("  Mouse Wireless ", " MS-W002 ", 50);
        product.category = Some("  ".to_string());
        product.description = Some(" Bluetooth ".to_string());

        let product = product.normalised()?;

        assert_eq!(product.name, "Mouse Wireless");
        assert_eq!(product.sku, "MS-W002");
        assert_eq!(product.category, None);
        assert_eq!(product.description.as_deref(), Some("Bluetooth"));

        Ok(())
    }

    #[test]
    fn search_pattern_escapes_like_wildcards() {
        let query = ProductQuery {
            search: Some(" 50%_off\\ ".to_string()),
            page: PageRequest::new(1, 10),
        };

        assert_eq!(query.search_pattern().as_deref(), Some("50\\%\\_off\\\\"));
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = ProductQuery {
            search: Some("   ".to_string()),
            page: PageRequest::new(1, 10),
        };

        assert_eq!(query.search_pattern(), None);
    }
}
