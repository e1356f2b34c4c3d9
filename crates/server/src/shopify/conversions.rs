//! Type conversions from GraphQL response types to domain types.
//!
//! These functions convert the generated `graphql_client` types into the
//! public `shopsearch_core` records, unwrapping Shopify's edge/node
//! connection shape on the way.

use shopsearch_core::{Product, ProductVariant};

use super::queries::search_products;

/// Convert a product search response into products.
///
/// Products keep Shopify's order; each product's variants are sorted by
/// ascending price.
pub fn convert_products(response: search_products::ResponseData) -> Vec<Product> {
    response
        .products
        .edges
        .into_iter()
        .map(|e| convert_product(e.node))
        .collect()
}

fn convert_product(product: search_products::SearchProductsProductsEdgesNode) -> Product {
    let variants = product
        .variants
        .edges
        .into_iter()
        .map(|e| convert_variant(e.node))
        .collect();

    Product::new(product.id, product.title, variants)
}

fn convert_variant(
    v: search_products::SearchProductsProductsEdgesNodeVariantsEdgesNode,
) -> ProductVariant {
    ProductVariant::new(v.id, v.title, v.price)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(value: serde_json::Value) -> search_products::ResponseData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unwraps_edges_and_nodes() {
        let products = convert_products(response(json!({
            "products": {
                "edges": [{
                    "node": {
                        "id": "gid://shopify/Product/1",
                        "title": "Red Shirt",
                        "variants": {
                            "edges": [
                                {"node": {"id": "gid://shopify/ProductVariant/11", "title": "L", "price": "25.00"}},
                                {"node": {"id": "gid://shopify/ProductVariant/12", "title": "S", "price": "20.00"}}
                            ]
                        }
                    }
                }]
            }
        })));

        assert_eq!(
            products,
            vec![Product {
                id: "gid://shopify/Product/1".to_string(),
                title: "Red Shirt".to_string(),
                variants: vec![
                    ProductVariant::new("gid://shopify/ProductVariant/12", "S", "20.00"),
                    ProductVariant::new("gid://shopify/ProductVariant/11", "L", "25.00"),
                ],
            }]
        );
    }

    #[test]
    fn test_empty_connection() {
        let products = convert_products(response(json!({"products": {"edges": []}})));
        assert!(products.is_empty());
    }

    #[test]
    fn test_product_order_is_preserved() {
        let products = convert_products(response(json!({
            "products": {
                "edges": [
                    {"node": {"id": "gid://shopify/Product/2", "title": "Zebra", "variants": {"edges": []}}},
                    {"node": {"id": "gid://shopify/Product/1", "title": "Aardvark", "variants": {"edges": []}}}
                ]
            }
        })));

        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["gid://shopify/Product/2", "gid://shopify/Product/1"]);
    }
}
