use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub requires_prescription: bool,
    #[serde(default)]
    pub in_stock: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Parámetros de búsqueda/filtrado del catálogo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub search: String,
    pub category: Option<String>,
    pub page: u32,
}

impl ProductQuery {
    /// Construir el query string para el endpoint de productos
    pub fn to_query_string(&self, page_size: u32) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("page_size={}", page_size),
        ];
        if !self.search.trim().is_empty() {
            parts.push(format!("search={}", urlencode(self.search.trim())));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={}", urlencode(category)));
        }
        parts.join("&")
    }
}

/// Percent-encoding mínimo para valores de query
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_basico() {
        let query = ProductQuery {
            search: "".to_string(),
            category: None,
            page: 0,
        };
        assert_eq!(query.to_query_string(20), "page=0&page_size=20");
    }

    #[test]
    fn test_query_string_con_busqueda_y_categoria() {
        let query = ProductQuery {
            search: "ibuprofeno 400".to_string(),
            category: Some("analgésicos".to_string()),
            page: 2,
        };
        let qs = query.to_query_string(10);
        assert!(qs.contains("page=2"));
        assert!(qs.contains("search=ibuprofeno+400"));
        assert!(qs.contains("category=analg%C3%A9sicos"));
    }
}
