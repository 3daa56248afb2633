// ============================================================================
// HOME VIEW - Catálogo de productos con búsqueda y filtro por categoría
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, input_value, input_value_by_id, on_change, on_click, on_input, ElementBuilder,
};
use crate::models::product::Product;
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::CatalogViewModel;

/// Renderizar el catálogo de productos
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("home-view").build();

    // Barra de búsqueda (debounce implícito: el fetch se dispara al escribir
    // y el guard aborta la request anterior)
    let search_bar = ElementBuilder::new("div")?.class("search-bar").build();
    let search_input = ElementBuilder::new("input")?
        .class("search-input")
        .id("product-search")?
        .attr("type", "search")?
        .attr("placeholder", &t("buscar_productos", &lang))?
        .attr("value", &state.product_query.borrow().search)?
        .build();
    {
        let state_clone = state.clone();
        on_input(&search_input, move |_| {
            let value = input_value_by_id("product-search");
            {
                let mut query = state_clone.product_query.borrow_mut();
                query.search = value;
                query.page = 0;
            }
            let state_inner = state_clone.clone();
            spawn_local(async move {
                CatalogViewModel::new().load_products(state_inner).await;
            });
        })?;
    }
    append_child(&search_bar, &search_input)?;
    append_child(&search_bar, &render_category_filter(state)?)?;
    append_child(&container, &search_bar)?;

    // Grid de productos
    let grid = ElementBuilder::new("div")?.class("product-grid").build();
    for product in state.products.borrow().iter() {
        append_child(&grid, &render_product_card(state, product)?)?;
    }
    append_child(&container, &grid)?;

    Ok(container)
}

/// Filtro por categoría. Las opciones se derivan de los productos cargados;
/// la categoría activa se conserva aunque el filtro la deje fuera de la lista.
fn render_category_filter(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let selected = state.product_query.borrow().category.clone();

    let select = ElementBuilder::new("select")?
        .class("category-filter")
        .id("category-filter")?
        .build();

    let all = ElementBuilder::new("option")?
        .attr("value", "")?
        .text(&t("todas_categorias", &lang))
        .build();
    append_child(&select, &all)?;

    let mut categories: Vec<String> = state
        .products
        .borrow()
        .iter()
        .filter_map(|p| p.category.clone())
        .collect();
    if let Some(current) = &selected {
        categories.push(current.clone());
    }
    categories.sort();
    categories.dedup();

    for category in categories {
        let option = ElementBuilder::new("option")?
            .attr("value", &category)?
            .text(&category)
            .build();
        if Some(&category) == selected.as_ref() {
            crate::dom::set_attribute(&option, "selected", "selected")?;
        }
        append_child(&select, &option)?;
    }

    {
        let state_clone = state.clone();
        let select_clone = select.clone();
        on_change(&select, move |_| {
            let value = input_value(&select_clone);
            {
                let mut query = state_clone.product_query.borrow_mut();
                query.category = if value.is_empty() { None } else { Some(value) };
                query.page = 0;
            }
            let state_inner = state_clone.clone();
            spawn_local(async move {
                CatalogViewModel::new().load_products(state_inner).await;
            });
        })?;
    }

    Ok(select)
}

/// Card de un producto del catálogo
fn render_product_card(state: &AppState, product: &Product) -> Result<Element, JsValue> {
    let lang = state.language();
    let card = ElementBuilder::new("div")?.class("product-card").build();

    if let Some(image_url) = &product.image_url {
        let img = ElementBuilder::new("img")?
            .class("product-image")
            .attr("src", image_url)?
            .attr("alt", &product.name)?
            .build();
        append_child(&card, &img)?;
    }

    let name = ElementBuilder::new("h3")?
        .class("product-name")
        .text(&product.name)
        .build();
    append_child(&card, &name)?;

    if let Some(description) = &product.description {
        let desc = ElementBuilder::new("p")?
            .class("product-description")
            .text(description)
            .build();
        append_child(&card, &desc)?;
    }

    let price = ElementBuilder::new("div")?
        .class("product-price")
        .text(&format!("${:.2}", product.price))
        .build();
    append_child(&card, &price)?;

    if product.requires_prescription {
        let badge = ElementBuilder::new("span")?
            .class("badge badge-prescription")
            .text(&t("requiere_receta", &lang))
            .build();
        append_child(&card, &badge)?;
    }

    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(&t("agregar_carrito", &lang))
        .build();
    if !product.in_stock {
        crate::dom::set_attribute(&add_btn, "disabled", "disabled")?;
    }
    {
        let state_clone = state.clone();
        let product_id = product.id.clone();
        on_click(&add_btn, move |_| {
            let state_inner = state_clone.clone();
            let id = product_id.clone();
            spawn_local(async move {
                CatalogViewModel::new().add_to_cart(state_inner, id, 1).await;
            });
        })?;
    }
    append_child(&card, &add_btn)?;

    Ok(card)
}
