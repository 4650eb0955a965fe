//! HTML rendering for the storefront pages.
//!
//! Pages are assembled from small string builders. Catalog text goes
//! through [`html_escape::encode_text`] in text nodes and
//! [`html_escape::encode_double_quoted_attribute`] in attribute values.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::query::ProductDetail;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<header><a href=\"/\">Storefront</a></header>\n\
         <main>\n{body}</main>\n</body>\n</html>\n",
        title = text(title),
    )
}

/// Renders the home page with the given popular products.
#[must_use]
pub fn home_page(popular: &[ProductDetail]) -> String {
    let mut body = String::from("<h1>Popular products</h1>\n");
    if popular.is_empty() {
        body.push_str("<p>No products in stock.</p>\n");
    } else {
        body.push_str("<ol class=\"popular-products\">\n");
        for detail in popular {
            let _ = writeln!(
                body,
                "<li><a href=\"{url}\">{title}</a> <span class=\"price\">{price}</span> \
                 <span class=\"views\">{views} views</span></li>",
                url = attr(&detail.url),
                title = text(&detail.product.title),
                price = detail.product.price,
                views = detail.views,
            );
        }
        body.push_str("</ol>\n");
    }
    layout("Storefront", &body)
}

/// Renders the detail page of a single product.
#[must_use]
pub fn product_page(detail: &ProductDetail) -> String {
    let product = &detail.product;
    let stock = if detail.inventory == 0 {
        "Out of stock".to_string()
    } else {
        format!("{} in stock", detail.inventory)
    };
    let body = format!(
        "<article class=\"product\" data-sku=\"{sku}\">\n<h1>{title}</h1>\n\
         <p class=\"description\">{description}</p>\n\
         <p class=\"price\">{price}</p>\n<p class=\"inventory\">{stock}</p>\n\
         <p class=\"views\">Viewed {views} times</p>\n</article>\n",
        sku = attr(product.sku.as_ref()),
        title = text(&product.title),
        description = text(&product.description),
        price = product.price,
        views = detail.views,
    );
    layout(&product.title, &body)
}

/// Renders an error page.
#[must_use]
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>Error {status}</h1>\n<p class=\"error\">{}</p>\n",
        text(message)
    );
    layout(&format!("Error {status}"), &body)
}
