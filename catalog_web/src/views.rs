//! Server-rendered pages. Plain string builders; user-supplied text goes
//! through `escape` before it reaches markup.

use catalog_grpc::proto::product::v1::Product;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn index_page(products: &[Product]) -> String {
    let mut rows = String::new();
    for product in products {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{price:.2}</td>\
             <td><a href=\"/edit?id={id}\">Edit</a> \
             <a href=\"/delete?id={id}\">Delete</a></td></tr>\n",
            id = product.id,
            name = escape(&product.name),
            price = product.price,
        ));
    }
    let body = format!(
        "<h1>Products</h1>\n<p><a href=\"/create\">Add product</a></p>\n\
         <table>\n<tr><th>ID</th><th>Name</th><th>Price</th><th></th></tr>\n{rows}</table>"
    );
    page("Product Catalog", &body)
}

/// Shared create/edit form; `None` renders empty fields with id 0.
pub fn form_page(product: Option<&Product>) -> String {
    let (title, id, name, price) = match product {
        Some(p) => ("Edit Product", p.id, escape(&p.name), format!("{:.2}", p.price)),
        None => ("New Product", 0, String::new(), String::new()),
    };
    let body = format!(
        "<h1>{title}</h1>\n<form method=\"post\" action=\"/save\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <p>Name: <input type=\"text\" name=\"name\" value=\"{name}\"></p>\n\
         <p>Price: <input type=\"text\" name=\"price\" value=\"{price}\"></p>\n\
         <p><input type=\"submit\" value=\"Save\"></p>\n\
         </form>\n<p><a href=\"/\">Back</a></p>"
    );
    page(title, &body)
}
