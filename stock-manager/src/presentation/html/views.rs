//! Server-rendered pages
//!
//! Plain string rendering; every value coming from the store or the user
//! passes through [`escape`].

use crate::domain::{Stock, StockId};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.4rem .8rem}\
.error{color:#b00020}form.inline{display:inline}";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn error_block(error: Option<&str>) -> String {
    error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape(e)))
        .unwrap_or_default()
}

pub fn index_page(stocks: &[Stock]) -> String {
    let rows: String = stocks
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{id}</td><td>{name}</td><td>{ticker}</td><td>{price}</td>\
                 <td><a href=\"/edit/{id}\">Edit</a> \
                 <form class=\"inline\" method=\"post\" action=\"/delete/{id}\">\
                 <button type=\"submit\">Delete</button></form></td></tr>\n",
                id = s.id,
                name = escape(&s.name),
                ticker = escape(s.ticker.as_str()),
                price = s.price,
            )
        })
        .collect();

    let body = format!(
        "<h1>Stocks</h1>\n<p><a href=\"/add\">Add stock</a></p>\n\
         <table>\n<thead><tr><th>ID</th><th>Name</th><th>Ticker</th><th>Price</th><th></th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>"
    );
    layout("Stocks", &body)
}

fn stock_form(action: &str, name: &str, ticker: &str, price: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label><br>\n\
         <label>Ticker <input type=\"text\" name=\"ticker\" value=\"{ticker}\"></label><br>\n\
         <label>Price <input type=\"text\" name=\"price\" value=\"{price}\"></label><br>\n\
         <button type=\"submit\">{submit}</button>\n</form>\n<p><a href=\"/\">Back</a></p>",
        action = escape(action),
        name = escape(name),
        ticker = escape(ticker),
        price = escape(price),
    )
}

pub fn add_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Add stock</h1>\n{}{}",
        error_block(error),
        stock_form("/add", "", "", "", "Add")
    );
    layout("Add stock", &body)
}

/// Edit form for `id`; `stock` is `None` when no such row exists
pub fn edit_page(id: StockId, stock: Option<&Stock>, error: Option<&str>) -> String {
    let form = match stock {
        Some(s) => stock_form(
            &format!("/edit/{id}"),
            &s.name,
            s.ticker.as_str(),
            &s.price.to_string(),
            "Save",
        ),
        None => "<p>Stock not found.</p>\n<p><a href=\"/\">Back</a></p>".to_string(),
    };
    let body = format!("<h1>Edit stock</h1>\n{}{}", error_block(error), form);
    layout("Edit stock", &body)
}
