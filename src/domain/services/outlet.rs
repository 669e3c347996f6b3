//! Outlet splicing
//!
//! Places rendered markup into the host HTML template.

use crate::domain::ports::RenderedApp;

/// Comment marking where rendered markup goes.
pub const OUTLET: &str = "<!--vue-ssr-outlet-->";

/// Closing head tag; collected styles are inserted right before it.
pub const HEAD_CLOSE: &str = "</head>";

/// Splice `app` into `template`.
///
/// Returns `None` when the template has no outlet. Everything around the
/// outlet is preserved byte for byte apart from the injected styles, which go
/// before `</head>`, or at the very start when the template has no head.
pub fn splice(template: &str, app: &RenderedApp) -> Option<String> {
    let at = template.find(OUTLET)?;
    let (head, tail) = template.split_at(at);
    let tail = &tail[OUTLET.len()..];

    let mut html = String::with_capacity(template.len() + app.markup.len() + app.styles.len());

    match head.find(HEAD_CLOSE) {
        Some(close) => {
            html.push_str(&head[..close]);
            html.push_str(&app.styles);
            html.push_str(&head[close..]);
        }
        None => {
            html.push_str(&app.styles);
            html.push_str(head);
        }
    }

    html.push_str(&app.markup);
    html.push_str(tail);
    Some(html)
}
