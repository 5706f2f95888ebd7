//! Text rendering for registration dumps and diagnostics.
//!
//! `std::any::type_name` produces fully qualified paths, which are noisy in
//! log lines. These helpers trim them down and lay registrations out as an
//! aligned table.

/// Strips module paths from every segment of a type name.
///
/// ```
/// use autowire_support::rendering::shorten_type_name;
///
/// let short = shorten_type_name("my_app::services::user::UserService");
/// assert_eq!(short, "UserService");
///
/// let short = shorten_type_name("dyn my_app::traits::Greeter");
/// assert_eq!(short, "dyn Greeter");
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut chars = full_name.chars().peekable();
    let mut segment = String::new();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '&' | '[' | ']' | ';' => {
                result.push_str(&segment);
                result.push(ch);
                segment.clear();
            }
            _ => segment.push(ch),
        }
    }

    result.push_str(&segment);
    result
}

/// One line of a registration table.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Lifetime label, e.g. `Singleton`
    pub lifetime: String,
    /// The type the container looks up
    pub service: String,
    /// The concrete type registered under `service`
    pub implementation: String,
}

/// Renders registrations as an aligned table, one per line.
///
/// ```text
/// [Singleton] dyn Greeter -> EnglishGreeter
/// [Scoped]    RequestLog  -> RequestLog
/// ```
pub fn render_table(rows: &[TableRow]) -> String {
    let lifetime_width = rows.iter().map(|r| r.lifetime.len()).max().unwrap_or(0);
    let service_width = rows.iter().map(|r| r.service.len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let tag = format!("[{}]", row.lifetime);
        out.push_str(&format!(
            "{:<lw$} {:<sw$} -> {}\n",
            tag,
            row.service,
            row.implementation,
            lw = lifetime_width + 2,
            sw = service_width,
        ));
    }
    out
}
