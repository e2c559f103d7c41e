//! Output formatting for the CLI.

use chrono::{DateTime, Local, Utc};
use console::style;
use nutcart_commerce::catalog::{Badge, BadgeKind, Product};
use nutcart_commerce::search::PageLink;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print one product as a grid row.
    pub fn product_row(&self, product: &Product) {
        if self.json {
            return;
        }
        let badges = product
            .badges
            .iter()
            .map(badge_label)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "  {:>4}  {:<34} {:>10}  {}  {}",
            style(product.id.as_str()).dim(),
            product.title,
            price_label(product),
            rating_label(product.rating, product.reviews),
            badges
        );
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badge text styled by its kind.
pub fn badge_label(badge: &Badge) -> String {
    let text = format!("[{}]", badge.text);
    match badge.kind {
        BadgeKind::Sale => style(text).green().to_string(),
        BadgeKind::Discount => style(text).red().to_string(),
        BadgeKind::Frozen => style(text).cyan().to_string(),
        BadgeKind::Organic => style(text).green().dim().to_string(),
        BadgeKind::New => style(text).magenta().to_string(),
    }
}

/// Selling price, followed by the struck-through price for offers.
pub fn price_label(product: &Product) -> String {
    match product.original_price {
        Some(original) => format!(
            "{} {}",
            product.price,
            style(original.to_string()).dim().strikethrough()
        ),
        None => product.price.to_string(),
    }
}

/// Rating with review count, e.g. "★ 4.6 (1284)".
pub fn rating_label(rating: f32, reviews: u32) -> String {
    format!("{} {:.1} ({})", style("★").yellow(), rating, reviews)
}

/// Page strip such as "‹ 1 … 4 [5] 6 … 9 ›".
pub fn page_strip(links: &[PageLink], current: u32, has_prev: bool, has_next: bool) -> String {
    let mut parts = Vec::with_capacity(links.len() + 2);
    parts.push(if has_prev {
        "‹".to_string()
    } else {
        style("‹").dim().to_string()
    });
    for link in links {
        parts.push(match link {
            PageLink::Page(n) if *n == current => style(format!("[{}]", n)).bold().to_string(),
            PageLink::Page(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        });
    }
    parts.push(if has_next {
        "›".to_string()
    } else {
        style("›").dim().to_string()
    });
    parts.join(" ")
}

/// Format a unix timestamp in local time.
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => secs.to_string(),
    }
}
