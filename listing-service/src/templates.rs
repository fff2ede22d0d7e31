//! HTML templates for the listing page.
//!
//! Rendering is pure: a snapshot in, a document out. All interpolated
//! values go through askama's HTML escaper, including database and table
//! names reported by the server.

use askama::Template;

use common::models::schema::ServerListing;

/// The listing page: one container block per user database.
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub listing: ServerListing,
}

/// Short diagnostic document shown when the database service is unreachable.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::schema::{is_system_database, DatabaseSchema};

    fn listing_from(reported: Vec<(&str, Vec<&str>)>) -> ServerListing {
        ServerListing {
            databases: reported
                .into_iter()
                .filter(|(name, _)| !is_system_database(name))
                .map(|(name, tables)| DatabaseSchema {
                    name: name.to_string(),
                    tables: tables.into_iter().map(String::from).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn system_databases_never_render_a_block() {
        let listing = listing_from(vec![
            ("mysql", vec!["user", "db"]),
            ("shop", vec!["users", "orders"]),
            ("test", vec![]),
            ("blog", vec!["posts"]),
        ]);
        let html = ListingTemplate { listing }.render().unwrap();

        assert_eq!(html.matches("class=\"base\"").count(), 2);
        assert!(html.contains(">shop<"));
        assert!(html.contains(">blog<"));
        assert!(!html.contains(">mysql<"));
        assert!(!html.contains(">test<"));
    }

    #[test]
    fn one_list_item_per_table_in_reported_order() {
        let listing = listing_from(vec![("shop", vec!["users", "orders"])]);
        let html = ListingTemplate { listing }.render().unwrap();

        assert_eq!(html.matches("<li>").count(), 2);
        assert_eq!(html.matches("<li>users</li>").count(), 1);
        assert_eq!(html.matches("<li>orders</li>").count(), 1);
        let users = html.find("<li>users</li>").unwrap();
        let orders = html.find("<li>orders</li>").unwrap();
        assert!(users < orders, "table order must follow the server");
    }

    #[test]
    fn empty_database_renders_an_empty_list() {
        let listing = listing_from(vec![("empty_db", vec![])]);
        let html = ListingTemplate { listing }.render().unwrap();

        assert_eq!(html.matches("class=\"base\"").count(), 1);
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let listing = listing_from(vec![("shop", vec!["users", "orders"]), ("blog", vec![])]);
        let first = ListingTemplate {
            listing: listing.clone(),
        }
        .render()
        .unwrap();
        let second = ListingTemplate { listing }.render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn names_are_html_escaped() {
        let listing = listing_from(vec![(
            "<script>alert(1)</script>",
            vec!["a<b", "x&y"],
        )]);
        let html = ListingTemplate { listing }.render().unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a&lt;b"));
        assert!(html.contains("x&amp;y"));
    }

    #[test]
    fn error_page_has_no_container_blocks() {
        let html = ErrorTemplate {
            message: "connection refused".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("connection refused"));
        assert!(!html.contains("class=\"base\""));
    }
}
