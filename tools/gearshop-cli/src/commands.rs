//! CLI subcommands.

use anyhow::Result;
use gearshop_core::prelude::*;
use serde::Serialize;

use crate::output::{stars, Output};

const PRODUCT_WIDTHS: [usize; 5] = [4, 16, 9, 9, 6];

/// List catalog products under a category filter.
pub fn catalog(mut session: Session, category: CategoryFilter, out: &Output) -> Result<()> {
    session.set_section(Section::Catalog);
    session.set_category(category);

    let products = session.visible_products();
    if out.is_json() {
        out.json(&products);
        return Ok(());
    }

    out.header(&format!("Catalog: {}", category.as_str()));
    product_table(&products, out);
    out.info("");
    out.info(&format!("Total: {} product(s)", products.len()));
    Ok(())
}

/// List the products flagged as popular.
pub fn popular(session: &Session, out: &Output) -> Result<()> {
    let products = session.popular_products();
    if out.is_json() {
        out.json(&products);
        return Ok(());
    }

    out.header("Popular picks");
    product_table(&products, out);
    Ok(())
}

/// Resolve the similar-product list for a product.
pub fn similar(session: &Session, id: ProductId, limit: usize, out: &Output) -> Result<()> {
    let products = session.catalog().similar_products(id, limit);
    if out.is_json() {
        out.json(&products);
        return Ok(());
    }

    match session.catalog().product(id) {
        Some(product) => out.header(&format!("Similar to {}", product.name)),
        None => {
            out.warn(&format!("product {} is not in the catalog", id));
            return Ok(());
        }
    }

    if products.is_empty() {
        out.info("No similar products listed.");
        return Ok(());
    }
    product_table(&products, out);
    Ok(())
}

/// Show reviews and the rating summary.
pub fn reviews(session: &Session, out: &Output) -> Result<()> {
    let summary = session.review_summary();

    if out.is_json() {
        #[derive(Serialize)]
        struct ReviewsOut<'a> {
            summary: ReviewSummary,
            reviews: &'a [Review],
        }
        out.json(&ReviewsOut {
            summary,
            reviews: session.reviews(),
        });
        return Ok(());
    }

    out.header("Reviews");
    out.kv("total", &summary.total.to_string());
    out.kv("average", &format!("{:.1}", summary.average_rating));
    for review in session.reviews() {
        out.info("");
        out.info(&format!(
            "{} {} ({})",
            stars(review.rating),
            review.author,
            review.posted
        ));
        out.list_item(&review.text);
    }
    Ok(())
}

/// Run a scripted cart session against the demo catalog.
///
/// Exercises every cart operation: add, repeated add, quantity updates
/// in both directions, and removal.
pub fn demo(mut session: Session, out: &Output) -> Result<()> {
    let blaster = ProductId::new(1);
    let armor = ProductId::new(2);

    out.header("Scripted cart session");

    out.step(1, 5, "add Cosmic Blaster");
    session.add_to_cart(blaster);
    print_cart(&session, out);

    out.step(2, 5, "add Cosmic Blaster again");
    session.add_to_cart(blaster);
    print_cart(&session, out);

    out.step(3, 5, "add Neon Armor Pro and raise its quantity by 2");
    session.add_to_cart(armor);
    session.update_quantity(armor, 2);
    print_cart(&session, out);

    out.step(4, 5, "drop the blaster quantity back to zero");
    session.update_quantity(blaster, -2);
    print_cart(&session, out);

    out.step(5, 5, "remove the armor");
    session.remove_from_cart(armor);
    print_cart(&session, out);

    let totals = session.cart().subtotals()?;
    out.debug(&format!("final receipt rows: {}", totals.lines.len()));
    if out.is_json() {
        out.json(&totals);
        return Ok(());
    }

    out.success("cart session complete");
    Ok(())
}

fn product_table(products: &[&Product], out: &Output) {
    out.table_row(
        &["ID", "NAME", "CATEGORY", "PRICE", "RATING"],
        &PRODUCT_WIDTHS,
    );
    for product in products {
        out.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                product.category.as_str(),
                &product.price.display(),
                &stars(product.rating),
            ],
            &PRODUCT_WIDTHS,
        );
    }
}

fn print_cart(session: &Session, out: &Output) {
    if session.cart().is_empty() {
        out.info("cart: empty");
        return;
    }
    for item in session.cart().items() {
        out.list_item(&format!(
            "{} {} x{} ({})",
            item.icon,
            item.name,
            item.quantity,
            item.line_total().display()
        ));
    }
    out.kv("total", &session.total_price().display());
    out.kv("badge", &session.badge_count().to_string());
}
