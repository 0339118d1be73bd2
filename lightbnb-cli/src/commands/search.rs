//! `lightbnb search` - filtered property listings

use anyhow::Result;
use clap::Parser;
use lightbnb_db::{PropertyFilter, PropertyListing, PropertySearch, DEFAULT_LIMIT};

use super::{format_rating, Session};

#[derive(Parser, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive part of the city name
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Lowest nightly cost
    #[arg(long)]
    pub min_price: Option<i32>,

    /// Highest nightly cost
    #[arg(long)]
    pub max_price: Option<i32>,

    /// Lowest average review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Max listings to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,

    /// Print the rendered statement instead of running it
    #[arg(long)]
    pub show_sql: bool,
}

impl SearchArgs {
    pub fn filter(&self) -> PropertyFilter {
        PropertyFilter {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

pub async fn run(session: &Session, args: SearchArgs) -> Result<()> {
    let filter = args.filter();

    if args.show_sql {
        let search = PropertySearch::new(&filter, args.limit);
        println!("{}", search.sql());
        return Ok(());
    }

    let gateway = session.gateway().await?;
    let listings = gateway.search_properties(&filter, args.limit).await?;
    session.emit(&listings, |listings| print_listings(listings))
}

fn print_listings(listings: &[PropertyListing]) {
    if listings.is_empty() {
        println!("No matching properties");
        return;
    }

    for listing in listings {
        let p = &listing.property;
        println!(
            "#{:<5} {:>8}/night  rating {:<5} {} - {}, {}",
            p.id,
            p.cost_per_night,
            format_rating(listing.average_rating),
            p.title,
            p.city,
            p.province,
        );
    }
}
