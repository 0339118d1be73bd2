//! `lightbnb reservations` - completed stays for a guest

use anyhow::Result;
use clap::Parser;
use lightbnb_db::{GuestReservation, DEFAULT_LIMIT};

use super::{format_rating, Session};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,

    /// Max reservations to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,
}

pub async fn run(session: &Session, args: ReservationsArgs) -> Result<()> {
    let gateway = session.gateway().await?;
    let stays = gateway
        .get_reservations_for_guest(args.guest_id, args.limit)
        .await?;

    session.emit(&stays, |stays| print_stays(args.guest_id, stays))
}

fn print_stays(guest_id: i32, stays: &[GuestReservation]) {
    if stays.is_empty() {
        println!("No completed stays for guest {}", guest_id);
        return;
    }

    for stay in stays {
        println!(
            "{} → {}  #{:<5} {} ({}) rating {}",
            stay.start_date,
            stay.end_date,
            stay.property.id,
            stay.property.title,
            stay.property.city,
            format_rating(stay.average_rating),
        );
    }
}
