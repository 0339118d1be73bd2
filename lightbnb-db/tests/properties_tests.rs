//! Property search and creation against a live database

mod common;

use common::{add_review, gateway, new_property, new_user, unique};
use lightbnb_db::{DbError, ErrorClass, PropertyFilter, Violation, DEFAULT_LIMIT};

#[tokio::test]
#[ignore = "requires database"]
async fn added_property_round_trips_through_search() {
    let gateway = gateway().await;
    let owner = gateway.add_user(&new_user("Owner")).await.unwrap();
    let guest = gateway.add_user(&new_user("Guest")).await.unwrap();
    let city = unique("Roundtrip");

    let new = new_property(owner.id, &city, 12500);
    let created = gateway.add_property(&new).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.owner_id, new.owner_id);
    assert_eq!(created.title, new.title);
    assert_eq!(created.cost_per_night, new.cost_per_night);
    assert_eq!(created.post_code, new.post_code);

    // Search joins reviews, so an unreviewed property is not listed yet.
    let filter = PropertyFilter::default().city(&city).owner_id(owner.id);
    assert!(gateway
        .search_properties(&filter, DEFAULT_LIMIT)
        .await
        .unwrap()
        .is_empty());

    add_review(gateway.pool(), guest.id, created.id, 4).await;

    let listings = gateway.search_properties(&filter, DEFAULT_LIMIT).await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].property, created);
    assert_eq!(listings[0].average_rating, Some(4.0));
}

#[tokio::test]
#[ignore = "requires database"]
async fn city_match_is_case_insensitive_substring() {
    let gateway = gateway().await;
    let owner = gateway.add_user(&new_user("Owner")).await.unwrap();
    let city = unique("Northvale");
    let property = gateway
        .add_property(&new_property(owner.id, &city, 9000))
        .await
        .unwrap();
    add_review(gateway.pool(), owner.id, property.id, 3).await;

    let needle = city[2..city.len() - 4].to_uppercase();
    let listings = gateway
        .search_properties(&PropertyFilter::default().city(needle), DEFAULT_LIMIT)
        .await
        .unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].property.id, property.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn results_are_cheapest_first_and_limited() {
    let gateway = gateway().await;
    let owner = gateway.add_user(&new_user("Owner")).await.unwrap();
    let city = unique("Pricetown");

    for cost in [30000, 10000, 20000] {
        let property = gateway
            .add_property(&new_property(owner.id, &city, cost))
            .await
            .unwrap();
        add_review(gateway.pool(), owner.id, property.id, 5).await;
    }

    let filter = PropertyFilter::default().city(&city);
    let costs: Vec<i32> = gateway
        .search_properties(&filter, DEFAULT_LIMIT)
        .await
        .unwrap()
        .into_iter()
        .map(|listing| listing.property.cost_per_night)
        .collect();
    assert_eq!(costs, vec![10000, 20000, 30000]);

    let limited = gateway.search_properties(&filter, 2).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].property.cost_per_night, 10000);

    let ranged = gateway
        .search_properties(
            &filter.clone().price_range(Some(15000), Some(25000)),
            DEFAULT_LIMIT,
        )
        .await
        .unwrap();
    assert_eq!(ranged.len(), 1);
    assert_eq!(ranged[0].property.cost_per_night, 20000);

    let floor_only = gateway
        .search_properties(&filter.price_range(Some(15000), None), DEFAULT_LIMIT)
        .await
        .unwrap();
    assert_eq!(floor_only.len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn minimum_rating_filters_on_the_average() {
    let gateway = gateway().await;
    let owner = gateway.add_user(&new_user("Owner")).await.unwrap();
    let city = unique("Ratingburg");

    // Averages 4.5
    let good = gateway
        .add_property(&new_property(owner.id, &city, 100))
        .await
        .unwrap();
    add_review(gateway.pool(), owner.id, good.id, 5).await;
    add_review(gateway.pool(), owner.id, good.id, 4).await;

    // Averages 3: a single 5-star review must not qualify it.
    let mixed = gateway
        .add_property(&new_property(owner.id, &city, 200))
        .await
        .unwrap();
    add_review(gateway.pool(), owner.id, mixed.id, 5).await;
    add_review(gateway.pool(), owner.id, mixed.id, 1).await;

    let listings = gateway
        .search_properties(
            &PropertyFilter::default().city(&city).minimum_rating(4.0),
            DEFAULT_LIMIT,
        )
        .await
        .unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].property.id, good.id);
    assert_eq!(listings[0].average_rating, Some(4.5));
}

#[tokio::test]
#[ignore = "requires database"]
async fn owner_filter_combines_with_city() {
    let gateway = gateway().await;
    let alice = gateway.add_user(&new_user("Alice")).await.unwrap();
    let bob = gateway.add_user(&new_user("Bob")).await.unwrap();
    let city = unique("Sharedcity");

    for owner in [&alice, &bob] {
        let property = gateway
            .add_property(&new_property(owner.id, &city, 5000))
            .await
            .unwrap();
        add_review(gateway.pool(), owner.id, property.id, 4).await;
    }

    let listings = gateway
        .search_properties(
            &PropertyFilter::default().city(&city).owner_id(bob.id),
            DEFAULT_LIMIT,
        )
        .await
        .unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].property.owner_id, bob.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_owner_is_a_foreign_key_violation() {
    let gateway = gateway().await;
    let err = gateway
        .add_property(&new_property(i32::MAX, "Nowhere", 100))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Constraint);
    assert!(matches!(
        err,
        DbError::Constraint {
            violation: Violation::ForeignKey,
            ..
        }
    ));
}
