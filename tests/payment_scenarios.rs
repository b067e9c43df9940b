//! End-to-end payment scenarios against the in-memory store.

mod common;

use cantine_pos::domain::client::{ClientCategory, ClientId};
use cantine_pos::domain::money::Balance;
use cantine_pos::domain::ports::ClientStore;
use cantine_pos::domain::product::{ProductCategory, Tray};
use cantine_pos::domain::ticket::PriceBasis;
use cantine_pos::error::PaymentError;
use common::{bundle_tray, payment_fixture, product};
use rust_decimal_macros::dec;

#[tokio::test]
async fn internal_client_pays_bundle_at_fixed_price() {
    let (service, store, id) = payment_fixture(ClientCategory::Internal, dec!(10.00)).await;

    let ticket = service.pay(id, bundle_tray()).await.unwrap();
    assert_eq!(ticket.total, dec!(10.00));
    assert_eq!(ticket.discount, dec!(7.50));
    assert_eq!(ticket.final_amount, dec!(2.50));
    assert_eq!(ticket.basis, PriceBasis::BundleFixedPrice);
    assert_eq!(ticket.client_name, "Ada");
    assert_eq!(ticket.client_category, ClientCategory::Internal);

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::new(dec!(7.50)));
}

#[tokio::test]
async fn contractor_pays_bundle_with_extras_on_top() {
    let (service, store, id) = payment_fixture(ClientCategory::Contractor, dec!(20.00)).await;

    let mut tray = bundle_tray();
    tray.items
        .push(product("Jus", dec!(1.00), ProductCategory::Drink));
    tray.items.push(product(
        "Grand salad bar",
        dec!(6.00),
        ProductCategory::LargeSaladBar,
    ));

    let ticket = service.pay(id, tray).await.unwrap();
    assert_eq!(ticket.total, dec!(17.00));
    assert_eq!(ticket.discount, dec!(6.00));
    assert_eq!(ticket.final_amount, dec!(11.00));

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::new(dec!(9.00)));
}

#[tokio::test]
async fn visitor_with_incomplete_tray_is_rejected_without_debit() {
    let (service, store, id) = payment_fixture(ClientCategory::Visitor, dec!(5.00)).await;

    let tray = Tray::new(vec![
        product("Salade verte", dec!(2.00), ProductCategory::Starter),
        product("Poulet roti", dec!(5.00), ProductCategory::MainCourse),
    ]);

    let err = service.pay(id, tray).await.unwrap_err();
    assert!(matches!(err, PaymentError::InsufficientBalance { .. }));

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::new(dec!(5.00)));
}

#[tokio::test]
async fn internal_discount_floors_incomplete_tray_to_zero_charge() {
    let (service, store, id) = payment_fixture(ClientCategory::Internal, dec!(2.00)).await;

    let tray = Tray::new(vec![
        product("Salade verte", dec!(2.00), ProductCategory::Starter),
        product("Poulet roti", dec!(5.00), ProductCategory::MainCourse),
    ]);

    let ticket = service.pay(id, tray).await.unwrap();
    assert_eq!(ticket.total, dec!(7.00));
    assert_eq!(ticket.discount, dec!(7.50));
    assert_eq!(ticket.final_amount, dec!(0.00));
    assert_eq!(ticket.basis, PriceBasis::Itemized);

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::new(dec!(2.00)));
}

#[tokio::test]
async fn intern_bundle_is_fully_discounted() {
    let (service, store, id) = payment_fixture(ClientCategory::Intern, dec!(15.00)).await;

    let ticket = service.pay(id, bundle_tray()).await.unwrap();
    assert_eq!(ticket.total, dec!(10.00));
    assert_eq!(ticket.discount, dec!(10.00));
    assert_eq!(ticket.final_amount, dec!(0.00));

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::new(dec!(15.00)));
}

#[tokio::test]
async fn unknown_client_fails_without_store_mutation() {
    let (service, store, _id) = payment_fixture(ClientCategory::Visitor, dec!(5.00)).await;

    let err = service.pay(ClientId::new(), bundle_tray()).await.unwrap_err();
    assert!(matches!(err, PaymentError::ClientNotFound(_)));

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].balance, Balance::new(dec!(5.00)));
}

#[tokio::test]
async fn vip_never_pays_even_with_extras() {
    let (service, store, id) = payment_fixture(ClientCategory::Vip, dec!(0.00)).await;

    let mut tray = bundle_tray();
    tray.items.push(product(
        "Grand salad bar",
        dec!(6.00),
        ProductCategory::LargeSaladBar,
    ));

    let ticket = service.pay(id, tray).await.unwrap();
    assert_eq!(ticket.discount, ticket.total);
    assert_eq!(ticket.final_amount, dec!(0.00));

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::ZERO);
}

#[tokio::test]
async fn overdraft_categories_may_go_negative() {
    for category in [ClientCategory::Internal, ClientCategory::Vip] {
        let (service, store, id) = payment_fixture(category, dec!(0.00)).await;

        let tray = Tray::new(vec![product(
            "Poulet roti",
            dec!(20.00),
            ProductCategory::MainCourse,
        )]);
        let ticket = service.pay(id, tray).await.unwrap();

        let client = store.get(id).await.unwrap().unwrap();
        assert_eq!(
            client.balance,
            Balance::new(dec!(0.00) - ticket.final_amount)
        );
        assert!(client.balance <= Balance::ZERO);
    }
}

#[tokio::test]
async fn non_overdraft_categories_are_rejected() {
    for category in [
        ClientCategory::Contractor,
        ClientCategory::Intern,
        ClientCategory::Visitor,
    ] {
        let (service, store, id) = payment_fixture(category, dec!(1.00)).await;

        let tray = Tray::new(vec![product(
            "Poulet roti",
            dec!(20.00),
            ProductCategory::MainCourse,
        )]);
        let err = service.pay(id, tray).await.unwrap_err();
        assert!(
            matches!(err, PaymentError::InsufficientBalance { .. }),
            "{category:?} should not overdraft"
        );

        let client = store.get(id).await.unwrap().unwrap();
        assert_eq!(client.balance, Balance::new(dec!(1.00)));
    }
}

#[tokio::test]
async fn successive_payments_accumulate_debits() {
    let (service, store, id) = payment_fixture(ClientCategory::Internal, dec!(10.00)).await;

    service.pay(id, bundle_tray()).await.unwrap();
    service.pay(id, bundle_tray()).await.unwrap();

    let client = store.get(id).await.unwrap().unwrap();
    assert_eq!(client.balance, Balance::new(dec!(5.00)));
}
