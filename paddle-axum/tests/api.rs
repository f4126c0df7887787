use axum::http::StatusCode;
use axum_test::TestServer;
use paddle_axum::{
    Acknowledgement, Desk, LotDetail, LotOption, Rejection, config::AxumConfig, router,
};
use paddle_core::{
    models::{BidPayload, Catalog, Field, ValidationReport},
    ports::{Delivery, SubmissionTransport},
    rules::{Reporting, Rules},
};
use rstest::*;
use serde_json::{Value, json};
use std::{
    future::IntoFuture,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::Notify;

#[derive(Debug, thiserror::Error)]
#[error("form unreachable")]
struct Unreachable;

/// How the fake form treats deliveries.
#[derive(Clone, Copy)]
enum Behavior {
    Accept,
    Link,
    Fail,
    /// Hold each delivery until released
    Stall,
}

#[derive(Clone)]
struct FakeForm {
    behavior: Behavior,
    delivered: Arc<Mutex<Vec<BidPayload>>>,
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl FakeForm {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            delivered: Default::default(),
            entered: Default::default(),
            release: Default::default(),
        }
    }

    fn delivered(&self) -> Vec<BidPayload> {
        self.delivered.lock().unwrap().clone()
    }
}

impl SubmissionTransport for FakeForm {
    type Error = Unreachable;

    async fn deliver(&self, payload: &BidPayload) -> Result<Delivery, Self::Error> {
        match self.behavior {
            Behavior::Fail => return Err(Unreachable),
            Behavior::Stall => {
                self.entered.notify_one();
                self.release.notified().await;
            }
            Behavior::Accept | Behavior::Link => {}
        }
        self.delivered.lock().unwrap().push(payload.clone());
        Ok(match self.behavior {
            Behavior::Link => Delivery::Redirect {
                url: format!("https://forms.example/viewform?lot={}", payload.lot),
            },
            _ => Delivery::Accepted,
        })
    }
}

#[fixture]
fn catalog() -> Catalog {
    let mut catalog = Catalog::default();
    catalog
        .list_lot("Quilt", Some("https://img.example/quilt.jpg".into()))
        .list_lot("Weekend Cabin", None)
        .list_lot("Signed Guitar", None)
        .record_bid("Weekend Cabin", 650)
        .record_bid("Signed Guitar", 400)
        .register_bidder("Ada Lovelace", "17");
    catalog
}

fn serve(catalog: Catalog, rules: Rules, form: FakeForm) -> TestServer {
    serve_with(catalog, rules, form, AxumConfig::default())
}

fn serve_with(catalog: Catalog, rules: Rules, form: FakeForm, config: AxumConfig) -> TestServer {
    let desk = Desk::new(catalog, rules, form);
    TestServer::new(router(desk, config)).unwrap()
}

fn bid(lot: &str, amount: &str) -> Value {
    json!({
        "sale_lot": lot,
        "bidder_name": "Ada Lovelace",
        "bidding_number": "17",
        "bid_amount": amount,
    })
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn health_and_form(catalog: Catalog) {
    let server = serve(catalog, Rules::default(), FakeForm::new(Behavior::Accept));

    let health = server.get("/health").await;
    health.assert_status_ok();
    health.assert_json(&json!({ "status": "ok" }));

    let form = server.get("/").await;
    form.assert_status_ok();
    assert!(form.text().contains("Submit Bid"));

    server.get("/docs/api.json").await.assert_status_ok();
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn lots_keep_listing_order(catalog: Catalog) {
    let server = serve(catalog, Rules::default(), FakeForm::new(Behavior::Accept));

    let lots = server.get("/lots").await.json::<Vec<LotOption>>();
    let ids: Vec<&str> = lots.iter().map(|lot| &*lot.id).collect();
    assert_eq!(ids, ["Quilt", "Weekend Cabin", "Signed Guitar"]);
    assert_eq!(lots[0].image.as_deref(), Some("https://img.example/quilt.jpg"));
    assert_eq!(lots[1].image, None);
}

#[rstest]
#[case::opening("Quilt", 0, 400, "You are placing the opening bid. Minimum starting bid is $400.")]
#[case::raised("Weekend Cabin", 650, 750, "Current bid is $650. Your bid is autofilled $100 above.")]
#[case::at_opening("Signed Guitar", 400, 500, "Current bid is $400. Your bid is autofilled $100 above.")]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn lot_detail_suggests_next_bid(
    catalog: Catalog,
    #[case] lot: &str,
    #[case] current: u64,
    #[case] suggested: u64,
    #[case] prompt: &str,
) {
    let server = serve(catalog, Rules::default(), FakeForm::new(Behavior::Accept));

    let detail = server.get(&format!("/lots/{lot}")).await.json::<LotDetail>();
    assert_eq!(&*detail.id, lot);
    assert_eq!(detail.current_bid, current);
    assert_eq!(detail.suggested_bid, suggested);
    assert_eq!(detail.prompt, prompt);
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn unknown_lot_is_not_found(catalog: Catalog) {
    let server = serve(catalog, Rules::default(), FakeForm::new(Behavior::Accept));

    server
        .get("/lots/Pony")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn check_reports_every_error(catalog: Catalog) {
    let form = FakeForm::new(Behavior::Accept);
    let server = serve(catalog, Rules::default(), form.clone());

    let response = server.post("/bids/check").json(&bid("", "350")).await;
    response.assert_status_ok();
    let report = response.json::<ValidationReport>();
    assert!(!report.valid);
    let fields: Vec<Field> = report.errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, [Field::SaleLot, Field::BidAmount, Field::BidAmount]);

    let report = server
        .post("/bids/check")
        .json(&bid("Weekend Cabin", "750"))
        .await
        .json::<ValidationReport>();
    assert!(report.valid);

    // checking never submits
    assert!(form.delivered().is_empty());
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn first_error_reporting(catalog: Catalog) {
    let rules = Rules {
        reporting: Reporting::First,
        ..Rules::default()
    };
    let server = serve(catalog, rules, FakeForm::new(Behavior::Accept));

    let report = server
        .post("/bids/check")
        .json(&bid("", "350"))
        .await
        .json::<ValidationReport>();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "Please select a Sale Lot.");
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn invalid_bid_is_not_delivered(catalog: Catalog) {
    let form = FakeForm::new(Behavior::Accept);
    let server = serve(catalog, Rules::default(), form.clone());

    let response = server.post("/bids").json(&bid("", "300")).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let rejection = response.json::<Rejection>();
    let messages: Vec<&str> = rejection.errors.iter().map(|e| &*e.message).collect();
    assert_eq!(
        messages,
        [
            "Please select a Sale Lot.",
            "Bid must be at least $400 and greater than current bid.",
        ]
    );

    let response = server.post("/bids").json(&bid("Weekend Cabin", "650")).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert!(form.delivered().is_empty());
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn valid_bid_is_delivered(catalog: Catalog) {
    let form = FakeForm::new(Behavior::Accept);
    let server = serve(catalog, Rules::default(), form.clone());

    let proposal = json!({
        "sale_lot": "Weekend Cabin",
        "bidder_name": "  Ada Lovelace ",
        "bidding_number": " 17",
        "bid_amount": "$800",
    });
    let response = server.post("/bids").json(&proposal).await;
    response.assert_status_ok();

    let ack = response.json::<Acknowledgement>();
    assert_eq!(&*ack.lot, "Weekend Cabin");
    assert_eq!(ack.amount, 800);
    assert_eq!(ack.redirect, None);
    assert_eq!(ack.dismiss_after_ms, 3000);
    assert_eq!(ack.message, "Bid submitted! Thank you for your support.");

    assert_eq!(
        form.delivered(),
        [BidPayload {
            lot: "Weekend Cabin".into(),
            bidder_name: "Ada Lovelace".into(),
            bidding_number: "17".into(),
            amount: 800,
        }]
    );
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn long_acknowledgement_saturates(catalog: Catalog) {
    let config = AxumConfig {
        acknowledgement: Duration::MAX,
        ..AxumConfig::default()
    };
    let server = serve_with(catalog, Rules::default(), FakeForm::new(Behavior::Accept), config);

    let ack = server
        .post("/bids")
        .json(&bid("Quilt", "400"))
        .await
        .json::<Acknowledgement>();
    assert_eq!(ack.dismiss_after_ms, u64::MAX);
}

#[rstest]
#[case::malformed("{", "application/json", StatusCode::BAD_REQUEST)]
#[case::wrong_shape(r#""a bid""#, "application/json", StatusCode::UNPROCESSABLE_ENTITY)]
#[case::not_json("Quilt for $400", "text/plain", StatusCode::UNSUPPORTED_MEDIA_TYPE)]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn unreadable_bid_is_rejected(
    catalog: Catalog,
    #[case] body: &str,
    #[case] content_type: &str,
    #[case] status: StatusCode,
) {
    let form = FakeForm::new(Behavior::Accept);
    let server = serve(catalog, Rules::default(), form.clone());

    for path in ["/bids", "/bids/check"] {
        let response = server
            .post(path)
            .text(body.to_owned())
            .content_type(content_type)
            .await;
        response.assert_status(status);
        let rejection = response.json::<Rejection>();
        assert_eq!(
            rejection.message,
            "The bid could not be read. Please reload the page and try again."
        );
        assert!(rejection.errors.is_empty());
    }

    assert!(form.delivered().is_empty());
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn link_delivery_redirects(catalog: Catalog) {
    let server = serve(catalog, Rules::default(), FakeForm::new(Behavior::Link));

    let ack = server
        .post("/bids")
        .json(&bid("Quilt", "400"))
        .await
        .json::<Acknowledgement>();
    assert_eq!(
        ack.redirect.as_deref(),
        Some("https://forms.example/viewform?lot=Quilt")
    );
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn unreachable_form_is_bad_gateway(catalog: Catalog) {
    let server = serve(catalog, Rules::default(), FakeForm::new(Behavior::Fail));

    let response = server.post("/bids").json(&bid("Quilt", "500")).await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.json::<Rejection>().errors.is_empty());
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn one_submission_at_a_time(catalog: Catalog) {
    let form = FakeForm::new(Behavior::Stall);
    let server = serve(catalog, Rules::default(), form.clone());

    let first = server.post("/bids").json(&bid("Quilt", "400")).into_future();
    let second = async {
        form.entered.notified().await;
        let response = server.post("/bids").json(&bid("Quilt", "500")).await;
        form.release.notify_one();
        response
    };
    let (first, second) = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(first, second)
    })
    .await
    .unwrap();

    first.assert_status_ok();
    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(form.delivered().len(), 1);

    // the gate reopens once the first submission finishes
    form.release.notify_one();
    server
        .post("/bids")
        .json(&bid("Quilt", "500"))
        .await
        .assert_status_ok();
}

#[rstest]
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn replaced_catalog_is_served(catalog: Catalog) {
    let desk = Desk::new(catalog, Rules::default(), FakeForm::new(Behavior::Accept));
    let server = TestServer::new(router(desk.clone(), AxumConfig::default())).unwrap();

    let mut refreshed = Catalog::default();
    refreshed.list_lot("Quilt", None).record_bid("Quilt", 900);
    desk.replace_catalog(refreshed);

    let lots = server.get("/lots").await.json::<Vec<LotOption>>();
    assert_eq!(lots.len(), 1);
    let detail = server.get("/lots/Quilt").await.json::<LotDetail>();
    assert_eq!(detail.suggested_bid, 1000);
}
