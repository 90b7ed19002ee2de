// Transport tests against a wiremock server.
//
// The client is blocking, so the mock server lives on its own tokio
// runtime and requests are sent from the test thread.

use std::time::Duration;

use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lifx::models::{ColorSpec, ColorValue, EffectParams, NamedColor, PowerMode, Selector};
use lifx::response;
use lifx::routes::{effects, lights, state};
use lifx::{ApiErrorKind, Client, Config, Error, Token};

// ── Helpers ─────────────────────────────────────────────────────────

fn setup() -> (Runtime, MockServer, Client) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let config = Config::default().with_api_url(&server.uri());
    let client = Client::new(&Token::new("test-token").unwrap(), &config).unwrap();
    (rt, server, client)
}

fn mount(rt: &Runtime, server: &MockServer, mock: Mock) {
    rt.block_on(mock.mount(server));
}

// ── Requests ────────────────────────────────────────────────────────

#[test]
fn test_state_sends_form_body_with_bearer() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("PUT"))
            .and(path("/lights/all/state"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("power=on&color=red&duration=2.5"))
            .respond_with(ResponseTemplate::new(207).set_body_json(json!({"results": []})))
            .expect(1),
    );

    let color = ColorSpec {
        color: Some(ColorValue::Named(NamedColor::Red)),
        ..Default::default()
    };
    let req = state::state(Selector::All, Some(PowerMode::On), &color, Some(2.5)).unwrap();
    let resp = client.send(&req).unwrap();

    assert_eq!(resp.status(), 207);
    rt.block_on(server.verify());
}

#[test]
fn test_toggle_without_duration_has_empty_body() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("POST"))
            .and(path("/lights/group:den/toggle"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200))
            .expect(1),
    );

    let resp = client
        .send(&state::toggle(Selector::Group("den".into()), None).unwrap())
        .unwrap();
    assert_eq!(resp.status(), 200);
    rt.block_on(server.verify());
}

#[test]
fn test_pulse_posts_effect_fields() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("POST"))
            .and(path("/lights/label:desk/effects/pulse"))
            .and(body_string(
                "color=blue&period=1&cycles=3&peak=0.5&persist=false&power_on=true",
            ))
            .respond_with(ResponseTemplate::new(207))
            .expect(1),
    );

    let params = EffectParams {
        cycles: 3.0,
        color: ColorSpec {
            color: Some(ColorValue::Named(NamedColor::Blue)),
            ..Default::default()
        },
        ..Default::default()
    };
    let resp = client
        .send(&effects::pulse(Selector::Label("desk".into()), &params).unwrap())
        .unwrap();
    assert_eq!(resp.status(), 207);
    rt.block_on(server.verify());
}

#[test]
fn test_label_with_hash_keeps_action_path() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("PUT"))
            .and(path("/lights/label:Kitchen%20%232/state"))
            .and(body_string("power=on"))
            .respond_with(ResponseTemplate::new(207))
            .expect(1),
    );

    let req = state::power(Selector::Label("Kitchen #2".into()), PowerMode::On, None).unwrap();
    let resp = client.send(&req).unwrap();

    assert_eq!(resp.status(), 207);
    rt.block_on(server.verify());
}

#[test]
fn test_list_decodes_lights() {
    let (rt, server, client) = setup();

    let body = json!([
        {
            "id": "d073d5000001",
            "label": "Kitchen",
            "power": "on",
            "brightness": 1.0,
            "color": {"hue": 0.0, "saturation": 0.0, "kelvin": 3500},
            "group": {"id": "g1", "name": "Downstairs"},
            "location": {"id": "l1", "name": "Home"},
            "connected": true
        }
    ]);

    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path("/lights/location:Home"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body)),
    );

    let resp = client
        .send(&lights::list(Selector::Location("Home".into())))
        .unwrap();
    let lights = response::lights(&response::check(resp).unwrap()).unwrap();

    assert_eq!(lights.len(), 1);
    assert_eq!(lights[0].label, "Kitchen");
    assert_eq!(lights[0].location.name, "Home");
    assert_eq!(lights[0].color.kelvin, 3500);
}

// ── Status passthrough ──────────────────────────────────────────────

#[test]
fn test_error_status_is_returned_not_raised() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid token"})),
            )
            .expect(1),
    );

    let resp = client.send(&lights::list(Selector::All)).unwrap();
    assert_eq!(resp.status(), 401);

    match response::check(resp) {
        Err(Error::Api { kind, detail }) => {
            assert_eq!(kind, ApiErrorKind::Unauthorized);
            assert_eq!(detail, "Invalid token");
        }
        other => panic!("expected api error, got {:?}", other),
    }
    rt.block_on(server.verify());
}

#[test]
fn test_server_error_with_html_body() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<h1>Bad Gateway</h1>")),
    );

    let req = state::power(Selector::All, PowerMode::Off, None).unwrap();
    let err = response::check(client.send(&req).unwrap()).unwrap_err();
    match err {
        Error::Api { kind, detail } => {
            assert_eq!(kind, ApiErrorKind::Server(502));
            assert_eq!(detail, "<h1>Bad Gateway</h1>");
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[test]
fn test_single_request_no_retry() {
    let (rt, server, client) = setup();

    mount(
        &rt,
        &server,
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1),
    );

    let resp = client
        .send(&state::toggle(Selector::All, None).unwrap())
        .unwrap();
    assert_eq!(resp.status(), 503);
    rt.block_on(server.verify());
}

// ── Timeouts ────────────────────────────────────────────────────────

#[test]
fn test_slow_reply_times_out() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2))),
    );

    let config = Config::default()
        .with_api_url(&server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = Client::new(&Token::new("test-token").unwrap(), &config).unwrap();

    let err = client.send(&lights::list(Selector::All)).unwrap_err();
    assert!(matches!(err, Error::Timeout(_)), "{err:?}");
}

#[test]
fn test_unreachable_host_is_transport_error() {
    // nothing listens on port 9 of localhost
    let config = Config::default()
        .with_api_url("http://127.0.0.1:9/v1")
        .with_timeout(Duration::from_millis(500));
    let client = Client::new(&Token::new("test-token").unwrap(), &config).unwrap();

    let err = client.send(&lights::list(Selector::All)).unwrap_err();
    assert!(
        matches!(err, Error::Transport(_) | Error::Timeout(_)),
        "{err:?}"
    );
}
