use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct ProductClickStat {
    product_id: u32,
    product_name: String,
    clicks: u64,
}

#[derive(Debug, Deserialize)]
struct AnalyticsResult {
    stats: Vec<ProductClickStat>,
    total_clicks: u64,
    is_loading: bool,
    error: Option<serde_json::Value>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client
            .get(format!("{base_url}/api/analytics/snapshot"))
            .send()
            .await
        {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_storefront_analytics"))
        .env("PORT", port.to_string())
        .env("ANALYTICS_DELAY_MS", "25")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_analytics(server: &TestServer, query: &str) -> AnalyticsResult {
    Client::new()
        .get(format!("{}/api/analytics{query}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn clicks(result: &AnalyticsResult) -> Vec<u64> {
    result.stats.iter().map(|stat| stat.clicks).collect()
}

#[tokio::test]
async fn http_week_range_returns_base_counts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let result = fetch_analytics(&server, "?range=week").await;
    assert_eq!(clicks(&result), vec![45, 38, 32, 29, 24]);
    assert_eq!(result.total_clicks, 168);
    assert!(!result.is_loading);
    assert!(result.error.is_none());
    assert!(!result.stats[0].product_name.is_empty());
}

#[tokio::test]
async fn http_day_range_rounds_each_product() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let result = fetch_analytics(&server, "?range=day").await;
    assert_eq!(clicks(&result), vec![14, 11, 10, 9, 7]);
    assert_eq!(result.total_clicks, 51);
}

#[tokio::test]
async fn http_month_range_scales_each_product() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let result = fetch_analytics(&server, "?range=month").await;
    assert_eq!(clicks(&result), vec![189, 160, 134, 122, 101]);
    assert_eq!(result.total_clicks, 706);
}

#[tokio::test]
async fn http_missing_range_defaults_to_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let result = fetch_analytics(&server, "").await;
    assert_eq!(result.total_clicks, 168);
}

#[tokio::test]
async fn http_unknown_range_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let response = Client::new()
        .get(format!("{}/api/analytics?range=year", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_snapshot_reflects_last_completed_run() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let computed = fetch_analytics(&server, "?range=month").await;
    assert_eq!(computed.total_clicks, 706);

    let snapshot = fetch_analytics(&server, "/snapshot").await;
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.total_clicks, 706);
    assert_eq!(clicks(&snapshot), clicks(&computed));
}

#[tokio::test]
async fn http_index_serves_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let response = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("WhatsApp Click Analytics"));
    assert!(body.contains("data-range=\"month\""));
}

#[tokio::test]
async fn http_product_ids_follow_catalog_order() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    for range in ["day", "week", "month"] {
        let result = fetch_analytics(&server, &format!("?range={range}")).await;
        let ids: Vec<u32> = result.stats.iter().map(|stat| stat.product_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
