use anyhow::{Result, bail};
use client::ClusterApi;
use protocol::ConnectRequestParams;
use tracing::{error, info};

pub struct IntegrationTestResults {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub test_details: Vec<TestResult>,
}

pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub error: Option<String>,
    pub duration_ms: u128,
}

/// Run the status, connect, status sequence against a live server.
pub async fn run_all_tests(
    server_url: &str,
    params: ConnectRequestParams,
) -> Result<IntegrationTestResults> {
    info!("=== Starting Integration Tests ===");

    let api = ClusterApi::for_server(server_url);
    let mut results = IntegrationTestResults {
        total_tests: 0,
        passed: 0,
        failed: 0,
        test_details: Vec::new(),
    };

    results.add_test(timed("Status check", test_status(&api)).await);
    results.add_test(timed("Connect", test_connect(&api, params.clone())).await);
    results.add_test(
        timed(
            "Status after connect",
            test_status_after_connect(&api, params),
        )
        .await,
    );

    info!("=== Integration Tests Complete ===");
    info!(
        "Total: {}, Passed: {}, Failed: {}",
        results.total_tests, results.passed, results.failed
    );

    Ok(results)
}

impl IntegrationTestResults {
    fn add_test(&mut self, result: TestResult) {
        self.total_tests += 1;
        if result.passed {
            self.passed += 1;
            info!("✓ {} - PASSED ({} ms)", result.name, result.duration_ms);
        } else {
            self.failed += 1;
            error!(
                "✗ {} - FAILED: {}",
                result.name,
                result.error.as_deref().unwrap_or("Unknown error")
            );
        }
        self.test_details.push(result);
    }
}

async fn timed<F>(name: &str, check: F) -> TestResult
where
    F: Future<Output = Result<()>>,
{
    let start = std::time::Instant::now();
    let outcome = check.await;
    TestResult {
        name: name.to_string(),
        passed: outcome.is_ok(),
        error: outcome.err().map(|e| format!("{:#}", e)),
        duration_ms: start.elapsed().as_millis(),
    }
}

async fn test_status(api: &ClusterApi) -> Result<()> {
    let response = api.check_cluster_connection().await?;
    info!("Server reports status '{}'", response.status);
    Ok(())
}

async fn test_connect(api: &ClusterApi, params: ConnectRequestParams) -> Result<()> {
    let response = api.connect_to_cluster(params).await?;
    if !response.is_connected() {
        bail!(
            "connect answered '{}': {}",
            response.status,
            response.message().unwrap_or("no message")
        );
    }
    Ok(())
}

async fn test_status_after_connect(api: &ClusterApi, params: ConnectRequestParams) -> Result<()> {
    let response = api.check_cluster_connection().await?;
    if !response.is_connected() {
        bail!("expected a connected cluster, got '{}'", response.status);
    }
    match response.connection() {
        Some(connection) if connection == params => Ok(()),
        Some(connection) => bail!("server reports a different connection: {:?}", connection),
        // Not every server echoes the connection back.
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::MockApiServer;

    #[tokio::test]
    async fn all_steps_pass_against_mock_server() {
        let server = MockApiServer::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", server.local_addr().unwrap());
        tokio::spawn(server.run());

        let results = run_all_tests(&url, ConnectRequestParams::local(Some(2)))
            .await
            .unwrap();

        assert_eq!(results.total_tests, 3);
        let errors: Vec<_> = results.test_details.iter().map(|t| &t.error).collect();
        assert_eq!(results.failed, 0, "{:?}", errors);
    }

    #[tokio::test]
    async fn all_steps_fail_without_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let results = run_all_tests(&url, ConnectRequestParams::local(None))
            .await
            .unwrap();

        assert_eq!(results.passed, 0);
        assert_eq!(results.failed, 3);
        assert!(results.test_details.iter().all(|t| t.error.is_some()));
    }
}
