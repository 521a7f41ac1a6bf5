//! Exporter lifecycle end to end

#[cfg(test)]
mod tests {
    use crate::common::{StubExecutor, free_port, http_get, test_config, wait_until};
    use std::collections::HashMap;
    use std::sync::Arc;
    use vspc_exporter::monitoring::definitions::{
        ACTIVE_CONNECTIONS, WAITING_BYTES_IN_RECEIVE_QUEUE,
    };
    use vspc_exporter::{ExporterApp, ExporterError, SchedulerState, StatSampler};

    fn app_with_stub(port: u16, executor: Arc<StubExecutor>) -> ExporterApp {
        let sampler = StatSampler::new(executor);
        ExporterApp::with_source(test_config(port), Arc::new(sampler)).unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_one_tick_publishes_stub_values() {
        let port = free_port();
        let executor = Arc::new(StubExecutor::new("1500", "42"));
        let mut app = app_with_stub(port, executor.clone());

        app.start().unwrap();
        assert_eq!(app.scheduler_state(), SchedulerState::Running);

        let registry = app.registry().clone();
        let labels = HashMap::new();
        assert!(
            wait_until(|| registry.get(ACTIVE_CONNECTIONS, &labels).ok().flatten() == Some(42))
                .await
        );
        assert_eq!(
            registry.get(WAITING_BYTES_IN_RECEIVE_QUEUE, &labels).unwrap(),
            Some(1500)
        );
        // one tick means one pipeline and one single command
        assert_eq!(executor.runs(), 2);

        let body = http_get(port, "/metrics").await;
        assert!(body.contains(
            "openstack_compute_vspc_waiting_bytes_in_receive_queue{kubernetes_pod_name=\"compute-test\"} 1500"
        ));
        assert!(body.contains(
            "openstack_compute_vspc_active_connections{kubernetes_pod_name=\"compute-test\"} 42"
        ));

        app.stop().await.unwrap();
        assert_eq!(app.scheduler_state(), SchedulerState::Idle);
        assert!(app.local_addrs().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_bad_tick_keeps_serving() {
        let port = free_port();
        let mut app = app_with_stub(port, Arc::new(StubExecutor::new("not a number", "3")));

        app.start().unwrap();
        let stats = app.tick_stats();
        assert!(wait_until(|| stats.failed() >= 1).await);
        assert_eq!(stats.succeeded(), 0);

        let body = http_get(port, "/health").await;
        assert!(body.contains("\"status\":\"degraded\""));

        // the parse failure skips the whole sample
        let registry = app.registry().clone();
        let labels = HashMap::new();
        assert_eq!(registry.get(ACTIVE_CONNECTIONS, &labels).unwrap(), None);
        assert_eq!(registry.get(WAITING_BYTES_IN_RECEIVE_QUEUE, &labels).unwrap(), None);
        let metrics = http_get(port, "/metrics").await;
        assert!(!metrics.contains("openstack_compute_vspc_active_connections{"));
        assert_eq!(app.scheduler_state(), SchedulerState::Running);

        app.stop().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_port_in_use_aborts_startup() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();
        let mut app = app_with_stub(port, Arc::new(StubExecutor::new("1", "1")));

        let err = app.start().unwrap_err();

        assert!(matches!(err, ExporterError::ExpositionStartup { .. }));
        assert_eq!(app.scheduler_state(), SchedulerState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_then_start_again() {
        let port = free_port();
        let mut app = app_with_stub(port, Arc::new(StubExecutor::new("1", "1")));

        app.start().unwrap();
        app.stop().await.unwrap();
        assert_eq!(app.scheduler_state(), SchedulerState::Idle);

        app.start().unwrap();
        assert_eq!(app.scheduler_state(), SchedulerState::Running);
        app.stop().await.unwrap();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = test_config(5050);
        config.stats_interval = 0;
        let sampler = StatSampler::new(Arc::new(StubExecutor::new("1", "1")));

        let result = ExporterApp::with_source(config, Arc::new(sampler));

        assert!(matches!(result, Err(ExporterError::Config(_))));
    }
}
