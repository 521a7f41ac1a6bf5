//! The fixed sampling commands, fed with canned input

#[cfg(test)]
mod tests {
    use crate::common::{PROC_NET_TCP, SS_OUTPUT, print_lines};
    use vspc_exporter::core::sampler::{
        active_connections_command, parse_count, waiting_bytes_pipeline,
    };
    use vspc_exporter::{CommandExecutor, PipelineStage, ProcessExecutor};

    /// Replace the `ss` stage with canned output and keep the filter and sum
    #[tokio::test]
    async fn test_waiting_bytes_filter_and_sum() {
        let mut stages = waiting_bytes_pipeline();
        stages[0] = print_lines(SS_OUTPUT);

        let output = ProcessExecutor::new().run(&stages).await.unwrap();

        // 120 + 30 + 0; the idle established socket and the header add nothing
        assert_eq!(parse_count("waiting_bytes", &output).unwrap(), 150);
    }

    #[tokio::test]
    async fn test_waiting_bytes_all_idle_is_zero() {
        let mut stages = waiting_bytes_pipeline();
        stages[0] = print_lines(&[SS_OUTPUT[0], SS_OUTPUT[1]]);

        let output = ProcessExecutor::new().run(&stages).await.unwrap();

        assert_eq!(parse_count("waiting_bytes", &output).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_waiting_bytes_sum_past_i32_stays_integral() {
        let mut stages = waiting_bytes_pipeline();
        stages[0] = print_lines(&[
            SS_OUTPUT[0],
            "ESTAB      1500000000 0      10.0.0.1:5900      10.0.0.6:50004",
            "ESTAB      1500000000 0      10.0.0.1:5901      10.0.0.7:50005",
        ]);

        let output = ProcessExecutor::new().run(&stages).await.unwrap();

        assert_eq!(output, "3000000000");
        assert_eq!(parse_count("waiting_bytes", &output).unwrap(), 3_000_000_000);
    }

    #[tokio::test]
    async fn test_active_connections_excludes_header_row() {
        let program = active_connections_command().args[0].clone();
        let stages = vec![
            print_lines(PROC_NET_TCP),
            PipelineStage::new("awk", [program]),
        ];

        let output = ProcessExecutor::new().run(&stages).await.unwrap();

        assert_eq!(parse_count("active_connections", &output).unwrap(), 3);
    }

    #[tokio::test]
    async fn test_active_connections_empty_table_is_zero() {
        let program = active_connections_command().args[0].clone();
        let stages = vec![
            print_lines(&PROC_NET_TCP[..1]),
            PipelineStage::new("awk", [program]),
        ];

        let output = ProcessExecutor::new().run(&stages).await.unwrap();

        assert_eq!(output, "0");
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_active_connections_on_this_host() {
        let output = ProcessExecutor::new()
            .run_single(&active_connections_command())
            .await
            .unwrap();
        assert!(parse_count("active_connections", &output).is_ok());
    }
}
