//! The fixed commands behind each statistic

use crate::core::pipeline::{PipelineStage, StageInput};

/// `ss` line prefix of an established socket with empty receive and send queues
pub const ESTABLISHED_IDLE_PATTERN: &str = "ESTAB +0 +0";

/// Kernel TCP connection table
const TCP_TABLE: &str = "/proc/net/tcp";

/// `ss -nt | grep -v -E 'ESTAB +0 +0' | awk '{sum+=$2} END {printf "%.0f\n", sum}'`
///
/// Column 2 of `ss -nt` is Recv-Q. The header line contributes 0 since awk
/// reads "Recv-Q" as zero. The sum is printed with `%.0f` because a bare
/// `print` switches to exponent notation past 2^31 in mawk.
pub fn waiting_bytes_pipeline() -> Vec<PipelineStage> {
    vec![
        PipelineStage::new("ss", ["-nt"]).with_input(StageInput::None),
        PipelineStage::new("grep", ["-v", "-E", ESTABLISHED_IDLE_PATTERN]),
        PipelineStage::new("awk", ["BEGIN {sum=0} {sum=sum+$2} END {printf \"%.0f\\n\", sum}"]),
    ]
}

/// Number of rows in the TCP connection table, header row excluded.
pub fn active_connections_command() -> PipelineStage {
    PipelineStage::new("awk", ["NR > 1 {n++} END {print n+0}", TCP_TABLE])
        .with_input(StageInput::None)
}
