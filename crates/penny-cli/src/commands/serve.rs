//! Serve command implementation

use anyhow::Result;

use penny_server::{AppState, ServerConfig};

use super::MonthData;

pub async fn cmd_serve(
    month: MonthData,
    host: &str,
    port: u16,
    allow_origin: Vec<String>,
) -> Result<()> {
    let state = AppState {
        budget: month.config.budget,
        goals: month.config.goals,
        transactions: month.transactions,
        recurring: month.recurring,
    };

    let config = ServerConfig {
        allowed_origins: allow_origin,
    };

    penny_server::serve(state, host, port, config).await
}
