mod cli;
mod infra;
mod report;
mod routes;
mod server;

use news_trust::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
