mod cli;
mod infra;
mod quote_cmd;
mod routes;
mod server;

use insure_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
