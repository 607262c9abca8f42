use std::env;
use std::process::ExitCode;

use stun_dial::{ProbeRequest, ProbeService};

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let request = match ProbeRequest::from_args(&args) {
        Ok(request) => request,
        Err(err) => {
            // Wrong argument count; usage goes to stdout like the original tool.
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match ProbeService::new().execute(&request).await {
        Ok(report) => {
            println!("Probe request status code: {}", report.status.as_u16());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
