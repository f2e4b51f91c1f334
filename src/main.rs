#[tokio::main]
async fn main() {
    if let Err(e) = brick_checklist_lib::run(std::env::args().skip(1)).await {
        eprintln!("{}", brick_checklist_lib::report_failure(&e));
        std::process::exit(1);
    }
}
